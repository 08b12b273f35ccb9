//! # quiz-scoring
//!
//! Scores assessment answers: multiple-choice questions with partial credit
//! and a wrong-answer penalty, and numeric questions checked against a
//! tolerance band.
//!
//! ## Usage
//!
//! ```rust
//! use quiz_scoring::{Question, QuestionOption, score_multiple_choice, score_numeric};
//!
//! let question = Question::multiple_choice(
//!     "q1",
//!     10.0,
//!     vec![
//!         QuestionOption::correct("A"),
//!         QuestionOption::correct("B"),
//!         QuestionOption::wrong("C"),
//!         QuestionOption::wrong("D"),
//!     ],
//! );
//! assert_eq!(score_multiple_choice(&question, ["A", "B"]), 10.0);
//! assert_eq!(score_multiple_choice(&question, ["A", "C"]), 0.0);
//!
//! let question = Question::numeric("q2", 20.0, 100.0, 5.0);
//! assert_eq!(score_numeric(&question, 104.0), 20.0);
//! assert_eq!(score_numeric(&question, 106.0), 0.0);
//! ```
//!
//! Question banks and submission sheets can be loaded from JSON and graded
//! question by question with [`Grader`], then browsed in the terminal with
//! [`Review`].

mod app;
mod data;
mod grading;
mod models;
pub mod scoring;
pub mod terminal;
mod ui;

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use thiserror::Error;

pub use app::App;
pub use data::{
    LoadError, ValidationError, load_questions_from_json, load_submissions_from_json,
    validate_question,
};
pub use grading::{GradeError, GradedAnswer, Grader, Outcome, format_score};
pub use models::{Answer, Question, QuestionKind, QuestionOption, Submission};
pub use scoring::{
    ScoreError, score_answer, score_multiple_choice, score_numeric, try_score_multiple_choice,
    try_score_numeric,
};

/// Error type for loading, grading and reviewing.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Grade(#[from] GradeError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Loads a question bank and a submission sheet and grades every question.
pub fn grade_files<P, S>(questions: P, submission: S) -> Result<Vec<GradedAnswer>, QuizError>
where
    P: AsRef<std::path::Path>,
    S: AsRef<std::path::Path>,
{
    let questions = load_questions_from_json(questions)?;
    let submissions = load_submissions_from_json(submission)?;
    Ok(Grader::new(&questions).grade(&submissions)?)
}

/// Terminal screen listing graded answers.
pub struct Review {
    app: App,
}

impl Review {
    /// Create a review screen over already graded answers.
    pub fn new(graded: Vec<GradedAnswer>) -> Self {
        Self {
            app: App::with_graded(graded),
        }
    }

    /// Takes over the terminal until the user quits.
    pub fn run(mut self) -> Result<(), QuizError> {
        let mut term = terminal::init()?;
        let result = run_event_loop(&mut term, &mut self.app);
        terminal::restore()?;
        result
    }

    /// Get a reference to the underlying screen state.
    pub fn app(&self) -> &App {
        &self.app
    }
}

fn run_event_loop(terminal: &mut terminal::ReviewTerminal, app: &mut App) -> Result<(), QuizError> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(app, key.code) {
                break;
            }
        }
    }

    Ok(())
}

/// Returns true if the review should close.
fn handle_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Down | KeyCode::Char('j') => {
            app.scroll_down();
            false
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.scroll_up();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review_app() -> App {
        let questions = vec![
            Question::numeric("a", 1.0, 1.0, 0.0),
            Question::numeric("b", 1.0, 2.0, 0.0),
            Question::numeric("c", 1.0, 3.0, 0.0),
        ];
        let graded = Grader::new(&questions)
            .grade(&[Submission::value("b", 2.0)])
            .unwrap();
        App::with_graded(graded)
    }

    #[test]
    fn test_handle_input_scrolls() {
        let mut app = review_app();
        assert!(!handle_input(&mut app, KeyCode::Char('j')));
        assert!(!handle_input(&mut app, KeyCode::Down));
        assert_eq!(app.scroll(), 2);
        assert!(!handle_input(&mut app, KeyCode::Up));
        assert_eq!(app.scroll(), 1);
    }

    #[test]
    fn test_handle_input_quits() {
        let mut app = review_app();
        assert!(handle_input(&mut app, KeyCode::Char('q')));
        assert!(handle_input(&mut app, KeyCode::Esc));
        assert!(!handle_input(&mut app, KeyCode::Enter));
    }

    #[test]
    fn test_review_wraps_graded_answers() {
        let review = Review::new(review_app().graded().to_vec());
        assert_eq!(review.app().graded()[1].outcome, Outcome::Full);
    }
}
