//! Pairs submitted answers with their questions and scores each one.
//!
//! Grading produces one [`GradedAnswer`] per question in bank order. It never
//! sums scores: every entry stands on its own.

use std::collections::HashMap;

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::{Question, QuestionKind, Submission};
use crate::scoring::{ScoreError, score_answer};

#[derive(Debug, Error)]
pub enum GradeError {
    #[error("submission references unknown question {0:?}")]
    UnknownQuestion(String),
    #[error("question {0:?} was answered more than once")]
    DuplicateSubmission(String),
    #[error(transparent)]
    Score(#[from] ScoreError),
}

/// How a graded answer compares to the question's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Full,
    Partial,
    Zero,
    Unanswered,
}

impl Outcome {
    fn from_score(score: f64, value: f64) -> Self {
        if score <= 0.0 {
            Outcome::Zero
        } else if score >= value {
            Outcome::Full
        } else {
            Outcome::Partial
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Full => "full",
            Outcome::Partial => "partial",
            Outcome::Zero => "zero",
            Outcome::Unanswered => "unanswered",
        }
    }
}

/// Score of a single question.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradedAnswer {
    pub question_id: String,
    pub text: String,
    pub kind: QuestionKind,
    pub value: f64,
    pub score: f64,
    pub outcome: Outcome,
}

/// Formats a score with at most two decimals and no trailing zeros.
pub fn format_score(score: f64) -> String {
    let text = format!("{:.2}", score);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

pub struct Grader<'a> {
    questions: &'a [Question],
    index: HashMap<&'a str, usize>,
}

impl<'a> Grader<'a> {
    pub fn new(questions: &'a [Question]) -> Self {
        let index = questions
            .iter()
            .enumerate()
            .map(|(i, q)| (q.id.as_str(), i))
            .collect();
        Self { questions, index }
    }

    /// Scores every submission against its question.
    pub fn grade(&self, submissions: &[Submission]) -> Result<Vec<GradedAnswer>, GradeError> {
        let mut scores: Vec<Option<f64>> = vec![None; self.questions.len()];

        for submission in submissions {
            let Some(&i) = self.index.get(submission.question_id.as_str()) else {
                warn!(question_id = %submission.question_id, "unknown question in submission");
                return Err(GradeError::UnknownQuestion(submission.question_id.clone()));
            };
            if scores[i].is_some() {
                return Err(GradeError::DuplicateSubmission(
                    submission.question_id.clone(),
                ));
            }

            let question = &self.questions[i];
            let score = score_answer(question, &submission.answer)?;
            debug!(question_id = %question.id, score, value = question.value, "scored");
            scores[i] = Some(score);
        }

        Ok(self
            .questions
            .iter()
            .zip(scores)
            .map(|(question, score)| GradedAnswer {
                question_id: question.id.clone(),
                text: question.text.clone(),
                kind: question.kind,
                value: question.value,
                score: score.unwrap_or(0.0),
                outcome: match score {
                    Some(score) => Outcome::from_score(score, question.value),
                    None => Outcome::Unanswered,
                },
            })
            .collect())
    }
}
