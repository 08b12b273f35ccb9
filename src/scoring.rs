//! Scoring engine.
//!
//! Pure functions that score one question against one answer. Nothing here
//! logs, allocates beyond local temporaries, or keeps state between calls.
//!
//! The lenient functions ([`score_multiple_choice`], [`score_numeric`]) never
//! fail: degenerate input scores `0`. The `try_` variants report a question
//! of the wrong kind as [`ScoreError::KindMismatch`] instead.

use std::collections::HashSet;

use thiserror::Error;

use crate::models::{Answer, Question, QuestionKind};

/// Errors reported by the strict scoring functions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoreError {
    /// The answer shape does not fit the question's kind.
    #[error("question {question_id} is {found}, expected {expected}")]
    KindMismatch {
        question_id: String,
        expected: QuestionKind,
        found: QuestionKind,
    },
}

/// Scores a multiple-choice question with partial credit and a wrong-answer
/// penalty.
///
/// Duplicate IDs in `selected` count once; IDs that match no option are
/// ignored. The result is `value * max(0, credit - penalty)` where credit is
/// the fraction of correct options selected and penalty the fraction of
/// incorrect options selected.
pub fn score_multiple_choice<I, S>(question: &Question, selected: I) -> f64
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let selected: Vec<S> = selected.into_iter().collect();
    let selected: HashSet<&str> = selected.iter().map(|id| id.as_ref()).collect();

    let mut correct_all = 0usize;
    let mut wrong_all = 0usize;
    let mut correct_selected = 0usize;
    let mut wrong_selected = 0usize;

    for option in &question.options {
        let picked = selected.contains(option.id.as_str());
        if option.is_correct {
            correct_all += 1;
            if picked {
                correct_selected += 1;
            }
        } else {
            wrong_all += 1;
            if picked {
                wrong_selected += 1;
            }
        }
    }

    // No correct option means no credit is available at all.
    if correct_all == 0 {
        return 0.0;
    }
    let credit = correct_selected as f64 / correct_all as f64;

    // Every option correct: nothing can be penalised.
    let penalty = if wrong_all == 0 {
        0.0
    } else {
        wrong_selected as f64 / wrong_all as f64
    };

    question.value * (credit - penalty).max(0.0)
}

/// Scores a numeric question against its tolerance band.
///
/// Returns the full `value` when `|answer - user_answer|` is within
/// `|answer| * tolerance_percent / 100` (boundary inclusive), otherwise `0`.
/// A question that is not numeric scores `0` without any comparison.
pub fn score_numeric(question: &Question, user_answer: f64) -> f64 {
    if question.kind != QuestionKind::Numeric {
        return 0.0;
    }
    if within_tolerance(question.answer, question.tolerance_percent, user_answer) {
        question.value
    } else {
        0.0
    }
}

fn within_tolerance(answer: f64, tolerance_percent: f64, user_answer: f64) -> bool {
    let tolerance = answer.abs() * tolerance_percent / 100.0;
    (answer - user_answer).abs() <= tolerance
}

/// Like [`score_multiple_choice`], but rejects questions of another kind.
pub fn try_score_multiple_choice<I, S>(question: &Question, selected: I) -> Result<f64, ScoreError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    expect_kind(question, QuestionKind::MultipleChoice)?;
    Ok(score_multiple_choice(question, selected))
}

/// Like [`score_numeric`], but reports a non-numeric question as an error
/// instead of a zero score.
pub fn try_score_numeric(question: &Question, user_answer: f64) -> Result<f64, ScoreError> {
    expect_kind(question, QuestionKind::Numeric)?;
    Ok(score_numeric(question, user_answer))
}

/// Scores `answer` with the rule matching its shape.
pub fn score_answer(question: &Question, answer: &Answer) -> Result<f64, ScoreError> {
    match answer {
        Answer::Selected(ids) => try_score_multiple_choice(question, ids),
        Answer::Value(value) => try_score_numeric(question, *value),
    }
}

fn expect_kind(question: &Question, expected: QuestionKind) -> Result<(), ScoreError> {
    if question.kind == expected {
        Ok(())
    } else {
        Err(ScoreError::KindMismatch {
            question_id: question.id.clone(),
            expected,
            found: question.kind,
        })
    }
}
