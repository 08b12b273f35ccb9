use serde::{Deserialize, Serialize};

/// A learner's response to one question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    /// Selected option IDs of a multiple-choice question.
    Selected(Vec<String>),
    /// Value entered for a numeric question.
    Value(f64),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub question_id: String,
    pub answer: Answer,
}

impl Submission {
    pub fn selected(question_id: &str, ids: &[&str]) -> Self {
        Self {
            question_id: question_id.to_string(),
            answer: Answer::Selected(ids.iter().map(|id| id.to_string()).collect()),
        }
    }

    pub fn value(question_id: &str, value: f64) -> Self {
        Self {
            question_id: question_id.to_string(),
            answer: Answer::Value(value),
        }
    }
}
