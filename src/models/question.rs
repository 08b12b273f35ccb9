use serde::{Deserialize, Serialize};

/// The scoring rule a question is evaluated with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    MultipleChoice,
    Numeric,
}

impl std::fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(match self {
            QuestionKind::MultipleChoice => "multiple_choice",
            QuestionKind::Numeric => "numeric",
        })
    }
}

/// One selectable choice of a multiple-choice question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionOption {
    pub id: String,
    #[serde(default)]
    pub text: String,
    pub is_correct: bool,
}

/// A single assessable item.
///
/// `options` is only meaningful for [`QuestionKind::MultipleChoice`];
/// `answer` and `tolerance_percent` only for [`QuestionKind::Numeric`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    #[serde(default)]
    pub text: String,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    /// Maximum achievable score.
    pub value: f64,
    #[serde(default)]
    pub options: Vec<QuestionOption>,
    #[serde(default)]
    pub answer: f64,
    #[serde(default)]
    pub tolerance_percent: f64,
}

impl Question {
    pub fn multiple_choice(id: &str, value: f64, options: Vec<QuestionOption>) -> Self {
        Self {
            id: id.to_string(),
            text: String::new(),
            kind: QuestionKind::MultipleChoice,
            value,
            options,
            answer: 0.0,
            tolerance_percent: 0.0,
        }
    }

    pub fn numeric(id: &str, value: f64, answer: f64, tolerance_percent: f64) -> Self {
        Self {
            id: id.to_string(),
            text: String::new(),
            kind: QuestionKind::Numeric,
            value,
            options: Vec::new(),
            answer,
            tolerance_percent,
        }
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }
}

impl QuestionOption {
    pub fn correct(id: &str) -> Self {
        Self {
            id: id.to_string(),
            text: String::new(),
            is_correct: true,
        }
    }

    pub fn wrong(id: &str) -> Self {
        Self {
            id: id.to_string(),
            text: String::new(),
            is_correct: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_deserialization() {
        let json = r#"{
            "id": "q1",
            "text": "Pick the primes",
            "type": "multiple_choice",
            "value": 10,
            "options": [
                {"id": "a", "text": "2", "is_correct": true},
                {"id": "b", "is_correct": false}
            ]
        }"#;
        let question: Question = serde_json::from_str(json).unwrap();
        assert_eq!(question.kind, QuestionKind::MultipleChoice);
        assert_eq!(question.value, 10.0);
        assert_eq!(question.options.len(), 2);
        assert_eq!(question.options[1].text, "");
        assert_eq!(question.tolerance_percent, 0.0);
    }

    #[test]
    fn test_numeric_deserialization() {
        let json = r#"{"id":"q2","type":"numeric","value":20,"answer":100,"tolerance_percent":5}"#;
        let question: Question = serde_json::from_str(json).unwrap();
        assert_eq!(question.kind, QuestionKind::Numeric);
        assert!(question.options.is_empty());
        assert_eq!(question.answer, 100.0);
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let json = r#"{"id":"q3","type":"essay","value":5}"#;
        assert!(serde_json::from_str::<Question>(json).is_err());
    }
}
