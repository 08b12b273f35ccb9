use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use crate::models::{Question, QuestionKind, Submission};

/// Reasons a question is not fit to be scored.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("value must be a finite non-negative number, got {0}")]
    InvalidValue(f64),
    #[error("multiple-choice question has no options")]
    NoOptions,
    #[error("multiple-choice question has no correct option")]
    NoCorrectOption,
    #[error("option id {0:?} appears more than once")]
    DuplicateOption(String),
    #[error("numeric answer must be finite, got {0}")]
    InvalidAnswer(f64),
    #[error("tolerance must be a finite non-negative percentage, got {0}")]
    InvalidTolerance(f64),
}

/// Error loading a question bank or submission sheet.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("{} must contain at least one question", .0.display())]
    Empty(PathBuf),
    #[error("question id {0:?} appears more than once")]
    DuplicateQuestion(String),
    #[error("question {id}: {source}")]
    Invalid {
        id: String,
        source: ValidationError,
    },
}

/// Checks that a question is well-formed enough for its score to mean
/// something.
pub fn validate_question(question: &Question) -> Result<(), ValidationError> {
    if !question.value.is_finite() || question.value < 0.0 {
        return Err(ValidationError::InvalidValue(question.value));
    }

    match question.kind {
        QuestionKind::MultipleChoice => {
            if question.options.is_empty() {
                return Err(ValidationError::NoOptions);
            }
            let mut seen = HashSet::new();
            for option in &question.options {
                if !seen.insert(option.id.as_str()) {
                    return Err(ValidationError::DuplicateOption(option.id.clone()));
                }
            }
            if !question.options.iter().any(|o| o.is_correct) {
                return Err(ValidationError::NoCorrectOption);
            }
        }
        QuestionKind::Numeric => {
            if !question.answer.is_finite() {
                return Err(ValidationError::InvalidAnswer(question.answer));
            }
            if !question.tolerance_percent.is_finite() || question.tolerance_percent < 0.0 {
                return Err(ValidationError::InvalidTolerance(question.tolerance_percent));
            }
        }
    }

    Ok(())
}

/// Loads and validates a question bank.
pub fn load_questions_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<Question>, LoadError> {
    let path = path.as_ref();
    let questions: Vec<Question> = read_json(path)?;

    if questions.is_empty() {
        return Err(LoadError::Empty(path.to_path_buf()));
    }

    let mut ids = HashSet::new();
    for question in &questions {
        if !ids.insert(question.id.as_str()) {
            return Err(LoadError::DuplicateQuestion(question.id.clone()));
        }
        validate_question(question).map_err(|source| LoadError::Invalid {
            id: question.id.clone(),
            source,
        })?;
    }

    debug!(path = %path.display(), count = questions.len(), "loaded question bank");
    Ok(questions)
}

/// Loads a submission sheet. An empty sheet is valid: every question is then
/// unanswered.
pub fn load_submissions_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<Submission>, LoadError> {
    let path = path.as_ref();
    let submissions: Vec<Submission> = read_json(path)?;
    debug!(path = %path.display(), count = submissions.len(), "loaded submissions");
    Ok(submissions)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;
    use crate::models::QuestionOption;

    fn write_temp(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_validate_multiple_choice() {
        let ok = Question::multiple_choice(
            "q",
            1.0,
            vec![QuestionOption::correct("a"), QuestionOption::wrong("b")],
        );
        assert!(validate_question(&ok).is_ok());

        let empty = Question::multiple_choice("q", 1.0, Vec::new());
        assert_eq!(validate_question(&empty), Err(ValidationError::NoOptions));

        let no_correct = Question::multiple_choice("q", 1.0, vec![QuestionOption::wrong("a")]);
        assert_eq!(
            validate_question(&no_correct),
            Err(ValidationError::NoCorrectOption)
        );

        let duplicate = Question::multiple_choice(
            "q",
            1.0,
            vec![QuestionOption::correct("a"), QuestionOption::wrong("a")],
        );
        assert_eq!(
            validate_question(&duplicate),
            Err(ValidationError::DuplicateOption("a".to_string()))
        );
    }

    #[test]
    fn test_validate_numeric() {
        assert!(validate_question(&Question::numeric("q", 2.0, 0.0, 0.0)).is_ok());
        assert_eq!(
            validate_question(&Question::numeric("q", 2.0, 1.0, -1.0)),
            Err(ValidationError::InvalidTolerance(-1.0))
        );
        assert!(matches!(
            validate_question(&Question::numeric("q", 2.0, f64::NAN, 1.0)),
            Err(ValidationError::InvalidAnswer(_))
        ));
        assert_eq!(
            validate_question(&Question::numeric("q", -2.0, 1.0, 1.0)),
            Err(ValidationError::InvalidValue(-2.0))
        );
    }

    #[test]
    fn test_load_questions() {
        let file = write_temp(
            r#"[
                {"id": "q1", "type": "numeric", "value": 5, "answer": 3.14, "tolerance_percent": 1},
                {"id": "q2", "type": "multiple_choice", "value": 2,
                 "options": [{"id": "a", "is_correct": true}]}
            ]"#,
        );
        let questions = load_questions_from_json(file.path()).unwrap();
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[1].id, "q2");
    }

    #[test]
    fn test_load_questions_rejects_empty_bank() {
        let file = write_temp("[]");
        assert!(matches!(
            load_questions_from_json(file.path()),
            Err(LoadError::Empty(_))
        ));
    }

    #[test]
    fn test_load_questions_rejects_duplicate_ids() {
        let file = write_temp(
            r#"[
                {"id": "q1", "type": "numeric", "value": 1, "answer": 1},
                {"id": "q1", "type": "numeric", "value": 1, "answer": 2}
            ]"#,
        );
        assert!(matches!(
            load_questions_from_json(file.path()),
            Err(LoadError::DuplicateQuestion(id)) if id == "q1"
        ));
    }

    #[test]
    fn test_load_questions_reports_invalid_question() {
        let file = write_temp(r#"[{"id": "q9", "type": "multiple_choice", "value": 1}]"#);
        let err = load_questions_from_json(file.path()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "question q9: multiple-choice question has no options"
        );
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_questions_from_json("does/not/exist.json").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().starts_with("failed to read does/not/exist.json"));
    }

    #[test]
    fn test_load_malformed_json() {
        let file = write_temp("{not json");
        assert!(matches!(
            load_submissions_from_json(file.path()),
            Err(LoadError::Parse { .. })
        ));
    }

    #[test]
    fn test_load_empty_submissions() {
        let file = write_temp("[]");
        assert!(load_submissions_from_json(file.path()).unwrap().is_empty());
    }
}
