mod loader;

pub use loader::{
    LoadError, ValidationError, load_questions_from_json, load_submissions_from_json,
    validate_question,
};
