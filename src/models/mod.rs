mod question;
mod submission;

pub use question::{Question, QuestionKind, QuestionOption};
pub use submission::{Answer, Submission};
