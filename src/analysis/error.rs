//! Analysis error types

use thiserror::Error;

/// Caller contract violations detected by the analysis.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("Question index {index} is out of range for a quiz with {len} questions")]
    QuestionIndexOutOfRange { index: usize, len: usize },

    #[error("Question index {0} is recorded more than once")]
    DuplicateQuestionIndex(usize),
}

/// Result type for analysis operations
pub type Result<T> = std::result::Result<T, AnalysisError>;
