use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("malformed path: {path} (unrecognized input at byte {index})")]
    Malformed { path: String, index: usize },
    #[error("custom pattern for parameter '{name}' in path '{path}' is not a valid regex: {error}")]
    InvalidConstraint {
        path: String,
        name: String,
        error: String,
    },
    #[error("compiled pattern for path '{path}' is not a valid regex: {error}")]
    InvalidRegex { path: String, error: String },
}

pub type PatternResult<T> = Result<T, PatternError>;
