use thiserror::Error;

/// Custom error types for autocode
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AutocodeError {
    #[error("Invalid pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("Auto-coding needs a non-empty code name")]
    EmptyCode,

    #[error("Invalid coded segments: {0}")]
    InvalidSegments(String),

    #[error("Output error: {0}")]
    Output(String),

    #[error("IO error: {0}")]
    Io(String),
}

impl From<std::io::Error> for AutocodeError {
    fn from(err: std::io::Error) -> Self {
        AutocodeError::Io(err.to_string())
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
