//! Shared error types for the application

use thiserror::Error;

/// Main error type for quizmap operations
#[derive(Debug, Error)]
pub enum Error {
    /// Content errors in the record source. Shape errors (wrong field
    /// count) are skipped by the reader and never reach this type.
    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Ranking was asked for an analysis with no respondents in it
    #[error("no respondents found in the record source")]
    NoRespondents,

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a parse error with a 1-based line number
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
