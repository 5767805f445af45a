//! CLI error types.

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
#[allow(dead_code)]
pub enum CliError {
    /// Invalid date format.
    #[error("Invalid date: {0}. Use YYYY-MM-DD.")]
    InvalidDate(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
