//! CLI error types.

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid date format.
    #[error("Invalid date format: {0}. Use YYYY-MM-DD.")]
    InvalidDate(String),

    /// Malformed `--quotes` entry.
    #[error("Invalid quote: {0}. Use TENOR=RATE, e.g. 3M=3.55.")]
    InvalidQuote(String),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
