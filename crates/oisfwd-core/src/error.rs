//! Error types for the core crate.
//!
//! Covers date construction and arithmetic, currency parsing and tenor
//! parsing.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// The error type for core operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Error in date calculations or invalid date.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// Currency code outside the supported set.
    #[error("Unsupported currency: {code}")]
    UnsupportedCurrency {
        /// The code as given.
        code: String,
    },

    /// Tenor string whose trailing character is not D, W, M or Y.
    #[error("Invalid tenor unit in '{tenor}': expected trailing D, W, M or Y")]
    InvalidTenorUnit {
        /// The tenor as given.
        tenor: String,
    },

    /// Tenor string whose prefix is not a positive integer.
    #[error("Invalid tenor magnitude in '{tenor}': expected a positive integer")]
    InvalidTenorMagnitude {
        /// The tenor as given.
        tenor: String,
    },
}

impl CoreError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an unsupported currency error.
    #[must_use]
    pub fn unsupported_currency(code: impl Into<String>) -> Self {
        Self::UnsupportedCurrency { code: code.into() }
    }

    /// Creates an invalid tenor unit error.
    #[must_use]
    pub fn invalid_tenor_unit(tenor: impl Into<String>) -> Self {
        Self::InvalidTenorUnit {
            tenor: tenor.into(),
        }
    }

    /// Creates an invalid tenor magnitude error.
    #[must_use]
    pub fn invalid_tenor_magnitude(tenor: impl Into<String>) -> Self {
        Self::InvalidTenorMagnitude {
            tenor: tenor.into(),
        }
    }
}
