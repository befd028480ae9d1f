//! Engine error types.

use thiserror::Error;

use oisfwd_core::{CoreError, Currency};
use oisfwd_curves::CurveError;

/// Result type for a pipeline run.
pub type PipelineResult<T> = Result<T, PipelineError>;

/// Result type for the forward job.
pub type JobResult<T> = Result<T, JobError>;

/// Result type for market data and output stores.
pub type SourceResult<T> = Result<T, SourceError>;

/// Why a single-currency pipeline run produced nothing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PipelineError {
    /// The currency code is not in the convention table.
    #[error("unsupported currency: {code}")]
    UnsupportedCurrency {
        /// The code as given
        code: String,
    },

    /// A tenor string ends in something other than D, W, M or Y.
    #[error("invalid tenor unit: {tenor}")]
    InvalidTenorUnit {
        /// The tenor as given
        tenor: String,
    },

    /// A tenor string's prefix is not a positive integer.
    #[error("invalid tenor magnitude: {tenor}")]
    InvalidTenorMagnitude {
        /// The tenor as given
        tenor: String,
    },

    /// At least one quote has no usable rate.
    #[error("incomplete quote set for {currency}: missing {}", missing.join(", "))]
    IncompleteQuoteSet {
        /// Currency of the quote set
        currency: Currency,
        /// Tenors without a rate
        missing: Vec<String>,
    },

    /// The bootstrap failed.
    #[error("curve build failed: {0}")]
    CurveBuild(#[from] CurveError),
}

impl PipelineError {
    /// Creates an incomplete quote set error.
    #[must_use]
    pub fn incomplete(currency: Currency, missing: Vec<String>) -> Self {
        Self::IncompleteQuoteSet { currency, missing }
    }

    /// Short stable name of the error kind, for logs.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UnsupportedCurrency { .. } => "UnsupportedCurrency",
            Self::InvalidTenorUnit { .. } => "InvalidTenorUnit",
            Self::InvalidTenorMagnitude { .. } => "InvalidTenorMagnitude",
            Self::IncompleteQuoteSet { .. } => "IncompleteQuoteSet",
            Self::CurveBuild(CurveError::NonConvergent { .. }) => "NonConvergent",
            Self::CurveBuild(CurveError::NonMonotonic { .. }) => "NonMonotonic",
            Self::CurveBuild(_) => "InvalidInput",
        }
    }
}

impl From<CoreError> for PipelineError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::UnsupportedCurrency { code } => Self::UnsupportedCurrency { code },
            CoreError::InvalidTenorUnit { tenor } => Self::InvalidTenorUnit { tenor },
            CoreError::InvalidTenorMagnitude { tenor } => Self::InvalidTenorMagnitude { tenor },
            other => Self::CurveBuild(CurveError::Core(other)),
        }
    }
}

/// Failure of a market data source or output store.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SourceError {
    /// Reading or writing failed.
    #[error("I/O error: {reason}")]
    Io {
        /// Description of the failure
        reason: String,
    },

    /// Content could not be parsed.
    #[error("parse error: {reason}")]
    Parse {
        /// Description of the failure
        reason: String,
    },
}

impl SourceError {
    /// Creates an I/O error.
    #[must_use]
    pub fn io(reason: impl Into<String>) -> Self {
        Self::Io {
            reason: reason.into(),
        }
    }

    /// Creates a parse error.
    #[must_use]
    pub fn parse(reason: impl Into<String>) -> Self {
        Self::Parse {
            reason: reason.into(),
        }
    }
}

/// Job-level failures. Per-currency problems never surface here.
#[derive(Debug, Error)]
pub enum JobError {
    /// The market data fetch failed outright.
    #[error("market data unavailable: {0}")]
    MarketData(#[source] SourceError),

    /// Previous output could not be read or new output not written.
    #[error("output store failed: {0}")]
    Store(#[source] SourceError),

    /// The ticker configuration is empty.
    #[error("no tickers configured")]
    NoTickers,
}
