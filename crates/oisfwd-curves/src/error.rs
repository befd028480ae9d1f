//! Error types for curve construction and evaluation.

use oisfwd_core::{CoreError, Date};
use oisfwd_math::MathError;
use thiserror::Error;

/// A specialized Result type for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// Error types for curve operations.
///
/// Build failures are deliberately coarse: the fixed-point iteration either
/// does not converge or produces discount factors that are not strictly
/// decreasing. Everything else is invalid input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    /// Date, tenor or currency error from the core types.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The bootstrap was given no instruments.
    #[error("No instruments provided for bootstrap")]
    NoInstruments,

    /// Two instruments resolve to the same maturity date.
    #[error("Duplicate pillar at {maturity}")]
    DuplicatePillar {
        /// The shared maturity date.
        maturity: Date,
    },

    /// The fixed-point iteration hit its cap.
    #[error("Bootstrap did not converge after {iterations} iterations (residual: {residual:.2e})")]
    NonConvergent {
        /// Number of sweeps attempted.
        iterations: u32,
        /// Largest knot change in the last sweep.
        residual: f64,
    },

    /// A knot is non-positive, non-finite, or not below the previous knot.
    #[error(
        "Non-monotonic discount factor {discount_factor:.10} at {maturity} (previous {previous:.10})"
    )]
    NonMonotonic {
        /// Maturity of the offending knot.
        maturity: Date,
        /// Its discount factor.
        discount_factor: f64,
        /// Discount factor of the preceding knot (1.0 at the reference date).
        previous: f64,
    },

    /// Interpolation failed.
    #[error("Interpolation error: {reason}")]
    Interpolation {
        /// Description of the interpolation error.
        reason: String,
    },
}

impl CurveError {
    /// Creates a non-convergence error.
    #[must_use]
    pub fn non_convergent(iterations: u32, residual: f64) -> Self {
        Self::NonConvergent {
            iterations,
            residual,
        }
    }

    /// Creates a non-monotonic discount factor error.
    #[must_use]
    pub fn non_monotonic(maturity: Date, discount_factor: f64, previous: f64) -> Self {
        Self::NonMonotonic {
            maturity,
            discount_factor,
            previous,
        }
    }

    /// Creates a duplicate pillar error.
    #[must_use]
    pub fn duplicate_pillar(maturity: Date) -> Self {
        Self::DuplicatePillar { maturity }
    }

    /// Creates an interpolation error.
    #[must_use]
    pub fn interpolation(reason: impl Into<String>) -> Self {
        Self::Interpolation {
            reason: reason.into(),
        }
    }
}

impl From<MathError> for CurveError {
    fn from(err: MathError) -> Self {
        Self::interpolation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CurveError::non_convergent(100, 3.2e-9);
        assert_eq!(
            err.to_string(),
            "Bootstrap did not converge after 100 iterations (residual: 3.20e-9)"
        );

        let maturity = Date::from_ymd(2025, 4, 17).unwrap();
        let err = CurveError::non_monotonic(maturity, 1.0001, 1.0);
        assert!(err.to_string().contains("2025-04-17"));
    }

    #[test]
    fn test_core_error_is_transparent() {
        let err: CurveError = CoreError::unsupported_currency("CHF").into();
        assert_eq!(err.to_string(), CoreError::unsupported_currency("CHF").to_string());
    }

    #[test]
    fn test_math_error_conversion() {
        let err: CurveError = MathError::insufficient_data(2, 1).into();
        assert!(matches!(err, CurveError::Interpolation { .. }));
    }
}
