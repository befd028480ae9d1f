//! Flat (constant) extrapolation.

use super::Extrapolator;

/// Flat extrapolation - constant value from the last point.
///
/// # Example
///
/// ```rust
/// use oisfwd_math::extrapolation::{FlatExtrapolator, Extrapolator};
///
/// let rate = FlatExtrapolator.extrapolate(15.0, 10.0, 0.05, 0.001);
/// assert_eq!(rate, 0.05);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FlatExtrapolator;

impl Extrapolator for FlatExtrapolator {
    fn extrapolate(&self, _t: f64, _last_t: f64, last_value: f64, _last_derivative: f64) -> f64 {
        last_value
    }

    fn name(&self) -> &'static str {
        "Flat"
    }
}
