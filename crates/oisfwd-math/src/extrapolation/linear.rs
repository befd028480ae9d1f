//! Linear extrapolation.

use super::Extrapolator;

/// Linear extrapolation - continues with the last known slope.
///
/// On `ln DF` this holds the terminal instantaneous forward rate constant.
///
/// # Example
///
/// ```rust
/// use oisfwd_math::extrapolation::{LinearExtrapolator, Extrapolator};
///
/// // ln DF = -0.09 at 3Y with a 3% terminal forward
/// let ln_df = LinearExtrapolator.extrapolate(4.0, 3.0, -0.09, -0.03);
/// assert!((ln_df + 0.12).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearExtrapolator;

impl Extrapolator for LinearExtrapolator {
    fn extrapolate(&self, t: f64, last_t: f64, last_value: f64, last_derivative: f64) -> f64 {
        last_value + last_derivative * (t - last_t)
    }

    fn name(&self) -> &'static str {
        "Linear"
    }
}
