//! Extrapolation methods for curves.
//!
//! - [`FlatExtrapolator`]: constant extension from the last point
//! - [`LinearExtrapolator`]: linear continuation with the last slope
//!
//! Applied to `ln DF`, linear continuation is the flat-forward convention:
//! the instantaneous forward rate at the last knot is held constant.

mod flat;
mod linear;

pub use flat::FlatExtrapolator;
pub use linear::LinearExtrapolator;

/// Trait for extrapolation methods.
///
/// Extrapolators extend curves beyond their last observed point.
pub trait Extrapolator: Send + Sync {
    /// Extrapolates to time `t` given the last known point.
    ///
    /// # Arguments
    ///
    /// * `t` - Target time for extrapolation
    /// * `last_t` - Time of last known point
    /// * `last_value` - Value at last known point
    /// * `last_derivative` - Derivative at last known point (slope)
    fn extrapolate(&self, t: f64, last_t: f64, last_value: f64, last_derivative: f64) -> f64;

    /// Returns the name of the extrapolation method.
    fn name(&self) -> &'static str;
}

/// Configuration for extrapolation beyond curve boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExtrapolationMethod {
    /// No extrapolation - return error outside range
    None,
    /// Constant value from boundary
    Flat,
    /// Linear continuation with boundary slope
    #[default]
    Linear,
}

impl ExtrapolationMethod {
    /// Returns the extrapolator for this method, or `None` when
    /// extrapolation is disabled.
    #[must_use]
    pub fn extrapolator(&self) -> Option<&'static dyn Extrapolator> {
        match self {
            ExtrapolationMethod::None => None,
            ExtrapolationMethod::Flat => Some(&FlatExtrapolator),
            ExtrapolationMethod::Linear => Some(&LinearExtrapolator),
        }
    }
}
