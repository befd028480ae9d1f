//! Monotone cubic interpolation (Hyman-filtered spline slopes).
//!
//! Reference: Hyman, J. M. (1983) "Accurate Monotonicity Preserving Cubic
//! Interpolation"

use super::{check_range, find_segment, validate_knots, CubicSpline, Interpolator};
use crate::error::MathResult;

/// Piecewise cubic Hermite interpolation with monotonicity control.
///
/// Knot slopes start from the natural cubic spline through the data and are
/// then limited by the Hyman filter, so that on monotone data the curve is
/// monotone as well. Each segment is evaluated in Hermite form from the two
/// knot values and the two filtered slopes.
///
/// With only two knots the spline slopes coincide with the secant and the
/// interpolant is a straight line.
///
/// # Example
///
/// ```rust
/// use oisfwd_math::interpolation::{Interpolator, MonotoneCubic};
///
/// // ln DF at 0, 1M, 3M, 1Y
/// let times = vec![0.0, 0.0861, 0.2472, 1.0139];
/// let ln_df = vec![0.0, -0.00301, -0.00877, -0.03447];
///
/// let interp = MonotoneCubic::new(times, ln_df).unwrap();
/// let mid = interp.interpolate(0.5).unwrap();
/// assert!(mid < -0.00877 && mid > -0.03447);
/// ```
#[derive(Debug, Clone)]
pub struct MonotoneCubic {
    xs: Vec<f64>,
    ys: Vec<f64>,
    slopes: Vec<f64>,
    allow_extrapolation: bool,
}

impl MonotoneCubic {
    /// Creates a monotone cubic interpolator.
    ///
    /// # Errors
    ///
    /// Returns an error if there are fewer than 2 points, if lengths differ,
    /// or if `xs` is not strictly increasing.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> MathResult<Self> {
        validate_knots(&xs, &ys, 2)?;

        let secants: Vec<f64> = xs
            .windows(2)
            .zip(ys.windows(2))
            .map(|(x, y)| (y[1] - y[0]) / (x[1] - x[0]))
            .collect();

        let slopes = if xs.len() == 2 {
            vec![secants[0], secants[0]]
        } else {
            let spline = CubicSpline::new(xs.clone(), ys.clone())?;
            let raw = spline.knot_slopes();
            let filtered = hyman_filter(raw.clone(), &secants);
            let limited = raw.iter().zip(&filtered).filter(|(a, b)| a != b).count();
            if limited > 0 {
                log::trace!("hyman filter limited {} of {} knot slopes", limited, raw.len());
            }
            filtered
        };

        Ok(Self {
            xs,
            ys,
            slopes,
            allow_extrapolation: false,
        })
    }

    /// Enables extrapolation beyond the data range (the boundary cubic is
    /// continued).
    #[must_use]
    pub fn with_extrapolation(mut self) -> Self {
        self.allow_extrapolation = true;
        self
    }

    /// Knot abscissae.
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    /// Knot values.
    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    /// Filtered slopes at each knot.
    pub fn slopes(&self) -> &[f64] {
        &self.slopes
    }
}

impl Interpolator for MonotoneCubic {
    fn interpolate(&self, x: f64) -> MathResult<f64> {
        check_range(&self.xs, x, self.allow_extrapolation)?;
        let i = find_segment(&self.xs, x);

        let h = self.xs[i + 1] - self.xs[i];
        let t = (x - self.xs[i]) / h;
        let t2 = t * t;
        let t3 = t2 * t;

        let h00 = 2.0 * t3 - 3.0 * t2 + 1.0;
        let h10 = t3 - 2.0 * t2 + t;
        let h01 = -2.0 * t3 + 3.0 * t2;
        let h11 = t3 - t2;

        Ok(h00 * self.ys[i]
            + h10 * h * self.slopes[i]
            + h01 * self.ys[i + 1]
            + h11 * h * self.slopes[i + 1])
    }

    fn derivative(&self, x: f64) -> MathResult<f64> {
        check_range(&self.xs, x, self.allow_extrapolation)?;
        let i = find_segment(&self.xs, x);

        let h = self.xs[i + 1] - self.xs[i];
        let t = (x - self.xs[i]) / h;
        let t2 = t * t;

        let d00 = 6.0 * t2 - 6.0 * t;
        let d10 = 3.0 * t2 - 4.0 * t + 1.0;
        let d01 = -6.0 * t2 + 6.0 * t;
        let d11 = 3.0 * t2 - 2.0 * t;

        Ok((d00 * self.ys[i] + d01 * self.ys[i + 1]) / h
            + d10 * self.slopes[i]
            + d11 * self.slopes[i + 1])
    }

    fn allows_extrapolation(&self) -> bool {
        self.allow_extrapolation
    }

    fn min_x(&self) -> f64 {
        self.xs[0]
    }

    fn max_x(&self) -> f64 {
        self.xs[self.xs.len() - 1]
    }
}

/// Limits each knot slope to three times the smaller adjacent secant, and
/// zeroes it where it disagrees in sign with the data.
fn hyman_filter(mut slopes: Vec<f64>, secants: &[f64]) -> Vec<f64> {
    let n = slopes.len();
    for (i, slope) in slopes.iter_mut().enumerate() {
        let bound = if i == 0 {
            secants[0]
        } else if i == n - 1 {
            secants[n - 2]
        } else {
            let (left, right) = (secants[i - 1], secants[i]);
            if left * right <= 0.0 {
                // local extremum in the data
                *slope = 0.0;
                continue;
            }
            if left.abs() < right.abs() {
                left
            } else {
                right
            }
        };

        *slope = if *slope * bound > 0.0 {
            slope.signum() * slope.abs().min(3.0 * bound.abs())
        } else {
            0.0
        };
    }
    slopes
}
