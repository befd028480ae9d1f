//! Natural cubic spline interpolation.

use super::{check_range, find_segment, validate_knots, Interpolator};
use crate::error::MathResult;

/// Natural cubic spline interpolation.
///
/// Constructs a smooth curve through data points using piecewise cubic
/// polynomials with continuous first and second derivatives.
///
/// "Natural" means the second derivative is zero at the endpoints.
///
/// # Example
///
/// ```rust
/// use oisfwd_math::interpolation::{CubicSpline, Interpolator};
///
/// let xs = vec![0.0, 1.0, 2.0, 3.0];
/// let ys = vec![0.0, 1.0, 4.0, 9.0];
///
/// let spline = CubicSpline::new(xs, ys).unwrap();
/// let y = spline.interpolate(1.5).unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct CubicSpline {
    xs: Vec<f64>,
    ys: Vec<f64>,
    /// Second derivatives at each knot
    y2s: Vec<f64>,
    allow_extrapolation: bool,
}

impl CubicSpline {
    /// Creates a natural cubic spline interpolator.
    ///
    /// # Errors
    ///
    /// Returns an error if there are fewer than 3 points, if lengths differ,
    /// or if `xs` is not strictly increasing.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> MathResult<Self> {
        validate_knots(&xs, &ys, 3)?;
        let y2s = compute_second_derivatives(&xs, &ys);

        Ok(Self {
            xs,
            ys,
            y2s,
            allow_extrapolation: false,
        })
    }

    /// Enables extrapolation beyond the data range.
    #[must_use]
    pub fn with_extrapolation(mut self) -> Self {
        self.allow_extrapolation = true;
        self
    }

    /// First derivative of the spline at each knot.
    pub fn knot_slopes(&self) -> Vec<f64> {
        let n = self.xs.len();
        let mut slopes = Vec::with_capacity(n);
        for i in 0..n - 1 {
            let h = self.xs[i + 1] - self.xs[i];
            let secant = (self.ys[i + 1] - self.ys[i]) / h;
            slopes.push(secant - h * (2.0 * self.y2s[i] + self.y2s[i + 1]) / 6.0);
        }
        let h = self.xs[n - 1] - self.xs[n - 2];
        let secant = (self.ys[n - 1] - self.ys[n - 2]) / h;
        slopes.push(secant + h * (self.y2s[n - 2] + 2.0 * self.y2s[n - 1]) / 6.0);
        slopes
    }

    fn segment(&self, x: f64) -> (f64, f64, f64, usize) {
        let i = find_segment(&self.xs, x);
        let h = self.xs[i + 1] - self.xs[i];
        let a = (self.xs[i + 1] - x) / h;
        let b = (x - self.xs[i]) / h;
        (h, a, b, i)
    }
}

impl Interpolator for CubicSpline {
    fn interpolate(&self, x: f64) -> MathResult<f64> {
        check_range(&self.xs, x, self.allow_extrapolation)?;
        let (h, a, b, i) = self.segment(x);

        let y = a * self.ys[i]
            + b * self.ys[i + 1]
            + ((a * a * a - a) * self.y2s[i] + (b * b * b - b) * self.y2s[i + 1]) * (h * h) / 6.0;

        Ok(y)
    }

    fn derivative(&self, x: f64) -> MathResult<f64> {
        check_range(&self.xs, x, self.allow_extrapolation)?;
        let (h, a, b, i) = self.segment(x);

        let dy = (self.ys[i + 1] - self.ys[i]) / h
            - (3.0 * a * a - 1.0) * h * self.y2s[i] / 6.0
            + (3.0 * b * b - 1.0) * h * self.y2s[i + 1] / 6.0;

        Ok(dy)
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

/// Computes the second derivatives for natural cubic spline.
fn compute_second_derivatives(xs: &[f64], ys: &[f64]) -> Vec<f64> {
    let n = xs.len();
    let mut y2s = vec![0.0; n];
    let mut u = vec![0.0; n - 1];

    // Decomposition loop
    for i in 1..n - 1 {
        let sig = (xs[i] - xs[i - 1]) / (xs[i + 1] - xs[i - 1]);
        let p = sig * y2s[i - 1] + 2.0;
        y2s[i] = (sig - 1.0) / p;
        u[i] = (ys[i + 1] - ys[i]) / (xs[i + 1] - xs[i])
            - (ys[i] - ys[i - 1]) / (xs[i] - xs[i - 1]);
        u[i] = (6.0 * u[i] / (xs[i + 1] - xs[i - 1]) - sig * u[i - 1]) / p;
    }

    // Natural spline: y2[n-1] = 0
    y2s[n - 1] = 0.0;

    // Back-substitution loop
    for i in (0..n - 1).rev() {
        y2s[i] = y2s[i] * y2s[i + 1] + u[i];
    }

    y2s
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_cubic_spline_through_points() {
        let xs = vec![0.0, 1.0, 2.0, 3.0];
        let ys = vec![0.0, 1.0, 4.0, 9.0];

        let spline = CubicSpline::new(xs.clone(), ys.clone()).unwrap();

        for (x, y) in xs.iter().zip(ys.iter()) {
            assert_relative_eq!(spline.interpolate(*x).unwrap(), *y, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_natural_end_conditions() {
        let xs = vec![0.0, 1.0, 2.0, 3.0];
        let ys = vec![0.0, 1.0, 4.0, 9.0];
        let spline = CubicSpline::new(xs, ys).unwrap();

        assert_eq!(spline.y2s[0], 0.0);
        assert_eq!(spline.y2s[3], 0.0);
    }

    #[test]
    fn test_straight_line_is_reproduced() {
        let xs = vec![0.0, 0.5, 2.0, 3.0];
        let ys: Vec<f64> = xs.iter().map(|x| -0.03 * x).collect();
        let spline = CubicSpline::new(xs, ys).unwrap();

        assert_relative_eq!(spline.interpolate(1.2).unwrap(), -0.036, epsilon = 1e-14);
        for slope in spline.knot_slopes() {
            assert_relative_eq!(slope, -0.03, epsilon = 1e-14);
        }
    }

    #[test]
    fn test_knot_slopes_match_derivative() {
        let xs = vec![0.0, 1.0, 2.5, 4.0];
        let ys = vec![0.0, -0.5, -0.9, -1.6];
        let spline = CubicSpline::new(xs.clone(), ys).unwrap();

        for (x, slope) in xs.iter().zip(spline.knot_slopes()) {
            assert_relative_eq!(spline.derivative(*x).unwrap(), slope, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_cubic_spline_extrapolation_error() {
        let xs = vec![0.0, 1.0, 2.0, 3.0];
        let ys = vec![0.0, 1.0, 4.0, 9.0];

        let spline = CubicSpline::new(xs, ys).unwrap();

        assert!(spline.interpolate(-0.5).is_err());
        assert!(spline.interpolate(3.5).is_err());

        let spline = spline.with_extrapolation();
        assert!(spline.interpolate(3.5).is_ok());
    }

    #[test]
    fn test_insufficient_points() {
        assert!(CubicSpline::new(vec![0.0, 1.0], vec![0.0, 1.0]).is_err());
    }
}
