//! Log-cubic discount factor curve.

use oisfwd_core::daycounts::DayCountConvention;
use oisfwd_core::Date;
use oisfwd_math::extrapolation::ExtrapolationMethod;
use oisfwd_math::interpolation::{Interpolator, MonotoneCubic};
use oisfwd_math::MathError;

use crate::error::{CurveError, CurveResult};
use crate::traits::Curve;

/// A discount curve interpolated cubically in `ln DF`.
///
/// Knots sit at the reference date (DF = 1) and at each pillar date, with
/// time measured on the curve's day count. Between knots `ln DF` follows a
/// monotone cubic; past the last knot it is extended by the configured
/// [`ExtrapolationMethod`], linear by default, which holds the terminal
/// instantaneous forward flat.
///
/// # Example
///
/// ```rust
/// use oisfwd_core::daycounts::DayCountConvention;
/// use oisfwd_core::Date;
/// use oisfwd_curves::{Curve, DiscountCurve};
///
/// let today = Date::from_ymd(2025, 1, 15).unwrap();
/// let curve = DiscountCurve::new(
///     today,
///     DayCountConvention::Act360,
///     &[
///         (Date::from_ymd(2025, 4, 17).unwrap(), 0.9911),
///         (Date::from_ymd(2026, 1, 19).unwrap(), 0.9665),
///     ],
/// )
/// .unwrap();
///
/// assert_eq!(curve.discount_factor(today).unwrap(), 1.0);
/// let df = curve.discount_factor(Date::from_ymd(2025, 7, 15).unwrap()).unwrap();
/// assert!(df < 0.9911 && df > 0.9665);
/// ```
#[derive(Debug, Clone)]
pub struct DiscountCurve {
    reference_date: Date,
    day_count: DayCountConvention,
    dates: Vec<Date>,
    dfs: Vec<f64>,
    ln_df: MonotoneCubic,
    extrapolation: ExtrapolationMethod,
}

impl DiscountCurve {
    /// Builds a curve from pillar `(date, discount factor)` pairs.
    ///
    /// Pillars must be strictly after the reference date, in increasing date
    /// order, with positive finite discount factors. They need not be
    /// decreasing; the bootstrap enforces that on its final knots.
    ///
    /// # Errors
    ///
    /// - `NoInstruments` if `pillars` is empty
    /// - `DuplicatePillar` if two pillars share a date
    /// - `NonMonotonic` for a non-positive or non-finite discount factor
    /// - `Interpolation` for pillars out of order or not after the reference date
    pub fn new(
        reference_date: Date,
        day_count: DayCountConvention,
        pillars: &[(Date, f64)],
    ) -> CurveResult<Self> {
        if pillars.is_empty() {
            return Err(CurveError::NoInstruments);
        }

        let mut dates = Vec::with_capacity(pillars.len() + 1);
        let mut dfs = Vec::with_capacity(pillars.len() + 1);
        dates.push(reference_date);
        dfs.push(1.0);

        for &(date, df) in pillars {
            let (prev_date, prev_df) = (dates[dates.len() - 1], dfs[dfs.len() - 1]);
            if date == prev_date {
                return Err(CurveError::duplicate_pillar(date));
            }
            if date < prev_date {
                return Err(CurveError::interpolation(format!(
                    "pillar {date} is not after {prev_date}"
                )));
            }
            if !df.is_finite() || df <= 0.0 {
                return Err(CurveError::non_monotonic(date, df, prev_df));
            }
            dates.push(date);
            dfs.push(df);
        }

        let times = dates
            .iter()
            .map(|d| day_count.year_fraction(reference_date, *d))
            .collect();
        let ln_dfs = dfs.iter().map(|df| df.ln()).collect();
        let ln_df = MonotoneCubic::new(times, ln_dfs)?;

        Ok(Self {
            reference_date,
            day_count,
            dates,
            dfs,
            ln_df,
            extrapolation: ExtrapolationMethod::default(),
        })
    }

    /// Sets the extrapolation beyond the last pillar.
    #[must_use]
    pub fn with_extrapolation(mut self, method: ExtrapolationMethod) -> Self {
        self.extrapolation = method;
        self
    }

    /// Day count used for curve time.
    #[must_use]
    pub fn day_count(&self) -> DayCountConvention {
        self.day_count
    }

    /// Last pillar date.
    #[must_use]
    pub fn max_date(&self) -> Date {
        self.dates[self.dates.len() - 1]
    }

    /// Knot `(date, discount factor)` pairs, starting with the reference date.
    pub fn knots(&self) -> impl Iterator<Item = (Date, f64)> + '_ {
        self.dates.iter().copied().zip(self.dfs.iter().copied())
    }

    /// Curve time of a date, in years on the curve's day count.
    #[must_use]
    pub fn time(&self, date: Date) -> f64 {
        self.day_count.year_fraction(self.reference_date, date)
    }

    /// Discount factor at curve time `t`.
    pub fn discount_factor_at(&self, t: f64) -> CurveResult<f64> {
        if t <= 0.0 {
            return Ok(1.0);
        }

        let t_max = self.ln_df.max_x();
        let ln_df = if t <= t_max {
            self.ln_df.interpolate(t)?
        } else {
            let Some(extrapolator) = self.extrapolation.extrapolator() else {
                return Err(MathError::ExtrapolationNotAllowed {
                    x: t,
                    min: 0.0,
                    max: t_max,
                }
                .into());
            };
            let last = self.ln_df.ys()[self.ln_df.ys().len() - 1];
            extrapolator.extrapolate(t, t_max, last, self.ln_df.derivative(t_max)?)
        };

        Ok(ln_df.exp())
    }

    /// Continuously compounded zero rate to `date`, as a decimal.
    pub fn zero_rate(&self, date: Date) -> CurveResult<f64> {
        let t = self.time(date);
        if t <= 0.0 {
            return Ok(0.0);
        }
        Ok(-self.discount_factor_at(t)?.ln() / t)
    }
}

impl Curve for DiscountCurve {
    fn reference_date(&self) -> Date {
        self.reference_date
    }

    fn discount_factor(&self, date: Date) -> CurveResult<f64> {
        self.discount_factor_at(self.time(date))
    }
}
