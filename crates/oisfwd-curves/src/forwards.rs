//! Daily one-business-day forward rates off a discount curve.

use chrono::{NaiveDateTime, SubsecRound};
use log::debug;
use serde::{Deserialize, Serialize};

use oisfwd_core::calendars::Calendar;
use oisfwd_core::{Currency, Date, Tenor};

use crate::curves::DiscountCurve;
use crate::error::CurveResult;
use crate::traits::Curve;

/// One forward observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForwardPoint {
    /// Date the curve was built for
    pub valuation_date: Date,
    /// Currency of the curve
    pub currency: Currency,
    /// Start of the forward period
    pub forward_date: Date,
    /// Forward rate to the next business day, in percent
    pub forward_rate_percent: f64,
    /// When the run that produced this point happened, to whole seconds
    pub computed_at: NaiveDateTime,
}

/// Horizon and spacing of the extracted series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Span after the valuation date, end date unadjusted and excluded
    pub horizon: Tenor,
    /// Calendar days between successive forward dates
    pub step_days: u32,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            horizon: Tenor::years(3),
            step_days: 1,
        }
    }
}

/// Walks a curve and produces the daily forward series.
///
/// For each forward date `d` in `[valuation, valuation + horizon)`:
///
/// ```text
/// next = calendar.advance(d, 1)
/// fwd  = (ln DF(d) - ln DF(next)) / τ(d, next) × 100
/// ```
///
/// with `τ` on the curve's day count. Weekend and holiday dates are included
/// and carry the forward over the following closure.
#[derive(Debug, Clone, Copy, Default)]
pub struct ForwardExtractor {
    config: ExtractionConfig,
}

impl ForwardExtractor {
    /// Creates an extractor.
    #[must_use]
    pub fn new(config: ExtractionConfig) -> Self {
        Self { config }
    }

    /// The extraction configuration.
    #[must_use]
    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    /// Forward dates for a valuation date, in order.
    ///
    /// # Errors
    ///
    /// Returns a date error if the horizon end is out of range.
    pub fn forward_dates(&self, valuation_date: Date) -> CurveResult<Vec<Date>> {
        let end = valuation_date.add_tenor(self.config.horizon)?;
        let step = i64::from(self.config.step_days.max(1));

        let mut dates = Vec::with_capacity(usize::try_from(end - valuation_date).unwrap_or(0));
        let mut d = valuation_date;
        while d < end {
            dates.push(d);
            // a step past the date range is also past the horizon end
            match d.checked_add_days(step) {
                Ok(next) => d = next,
                Err(_) => break,
            }
        }
        Ok(dates)
    }

    /// Extracts the forward series.
    ///
    /// `computed_at` is truncated to whole seconds on every point.
    ///
    /// # Errors
    ///
    /// Propagates curve evaluation errors, which only occur when the curve
    /// disallows extrapolation and the horizon runs past its last pillar.
    pub fn extract(
        &self,
        curve: &DiscountCurve,
        valuation_date: Date,
        calendar: &dyn Calendar,
        currency: Currency,
        computed_at: NaiveDateTime,
    ) -> CurveResult<Vec<ForwardPoint>> {
        let computed_at = truncate_to_seconds(computed_at);
        let day_count = curve.day_count();

        let points = self
            .forward_dates(valuation_date)?
            .into_iter()
            .map(|d| {
                let next = calendar.advance(d, 1);
                let tau = day_count.year_fraction(d, next);
                let ln_df = curve.discount_factor(d)?.ln();
                let ln_df_next = curve.discount_factor(next)?.ln();
                Ok(ForwardPoint {
                    valuation_date,
                    currency,
                    forward_date: d,
                    forward_rate_percent: (ln_df - ln_df_next) / tau * 100.0,
                    computed_at,
                })
            })
            .collect::<CurveResult<Vec<_>>>()?;

        debug!(
            "{currency} extracted {} forwards from {valuation_date} over {}",
            points.len(),
            self.config.horizon
        );
        Ok(points)
    }
}

/// Drops sub-second precision.
#[must_use]
pub fn truncate_to_seconds(at: NaiveDateTime) -> NaiveDateTime {
    at.trunc_subsecs(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;
    use oisfwd_core::calendars::{Target2Calendar, WeekendCalendar};
    use oisfwd_core::daycounts::DayCountConvention;
    use crate::error::CurveError;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn stamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 15)
            .unwrap()
            .and_hms_micro_opt(14, 30, 5, 123_456)
            .unwrap()
    }

    /// Continuously compounded 3% on ACT/360 out to 4 years.
    fn flat_curve() -> DiscountCurve {
        let today = date(2025, 1, 15);
        let pillars: Vec<(Date, f64)> = [1, 2, 4]
            .iter()
            .map(|&y| {
                let d = today.add_years(y).unwrap();
                let t = DayCountConvention::Act360.year_fraction(today, d);
                (d, (-0.03 * t).exp())
            })
            .collect();
        DiscountCurve::new(today, DayCountConvention::Act360, &pillars).unwrap()
    }

    #[test]
    fn test_three_year_count() {
        let dates = ForwardExtractor::default().forward_dates(date(2025, 1, 15)).unwrap();
        assert_eq!(dates.len(), 1095);
        assert_eq!(dates[0], date(2025, 1, 15));
        assert_eq!(dates[1094], date(2028, 1, 14));
    }

    #[test]
    fn test_leap_day_adds_a_point() {
        let dates = ForwardExtractor::default().forward_dates(date(2027, 6, 1)).unwrap();
        assert_eq!(dates.len(), 1096);
    }

    #[test]
    fn test_step_days() {
        let extractor = ForwardExtractor::new(ExtractionConfig {
            horizon: Tenor::months(1),
            step_days: 7,
        });
        let dates = extractor.forward_dates(date(2025, 1, 15)).unwrap();
        assert_eq!(dates.len(), 5);
        assert_eq!(dates[4], date(2025, 2, 12));
    }

    #[test]
    fn test_step_beyond_date_range_ends_series() {
        let extractor = ForwardExtractor::new(ExtractionConfig {
            horizon: Tenor::years(3),
            step_days: u32::MAX,
        });
        assert_eq!(extractor.forward_dates(date(2025, 1, 15)).unwrap(), vec![date(2025, 1, 15)]);
    }

    #[test]
    fn test_horizon_out_of_range() {
        let extractor = ForwardExtractor::new(ExtractionConfig {
            horizon: Tenor::days(99_999_999),
            step_days: 1,
        });
        assert!(matches!(
            extractor.forward_dates(date(2025, 1, 15)),
            Err(CurveError::Core(_))
        ));
    }

    #[test]
    fn test_flat_curve_gives_flat_forwards() {
        let today = date(2025, 1, 15);
        let points = ForwardExtractor::default()
            .extract(&flat_curve(), today, &WeekendCalendar, Currency::EUR, stamp())
            .unwrap();

        assert_eq!(points.len(), 1095);
        for p in &points {
            assert_relative_eq!(p.forward_rate_percent, 3.0, epsilon = 1e-6);
            assert_eq!(p.currency, Currency::EUR);
            assert_eq!(p.valuation_date, today);
        }
    }

    #[test]
    fn test_points_ordered_and_stamped() {
        let today = date(2025, 1, 15);
        let points = ForwardExtractor::default()
            .extract(&flat_curve(), today, Target2Calendar::global(), Currency::EUR, stamp())
            .unwrap();

        assert!(points.windows(2).all(|w| w[0].forward_date < w[1].forward_date));
        let expected = NaiveDate::from_ymd_opt(2025, 1, 15)
            .unwrap()
            .and_hms_opt(14, 30, 5)
            .unwrap();
        assert!(points.iter().all(|p| p.computed_at == expected));
    }

    #[test]
    fn test_deterministic() {
        let today = date(2025, 1, 15);
        let extractor = ForwardExtractor::default();
        let curve = flat_curve();
        let a = extractor
            .extract(&curve, today, Target2Calendar::global(), Currency::EUR, stamp())
            .unwrap();
        let b = extractor
            .extract(&curve, today, Target2Calendar::global(), Currency::EUR, stamp())
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_config_defaults_from_json() {
        let config: ExtractionConfig = serde_json::from_str(r#"{"horizon": "2Y"}"#).unwrap();
        assert_eq!(config.horizon, Tenor::years(2));
        assert_eq!(config.step_days, 1);
    }
}
