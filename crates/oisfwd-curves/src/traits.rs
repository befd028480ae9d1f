//! The discounting seam between instruments and curves.

use oisfwd_core::daycounts::DayCountConvention;
use oisfwd_core::Date;

use crate::error::CurveResult;

/// A date-based discount function.
///
/// Instruments price against this trait rather than a concrete curve, so a
/// bootstrap can evaluate them on partially solved curves.
pub trait Curve: Send + Sync {
    /// The curve's valuation date, where the discount factor is 1.
    fn reference_date(&self) -> Date;

    /// Discount factor from the reference date to `date`.
    ///
    /// Dates on or before the reference date discount at 1.
    fn discount_factor(&self, date: Date) -> CurveResult<f64>;

    /// Continuously compounded forward rate between two dates, as a decimal,
    /// accruing on `day_count`.
    ///
    /// Returns 0 when the dates coincide.
    fn forward_rate(&self, start: Date, end: Date, day_count: DayCountConvention) -> CurveResult<f64> {
        let tau = day_count.year_fraction(start, end);
        if tau == 0.0 {
            return Ok(0.0);
        }
        let df_start = self.discount_factor(start)?;
        let df_end = self.discount_factor(end)?;
        Ok((df_start.ln() - df_end.ln()) / tau)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Flat continuously compounded curve for instrument tests.
    pub(crate) struct FlatCurve {
        pub reference_date: Date,
        pub rate: f64,
        pub day_count: DayCountConvention,
    }

    impl Curve for FlatCurve {
        fn reference_date(&self) -> Date {
            self.reference_date
        }

        fn discount_factor(&self, date: Date) -> CurveResult<f64> {
            let t = self.day_count.year_fraction(self.reference_date, date).max(0.0);
            Ok((-self.rate * t).exp())
        }
    }
}
