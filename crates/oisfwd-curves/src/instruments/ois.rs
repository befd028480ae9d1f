//! Overnight Index Swap (OIS) instrument.

use std::fmt;

use oisfwd_core::calendars::{BusinessDayConvention, Calendar};
use oisfwd_core::daycounts::DayCountConvention;
use oisfwd_core::{Currency, Date, Tenor};

use crate::conventions::CurrencyConvention;
use crate::error::CurveResult;
use crate::quotes::RateQuote;
use crate::traits::Curve;

/// One accrual period of the fixed leg.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedPeriod {
    /// Accrual start (adjusted)
    pub start: Date,
    /// Accrual end and payment date (adjusted)
    pub end: Date,
    /// Year fraction on the convention's day count
    pub accrual: f64,
}

/// Overnight Index Swap.
///
/// Exchanges a fixed rate for the daily compounded overnight index from spot
/// to maturity.
///
/// # Schedule
///
/// - `spot = calendar.advance(valuation, settlement_lag)`
/// - `maturity = adjust(spot + tenor)`: Modified Following for month and
///   year tenors, Following for day and week tenors
/// - fixed leg: one period up to one year; beyond that annual periods rolled
///   back from the unadjusted end date, short stub first
///
/// # Pricing
///
/// The compounded overnight leg telescopes:
/// ```text
/// Float Leg: DF(spot) - DF(maturity)
/// Fixed Leg: R × Σ τ_i × DF(pay_i)
/// Par rate:  (DF(spot) - DF(maturity)) / Σ τ_i × DF(pay_i)
/// ```
#[derive(Debug, Clone)]
pub struct OisInstrument {
    currency: Currency,
    tenor: Tenor,
    fixed_rate: f64,
    settlement_lag: u32,
    index: &'static str,
    day_count: DayCountConvention,
    spot: Date,
    maturity: Date,
    fixed_leg: Vec<FixedPeriod>,
}

impl OisInstrument {
    /// Creates an instrument from a quote under a currency's conventions,
    /// with the schedule resolved against `valuation_date`.
    ///
    /// # Errors
    ///
    /// Returns a date error if the schedule runs out of the supported range.
    pub fn new(
        quote: &RateQuote,
        convention: &CurrencyConvention,
        valuation_date: Date,
    ) -> CurveResult<Self> {
        let calendar = convention.calendar();
        let spot = convention.spot_date(valuation_date);

        let roll = if quote.tenor.is_month_based() {
            BusinessDayConvention::ModifiedFollowing
        } else {
            BusinessDayConvention::Following
        };
        let unadjusted_end = spot.add_tenor(quote.tenor)?;
        let maturity = calendar.adjust(unadjusted_end, roll);

        let fixed_leg = fixed_leg_schedule(
            spot,
            unadjusted_end,
            maturity,
            calendar,
            convention.day_count,
        )?;

        Ok(Self {
            currency: convention.currency,
            tenor: quote.tenor,
            fixed_rate: quote.fixed_rate(),
            settlement_lag: convention.settlement_lag_days,
            index: convention.overnight_index,
            day_count: convention.day_count,
            spot,
            maturity,
            fixed_leg,
        })
    }

    /// Currency of the instrument.
    #[must_use]
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Quoted tenor.
    #[must_use]
    pub fn tenor(&self) -> Tenor {
        self.tenor
    }

    /// Fixed rate as a decimal.
    #[must_use]
    pub fn fixed_rate(&self) -> f64 {
        self.fixed_rate
    }

    /// Settlement lag in business days.
    #[must_use]
    pub fn settlement_lag(&self) -> u32 {
        self.settlement_lag
    }

    /// Overnight index name.
    #[must_use]
    pub fn index(&self) -> &'static str {
        self.index
    }

    /// Spot (effective) date.
    #[must_use]
    pub fn spot_date(&self) -> Date {
        self.spot
    }

    /// Adjusted maturity, which is also the curve pillar.
    #[must_use]
    pub fn maturity(&self) -> Date {
        self.maturity
    }

    /// Fixed leg periods, in date order.
    #[must_use]
    pub fn fixed_leg(&self) -> &[FixedPeriod] {
        &self.fixed_leg
    }

    /// Fixed leg annuity `Σ τ_i × DF(pay_i)`.
    pub fn annuity(&self, curve: &dyn Curve) -> CurveResult<f64> {
        self.fixed_leg.iter().try_fold(0.0, |acc, p| {
            Ok(acc + p.accrual * curve.discount_factor(p.end)?)
        })
    }

    /// Par rate implied by `curve`, as a decimal.
    pub fn par_rate(&self, curve: &dyn Curve) -> CurveResult<f64> {
        let float_leg =
            curve.discount_factor(self.spot)? - curve.discount_factor(self.maturity)?;
        Ok(float_leg / self.annuity(curve)?)
    }

    /// PV per unit notional of receiving fixed, paying the overnight leg.
    pub fn pv(&self, curve: &dyn Curve) -> CurveResult<f64> {
        let float_leg =
            curve.discount_factor(self.spot)? - curve.discount_factor(self.maturity)?;
        Ok(self.fixed_rate * self.annuity(curve)? - float_leg)
    }

    /// Maturity discount factor that puts the swap at par, holding every
    /// other discount factor at its value on `curve`.
    ///
    /// `DF(mat) = (DF(spot) - R × Σ_{i<n} τ_i DF(pay_i)) / (1 + R × τ_n)`
    pub fn implied_maturity_df(&self, curve: &dyn Curve) -> CurveResult<f64> {
        let (last, earlier) = match self.fixed_leg.split_last() {
            Some(split) => split,
            None => return Ok(f64::NAN),
        };

        let mut earlier_annuity = 0.0;
        for p in earlier {
            earlier_annuity += p.accrual * curve.discount_factor(p.end)?;
        }

        let df_spot = curve.discount_factor(self.spot)?;
        Ok((df_spot - self.fixed_rate * earlier_annuity) / (1.0 + self.fixed_rate * last.accrual))
    }

    /// Short label, e.g. "EUR ESTR 3M".
    #[must_use]
    pub fn description(&self) -> String {
        format!("{} {} {}", self.currency, self.index, self.tenor)
    }
}

impl fmt::Display for OisInstrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at {:.4}% ({} to {})",
            self.description(),
            self.fixed_rate * 100.0,
            self.spot,
            self.maturity
        )
    }
}

fn fixed_leg_schedule(
    spot: Date,
    unadjusted_end: Date,
    maturity: Date,
    calendar: &dyn Calendar,
    day_count: DayCountConvention,
) -> CurveResult<Vec<FixedPeriod>> {
    let mut boundaries = vec![maturity];

    if unadjusted_end > spot.add_years(1)? {
        let mut years_back = 1;
        loop {
            let roll = unadjusted_end.add_years(-years_back)?;
            if roll <= spot {
                break;
            }
            boundaries.push(calendar.adjust(roll, BusinessDayConvention::ModifiedFollowing));
            years_back += 1;
        }
    }

    boundaries.push(spot);
    boundaries.reverse();
    boundaries.dedup();

    Ok(boundaries
        .windows(2)
        .map(|w| FixedPeriod {
            start: w[0],
            end: w[1],
            accrual: day_count.year_fraction(w[0], w[1]),
        })
        .collect())
}
