//! Currency-specific OIS market conventions.
//!
//! One immutable [`CurrencyConvention`] per supported currency, held in a
//! static table indexed by the closed [`Currency`] enumeration.
//!
//! | Currency | Lag | Day count | Calendar | Index |
//! |----------|-----|-----------|----------|-------|
//! | EUR | T+2 | ACT/360  | TARGET2   | ESTR  |
//! | GBP | T+0 | ACT/365F | UK        | SONIA |
//! | USD | T+2 | ACT/360  | US        | SOFR  |
//! | JPY | T+2 | ACT/365F | Japan     | TONA  |
//! | AUD | T+1 | ACT/365F | Australia | AONIA |
//! | CAD | T+1 | ACT/365F | Canada    | CORRA |
//!
//! # Example
//!
//! ```rust
//! use oisfwd_curves::conventions;
//! use oisfwd_core::Date;
//!
//! let eur = conventions::lookup_code("eur").unwrap();
//! assert_eq!(eur.settlement_lag_days, 2);
//! assert_eq!(eur.overnight_index, "ESTR");
//!
//! let valuation = Date::from_ymd(2025, 1, 15).unwrap();
//! assert_eq!(eur.spot_date(valuation), Date::from_ymd(2025, 1, 17).unwrap());
//! ```

use serde::Serialize;

use oisfwd_core::calendars::{Calendar, CalendarId};
use oisfwd_core::daycounts::DayCountConvention;
use oisfwd_core::{Currency, Date};

use crate::error::CurveResult;

/// Static settlement and accrual conventions for one currency's OIS market.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CurrencyConvention {
    /// Currency
    pub currency: Currency,
    /// Business days from trade date to spot
    pub settlement_lag_days: u32,
    /// Holiday calendar for date rolling
    pub calendar: CalendarId,
    /// Accrual basis for the fixed leg and curve time
    pub day_count: DayCountConvention,
    /// Overnight index referenced by the floating leg
    pub overnight_index: &'static str,
}

impl CurrencyConvention {
    /// Returns the holiday calendar.
    #[must_use]
    pub fn calendar(&self) -> &'static dyn Calendar {
        self.calendar.calendar()
    }

    /// Spot date for a trade on `valuation_date`.
    ///
    /// With a zero lag a holiday valuation date rolls forward.
    #[must_use]
    pub fn spot_date(&self, valuation_date: Date) -> Date {
        // lag is at most a handful of days
        let lag = i32::try_from(self.settlement_lag_days).unwrap_or(i32::MAX);
        self.calendar().advance(valuation_date, lag)
    }
}

static CONVENTIONS: [CurrencyConvention; 6] = [
    CurrencyConvention {
        currency: Currency::EUR,
        settlement_lag_days: 2,
        calendar: CalendarId::Target2,
        day_count: DayCountConvention::Act360,
        overnight_index: "ESTR",
    },
    CurrencyConvention {
        currency: Currency::GBP,
        settlement_lag_days: 0,
        calendar: CalendarId::UnitedKingdom,
        day_count: DayCountConvention::Act365Fixed,
        overnight_index: "SONIA",
    },
    CurrencyConvention {
        currency: Currency::USD,
        settlement_lag_days: 2,
        calendar: CalendarId::UnitedStates,
        day_count: DayCountConvention::Act360,
        overnight_index: "SOFR",
    },
    CurrencyConvention {
        currency: Currency::JPY,
        settlement_lag_days: 2,
        calendar: CalendarId::Japan,
        day_count: DayCountConvention::Act365Fixed,
        overnight_index: "TONA",
    },
    CurrencyConvention {
        currency: Currency::AUD,
        settlement_lag_days: 1,
        calendar: CalendarId::Australia,
        day_count: DayCountConvention::Act365Fixed,
        overnight_index: "AONIA",
    },
    CurrencyConvention {
        currency: Currency::CAD,
        settlement_lag_days: 1,
        calendar: CalendarId::Canada,
        day_count: DayCountConvention::Act365Fixed,
        overnight_index: "CORRA",
    },
];

/// Returns the convention for a supported currency.
#[must_use]
pub fn lookup(currency: Currency) -> &'static CurrencyConvention {
    let index = match currency {
        Currency::EUR => 0,
        Currency::GBP => 1,
        Currency::USD => 2,
        Currency::JPY => 3,
        Currency::AUD => 4,
        Currency::CAD => 5,
    };
    &CONVENTIONS[index]
}

/// Returns the convention for a currency code (case-insensitive, trimmed).
///
/// # Errors
///
/// `UnsupportedCurrency` for any code outside the supported set.
pub fn lookup_code(code: &str) -> CurveResult<&'static CurrencyConvention> {
    Ok(lookup(Currency::from_code(code)?))
}

/// All conventions, in table order.
#[must_use]
pub fn all() -> &'static [CurrencyConvention] {
    &CONVENTIONS
}
