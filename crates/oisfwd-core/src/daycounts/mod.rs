//! Day count conventions for money market accrual.
//!
//! Only the two ACT conventions used by overnight indices are provided:
//!
//! - [`Act360`]: Actual/360 - ESTR, SOFR
//! - [`Act365Fixed`]: Actual/365 Fixed - SONIA, TONA, AONIA, CORRA
//!
//! # Usage
//!
//! ```rust
//! use oisfwd_core::daycounts::{DayCount, Act360};
//! use oisfwd_core::types::Date;
//!
//! let start = Date::from_ymd(2025, 1, 1).unwrap();
//! let end = Date::from_ymd(2025, 4, 1).unwrap();
//!
//! assert_eq!(Act360.day_count(start, end), 90);
//! assert!((Act360.year_fraction(start, end) - 0.25).abs() < 1e-15);
//! ```

mod act360;
mod act365;

pub use act360::Act360;
pub use act365::Act365Fixed;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::Date;

/// Trait for day count conventions.
///
/// Implementations must be thread-safe (`Send + Sync`) since curves are
/// built for several currencies in parallel.
pub trait DayCount: Send + Sync {
    /// Returns the name of the day count convention (e.g. "ACT/360").
    fn name(&self) -> &'static str;

    /// Calculates the year fraction between two dates.
    ///
    /// Negative if `end` is before `start`.
    fn year_fraction(&self, start: Date, end: Date) -> f64;

    /// Calculates the number of days between two dates under the convention.
    fn day_count(&self, start: Date, end: Date) -> i64;
}

/// Runtime selector for the supported day count conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayCountConvention {
    /// Actual/360
    Act360,
    /// Actual/365 Fixed
    Act365Fixed,
}

impl DayCountConvention {
    /// Returns the shared day count implementation.
    #[must_use]
    pub fn to_day_count(&self) -> &'static dyn DayCount {
        match self {
            DayCountConvention::Act360 => &Act360,
            DayCountConvention::Act365Fixed => &Act365Fixed,
        }
    }

    /// Returns the convention name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.to_day_count().name()
    }

    /// Year fraction between two dates under this convention.
    #[must_use]
    pub fn year_fraction(&self, start: Date, end: Date) -> f64 {
        self.to_day_count().year_fraction(start, end)
    }

    /// Returns all available day count conventions.
    #[must_use]
    pub fn all() -> &'static [DayCountConvention] {
        &[DayCountConvention::Act360, DayCountConvention::Act365Fixed]
    }
}

impl fmt::Display for DayCountConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_convention_names() {
        assert_eq!(DayCountConvention::Act360.to_string(), "ACT/360");
        assert_eq!(DayCountConvention::Act365Fixed.to_string(), "ACT/365F");
    }

    #[test]
    fn test_convention_dispatch() {
        let start = Date::from_ymd(2025, 1, 15).unwrap();
        let end = Date::from_ymd(2025, 7, 15).unwrap();

        assert_relative_eq!(
            DayCountConvention::Act360.year_fraction(start, end),
            181.0 / 360.0
        );
        assert_relative_eq!(
            DayCountConvention::Act365Fixed.year_fraction(start, end),
            181.0 / 365.0
        );
    }

    #[test]
    fn test_all_conventions_listed() {
        assert_eq!(DayCountConvention::all().len(), 2);
    }

    #[test]
    fn test_serde_roundtrip() {
        let json = serde_json::to_string(&DayCountConvention::Act365Fixed).unwrap();
        assert_eq!(json, "\"Act365Fixed\"");
        let back: DayCountConvention = serde_json::from_str(&json).unwrap();
        assert_eq!(back, DayCountConvention::Act365Fixed);
    }
}
