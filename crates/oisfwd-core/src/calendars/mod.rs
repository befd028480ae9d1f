//! Business day calendars and conventions.
//!
//! This module provides:
//! - Holiday calendars for the six OIS markets (TARGET, UK, US, Japan,
//!   Australia, Canada)
//! - Business day adjustment conventions
//! - Business day and tenor advancement

use serde::{Deserialize, Serialize};
use std::fmt;

mod australia;
mod bitmap;
mod canada;
mod conventions;
mod japan;
mod target2;
mod uk;
mod us_calendar;

pub use australia::AustraliaCalendar;
pub use bitmap::{HolidayBitmap, HolidayCalendarBuilder, Observance, WeekendType};
pub use canada::CanadaCalendar;
pub use conventions::BusinessDayConvention;
pub use japan::JapanCalendar;
pub use target2::Target2Calendar;
pub use uk::UKCalendar;
pub use us_calendar::USCalendar;

use crate::error::CoreResult;
use crate::types::{Date, Tenor};

/// Trait for business day calendars.
///
/// Calendars determine which days are business days vs holidays
/// for a specific market or jurisdiction.
pub trait Calendar: Send + Sync {
    /// Returns the name of the calendar.
    fn name(&self) -> &'static str;

    /// Returns true if the date is a business day.
    fn is_business_day(&self, date: Date) -> bool;

    /// Returns true if the date is a holiday or weekend.
    fn is_holiday(&self, date: Date) -> bool {
        !self.is_business_day(date)
    }

    /// Adjusts a date according to the given business day convention.
    fn adjust(&self, date: Date, convention: BusinessDayConvention) -> Date {
        conventions::adjust(date, convention, self)
    }

    /// Advances a date by a number of business days.
    ///
    /// Zero days rolls a non-business day forward. Otherwise each step
    /// moves to the next business day strictly after the current date, so
    /// advancing a holiday by one lands on the first business day after it.
    fn advance(&self, date: Date, business_days: i32) -> Date {
        if business_days == 0 {
            return self.adjust(date, BusinessDayConvention::Following);
        }

        let mut result = date;
        let mut remaining = business_days.abs();
        let direction: i64 = if business_days > 0 { 1 } else { -1 };

        while remaining > 0 {
            result = result.add_days(direction);
            if self.is_business_day(result) {
                remaining -= 1;
            }
        }

        result
    }

    /// Adds a tenor and adjusts the result.
    fn advance_by_tenor(
        &self,
        date: Date,
        tenor: Tenor,
        convention: BusinessDayConvention,
    ) -> CoreResult<Date> {
        Ok(self.adjust(date.add_tenor(tenor)?, convention))
    }

    /// Returns the next business day on or after the given date.
    fn next_business_day(&self, date: Date) -> Date {
        self.adjust(date, BusinessDayConvention::Following)
    }

    /// Counts business days between two dates (exclusive of start, inclusive of end).
    fn business_days_between(&self, start: Date, end: Date) -> i32 {
        let mut count = 0;
        let mut current = start.add_days(1);

        while current <= end {
            if self.is_business_day(current) {
                count += 1;
            }
            current = current.add_days(1);
        }

        count
    }
}

/// A simple weekend-only calendar (no holidays).
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendCalendar;

impl Calendar for WeekendCalendar {
    fn name(&self) -> &'static str {
        "Weekend Only"
    }

    fn is_business_day(&self, date: Date) -> bool {
        !date.is_weekend()
    }
}

/// Identifies one of the built-in market calendars.
///
/// Conventions store the identifier rather than the calendar so they stay
/// `Copy` and serializable; [`CalendarId::calendar`] resolves the shared
/// instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CalendarId {
    /// Eurozone TARGET2 settlement calendar
    Target2,
    /// England and Wales bank holidays
    UnitedKingdom,
    /// US federal holidays
    UnitedStates,
    /// Japanese national holidays
    Japan,
    /// Australian settlement holidays
    Australia,
    /// Canadian settlement holidays
    Canada,
}

impl CalendarId {
    /// Returns the shared calendar instance.
    #[must_use]
    pub fn calendar(&self) -> &'static dyn Calendar {
        match self {
            CalendarId::Target2 => Target2Calendar::global(),
            CalendarId::UnitedKingdom => UKCalendar::global(),
            CalendarId::UnitedStates => &USCalendar,
            CalendarId::Japan => JapanCalendar::global(),
            CalendarId::Australia => AustraliaCalendar::global(),
            CalendarId::Canada => CanadaCalendar::global(),
        }
    }
}

impl fmt::Display for CalendarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.calendar().name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekend_calendar() {
        let cal = WeekendCalendar;

        let monday = Date::from_ymd(2025, 1, 6).unwrap();
        assert!(cal.is_business_day(monday));

        let saturday = Date::from_ymd(2025, 1, 4).unwrap();
        assert!(!cal.is_business_day(saturday));

        let sunday = Date::from_ymd(2025, 1, 5).unwrap();
        assert!(!cal.is_business_day(sunday));
    }

    #[test]
    fn test_advance() {
        let cal = WeekendCalendar;

        // Friday + 1 business day = Monday
        let friday = Date::from_ymd(2025, 1, 3).unwrap();
        assert_eq!(cal.advance(friday, 1), Date::from_ymd(2025, 1, 6).unwrap());

        // Wednesday + 2 = Friday, Friday - 1 = Thursday
        let wednesday = Date::from_ymd(2025, 1, 8).unwrap();
        assert_eq!(cal.advance(wednesday, 2), Date::from_ymd(2025, 1, 10).unwrap());
        assert_eq!(cal.advance(friday, -1), Date::from_ymd(2025, 1, 2).unwrap());
    }

    #[test]
    fn test_advance_from_weekend() {
        let cal = WeekendCalendar;
        let saturday = Date::from_ymd(2025, 1, 4).unwrap();
        let monday = Date::from_ymd(2025, 1, 6).unwrap();

        assert_eq!(cal.advance(saturday, 0), monday);
        assert_eq!(cal.advance(saturday, 1), monday);
        assert_eq!(cal.advance(saturday, 2), monday.add_days(1));
    }

    #[test]
    fn test_advance_by_tenor() {
        let cal = WeekendCalendar;
        let start = Date::from_ymd(2025, 1, 31).unwrap();

        // 31 Jan + 1M = 28 Feb 2025 (Friday)
        let end = cal
            .advance_by_tenor(start, Tenor::months(1), BusinessDayConvention::ModifiedFollowing)
            .unwrap();
        assert_eq!(end, Date::from_ymd(2025, 2, 28).unwrap());

        // 1 Feb 2025 + 1W = Saturday 8 Feb, rolls to Monday
        let start = Date::from_ymd(2025, 2, 1).unwrap();
        let end = cal
            .advance_by_tenor(start, Tenor::weeks(1), BusinessDayConvention::Following)
            .unwrap();
        assert_eq!(end, Date::from_ymd(2025, 2, 10).unwrap());
    }

    #[test]
    fn test_business_days_between() {
        let cal = WeekendCalendar;

        let monday = Date::from_ymd(2025, 1, 6).unwrap();
        let friday = Date::from_ymd(2025, 1, 10).unwrap();

        assert_eq!(cal.business_days_between(monday, friday), 4);
    }

    #[test]
    fn test_calendar_ids_resolve() {
        let ids = [
            CalendarId::Target2,
            CalendarId::UnitedKingdom,
            CalendarId::UnitedStates,
            CalendarId::Japan,
            CalendarId::Australia,
            CalendarId::Canada,
        ];
        let christmas = Date::from_ymd(2025, 12, 25).unwrap();
        for id in ids {
            assert!(id.calendar().is_holiday(christmas) || id == CalendarId::Japan);
            assert!(!id.to_string().is_empty());
        }
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        const IDS: [CalendarId; 6] = [
            CalendarId::Target2,
            CalendarId::UnitedKingdom,
            CalendarId::UnitedStates,
            CalendarId::Japan,
            CalendarId::Australia,
            CalendarId::Canada,
        ];

        proptest! {
            #[test]
            fn prop_advance_lands_on_later_business_day(
                offset in 0i64..4000,
                id in 0usize..6,
                days in 1i32..5,
            ) {
                let cal = IDS[id].calendar();
                let date = Date::from_ymd(2020, 1, 1).unwrap().add_days(offset);
                let next = cal.advance(date, days);

                prop_assert!(next > date);
                prop_assert!(cal.is_business_day(next));
                prop_assert_eq!(cal.business_days_between(date, next), days);
            }

            #[test]
            fn prop_modified_following_stays_in_month(offset in 0i64..4000, id in 0usize..6) {
                let cal = IDS[id].calendar();
                let date = Date::from_ymd(2020, 1, 1).unwrap().add_days(offset);
                let adjusted = cal.adjust(date, BusinessDayConvention::ModifiedFollowing);

                prop_assert!(cal.is_business_day(adjusted));
                prop_assert_eq!(adjusted.month(), date.month());
            }
        }
    }
}

