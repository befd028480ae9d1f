//! Canadian settlement calendar, used for CORRA.

use super::bitmap::{
    christmas_and_boxing_day, nth_weekday_of_month, HolidayBitmap, HolidayCalendarBuilder,
    Observance,
};
use super::Calendar;
use crate::types::Date;
use chrono::{Datelike, NaiveDate, Weekday};
use std::sync::OnceLock;

static CANADA_CALENDAR: OnceLock<CanadaCalendar> = OnceLock::new();

/// Canadian settlement holidays.
///
/// ## Holidays
///
/// - New Year's Day, Canada Day, Remembrance Day (Monday if on a weekend)
/// - Family Day (3rd Monday in February, since 2008)
/// - Good Friday
/// - Victoria Day (Monday on or before 24 May)
/// - Civic Holiday (1st Monday in August)
/// - Labour Day (1st Monday in September)
/// - National Day for Truth and Reconciliation (30 September, since 2021)
/// - Thanksgiving (2nd Monday in October)
/// - Christmas Day and Boxing Day (with substitutes)
#[derive(Debug, Clone)]
pub struct CanadaCalendar {
    bitmap: HolidayBitmap,
}

impl CanadaCalendar {
    /// Create a new Canada calendar.
    pub fn new() -> Self {
        Self {
            bitmap: HolidayCalendarBuilder::new("Canada")
                .add_fixed_holiday(1, 1, Observance::NextMonday)
                .add_custom_holidays(family_day)
                .add_easter_holiday(-2)
                .add_custom_holidays(victoria_day)
                .add_fixed_holiday(7, 1, Observance::NextMonday)
                .add_nth_weekday_holiday(8, Weekday::Mon, 1)
                .add_nth_weekday_holiday(9, Weekday::Mon, 1)
                .add_fixed_holiday_from(9, 30, 2021, Observance::NextMonday)
                .add_nth_weekday_holiday(10, Weekday::Mon, 2)
                .add_fixed_holiday(11, 11, Observance::NextMonday)
                .add_custom_holidays(christmas_and_boxing_day)
                .build(),
        }
    }

    /// Get the global Canada calendar instance.
    pub fn global() -> &'static CanadaCalendar {
        CANADA_CALENDAR.get_or_init(CanadaCalendar::new)
    }
}

impl Default for CanadaCalendar {
    fn default() -> Self {
        Self::new()
    }
}

impl Calendar for CanadaCalendar {
    fn name(&self) -> &'static str {
        "Canada"
    }

    fn is_business_day(&self, date: Date) -> bool {
        self.bitmap.is_business_day_date(date)
    }
}

fn family_day(year: i32) -> Vec<NaiveDate> {
    if year < 2008 {
        return Vec::new();
    }
    nth_weekday_of_month(year, 2, Weekday::Mon, 3).into_iter().collect()
}

fn victoria_day(year: i32) -> Vec<NaiveDate> {
    NaiveDate::from_ymd_opt(year, 5, 24)
        .map(|d| d - chrono::Duration::days(i64::from(d.weekday().num_days_from_monday())))
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn closed(y: i32, m: u32, d: u32) -> bool {
        !CanadaCalendar::global().is_business_day(Date::from_ymd(y, m, d).unwrap())
    }

    #[test]
    fn test_canada_family_day() {
        assert!(closed(2025, 2, 17));
        assert!(!closed(2007, 2, 19));
    }

    #[test]
    fn test_canada_victoria_day() {
        assert!(closed(2025, 5, 19));
        // 24 May 2027 is itself a Monday
        assert!(closed(2027, 5, 24));
    }

    #[test]
    fn test_canada_summer_and_autumn() {
        assert!(closed(2025, 7, 1));
        assert!(closed(2025, 8, 4));
        assert!(closed(2025, 9, 1));
        assert!(closed(2025, 9, 30));
        assert!(closed(2025, 10, 13));
        assert!(closed(2025, 11, 11));
        assert!(!closed(2020, 9, 30));
    }

    #[test]
    fn test_canada_weekend_substitutes() {
        // Canada Day 2028 is a Saturday
        assert!(closed(2028, 7, 3));
        // Remembrance Day 2029 is a Sunday
        assert!(closed(2029, 11, 12));
    }
}
