//! UK bank holidays (England and Wales), the SONIA calendar.

use super::bitmap::{
    christmas_and_boxing_day, last_weekday_of_month, nth_weekday_of_month, HolidayBitmap,
    HolidayCalendarBuilder, Observance,
};
use super::Calendar;
use crate::types::Date;
use chrono::{NaiveDate, Weekday};
use std::sync::OnceLock;

static UK_CALENDAR: OnceLock<UKCalendar> = OnceLock::new();

/// UK bank holiday calendar.
///
/// ## Holidays
///
/// - New Year's Day (substitute Monday if weekend)
/// - Good Friday, Easter Monday
/// - Early May Bank Holiday (1st Monday in May)
/// - Spring Bank Holiday (last Monday in May)
/// - Summer Bank Holiday (last Monday in August)
/// - Christmas Day and Boxing Day (with substitutes)
///
/// One-off royal and commemorative holidays are included for the years
/// they occurred.
#[derive(Debug, Clone)]
pub struct UKCalendar {
    bitmap: HolidayBitmap,
}

impl UKCalendar {
    /// Create a new UK calendar.
    pub fn new() -> Self {
        Self {
            bitmap: build_uk_holidays(),
        }
    }

    /// Get the global UK calendar instance.
    pub fn global() -> &'static UKCalendar {
        UK_CALENDAR.get_or_init(UKCalendar::new)
    }
}

impl Default for UKCalendar {
    fn default() -> Self {
        Self::new()
    }
}

impl Calendar for UKCalendar {
    fn name(&self) -> &'static str {
        "UK Bank Holidays"
    }

    fn is_business_day(&self, date: Date) -> bool {
        self.bitmap.is_business_day_date(date)
    }
}

fn build_uk_holidays() -> HolidayBitmap {
    HolidayCalendarBuilder::new("UK Bank Holidays")
        .add_fixed_holiday(1, 1, Observance::NextMonday)
        .add_easter_holiday(-2)
        .add_easter_holiday(1)
        .add_custom_holidays(early_may_bank_holiday)
        .add_custom_holidays(spring_bank_holiday)
        .add_last_weekday_holiday(8, Weekday::Mon)
        .add_custom_holidays(christmas_and_boxing_day)
        .add_custom_holidays(special_uk_holidays)
        .build()
}

/// 1st Monday in May, moved to 8 May in 2020 for VE Day.
fn early_may_bank_holiday(year: i32) -> Vec<NaiveDate> {
    let date = if year == 2020 {
        NaiveDate::from_ymd_opt(2020, 5, 8)
    } else {
        nth_weekday_of_month(year, 5, Weekday::Mon, 1)
    };
    date.into_iter().collect()
}

/// Last Monday in May, moved to 2 June in 2022 for the Platinum Jubilee.
fn spring_bank_holiday(year: i32) -> Vec<NaiveDate> {
    let date = if year == 2022 {
        NaiveDate::from_ymd_opt(2022, 6, 2)
    } else {
        last_weekday_of_month(year, 5, Weekday::Mon)
    };
    date.into_iter().collect()
}

fn special_uk_holidays(year: i32) -> Vec<NaiveDate> {
    let dates: &[(u32, u32)] = match year {
        1999 => &[(12, 31)],
        2002 => &[(6, 3), (6, 4)],
        2011 => &[(4, 29)],
        2012 => &[(6, 5)],
        2022 => &[(6, 3), (9, 19)],
        2023 => &[(5, 8)],
        _ => &[],
    };
    dates
        .iter()
        .filter_map(|&(m, d)| NaiveDate::from_ymd_opt(year, m, d))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn closed(y: i32, m: u32, d: u32) -> bool {
        !UKCalendar::global().is_business_day(Date::from_ymd(y, m, d).unwrap())
    }

    #[test]
    fn test_uk_new_years_substitute() {
        assert!(closed(2025, 1, 1));
        // 2028: Jan 1 is Saturday, substitute is Monday Jan 3
        assert!(closed(2028, 1, 3));
        assert!(!closed(2027, 12, 31));
    }

    #[test]
    fn test_uk_easter() {
        assert!(closed(2025, 4, 18));
        assert!(closed(2025, 4, 21));
    }

    #[test]
    fn test_uk_may_bank_holidays() {
        assert!(closed(2025, 5, 5));
        assert!(closed(2025, 5, 26));
        // 2020: moved to May 8 for VE Day; the 1st Monday was a working day
        assert!(closed(2020, 5, 8));
        assert!(!closed(2020, 5, 4));
        // 2022: moved to June 2 for the Platinum Jubilee
        assert!(closed(2022, 6, 2));
        assert!(!closed(2022, 5, 30));
    }

    #[test]
    fn test_uk_summer_bank_holiday() {
        assert!(closed(2025, 8, 25));
    }

    #[test]
    fn test_uk_christmas_substitute() {
        // 2027: Christmas on Saturday, Boxing Day on Sunday
        assert!(closed(2027, 12, 27));
        assert!(closed(2027, 12, 28));
        assert!(!closed(2027, 12, 29));
    }

    #[test]
    fn test_uk_special_holidays() {
        assert!(closed(2022, 9, 19));
        assert!(closed(2023, 5, 8));
    }
}
