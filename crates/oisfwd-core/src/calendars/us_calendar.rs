//! US settlement calendar used for SOFR.

use chrono::Weekday;

use super::Calendar;
use crate::types::Date;

/// US federal holiday calendar.
///
/// Rule based rather than bitmap backed: every holiday is either a fixed
/// date with weekend observance or an nth/last weekday of a month.
#[derive(Debug, Clone, Copy, Default)]
pub struct USCalendar;

impl USCalendar {
    fn is_federal_holiday(&self, date: Date) -> bool {
        let year = date.year();
        let month = date.month();

        let fixed = observed_fixed(date, 1, 1)
            || (year >= 2021 && observed_fixed(date, 6, 19))
            || observed_fixed(date, 7, 4)
            || observed_fixed(date, 11, 11)
            || observed_fixed(date, 12, 25)
            // New Year's Day on a Saturday is observed on Friday 31 December
            || (month == 12 && date.day() == 31 && date.weekday() == Weekday::Fri);
        if fixed {
            return true;
        }

        match month {
            // MLK Day and Presidents Day
            1 | 2 => is_nth_weekday(date, Weekday::Mon, 3),
            // Memorial Day
            5 => is_last_weekday(date, Weekday::Mon),
            // Labor Day
            9 => is_nth_weekday(date, Weekday::Mon, 1),
            // Columbus Day
            10 => is_nth_weekday(date, Weekday::Mon, 2),
            // Thanksgiving
            11 => is_nth_weekday(date, Weekday::Thu, 4),
            _ => false,
        }
    }
}

impl Calendar for USCalendar {
    fn name(&self) -> &'static str {
        "US Settlement"
    }

    fn is_business_day(&self, date: Date) -> bool {
        !date.is_weekend() && !self.is_federal_holiday(date)
    }
}

/// True if `date` is the observed date of a fixed `month`/`day` holiday in
/// the same year: Saturday moves to Friday, Sunday to Monday.
fn observed_fixed(date: Date, month: u32, day: u32) -> bool {
    if date.month() != month {
        return false;
    }
    match date.weekday() {
        Weekday::Fri => date.day() == day || date.day() + 1 == day,
        Weekday::Mon => date.day() == day || date.day() == day + 1,
        _ => date.day() == day,
    }
}

fn is_nth_weekday(date: Date, weekday: Weekday, n: u32) -> bool {
    date.weekday() == weekday && (date.day() - 1) / 7 + 1 == n
}

fn is_last_weekday(date: Date, weekday: Weekday) -> bool {
    date.weekday() == weekday && date.add_days(7).month() != date.month()
}
