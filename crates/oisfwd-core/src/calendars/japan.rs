//! Japan calendar, used for TONA.

use super::bitmap::{nth_weekday_of_month, HolidayBitmap, HolidayCalendarBuilder};
use super::Calendar;
use crate::types::Date;
use chrono::{Datelike, NaiveDate, Weekday};
use std::sync::OnceLock;

static JAPAN_CALENDAR: OnceLock<JapanCalendar> = OnceLock::new();

/// Japanese national holidays plus the bank closures on 31 December and
/// 2-3 January.
///
/// ## Special Rules
///
/// - A holiday on a Sunday moves to the next non-holiday (furikae kyujitsu)
/// - A weekday between two holidays is itself a holiday (kokumin no kyujitsu)
#[derive(Debug, Clone)]
pub struct JapanCalendar {
    bitmap: HolidayBitmap,
}

impl JapanCalendar {
    /// Create a new Japan calendar.
    pub fn new() -> Self {
        Self {
            bitmap: HolidayCalendarBuilder::new("Japan")
                .add_custom_holidays(japan_holidays_for_year)
                .build(),
        }
    }

    /// Get the global Japan calendar instance.
    pub fn global() -> &'static JapanCalendar {
        JAPAN_CALENDAR.get_or_init(JapanCalendar::new)
    }
}

impl Default for JapanCalendar {
    fn default() -> Self {
        Self::new()
    }
}

impl Calendar for JapanCalendar {
    fn name(&self) -> &'static str {
        "Japan"
    }

    fn is_business_day(&self, date: Date) -> bool {
        self.bitmap.is_business_day_date(date)
    }
}

fn japan_holidays_for_year(year: i32) -> Vec<NaiveDate> {
    let mut holidays: Vec<NaiveDate> = Vec::new();
    let mut fixed = |m: u32, d: u32| {
        if let Some(date) = NaiveDate::from_ymd_opt(year, m, d) {
            holidays.push(date);
        }
    };

    // Bank holidays around the new year
    fixed(1, 1);
    fixed(1, 2);
    fixed(1, 3);
    fixed(12, 31);

    fixed(2, 11);
    if year >= 2020 {
        fixed(2, 23);
    } else if (1989..=2018).contains(&year) {
        fixed(12, 23);
    }
    fixed(3, vernal_equinox_day(year));
    fixed(4, 29);
    fixed(5, 3);
    fixed(5, 4);
    fixed(5, 5);
    fixed(9, autumnal_equinox_day(year));
    fixed(11, 3);
    fixed(11, 23);

    // Olympic years moved Marine, Mountain and Sports days
    match year {
        2020 => {
            fixed(7, 23);
            fixed(7, 24);
            fixed(8, 10);
        }
        2021 => {
            fixed(7, 22);
            fixed(7, 23);
            fixed(8, 8);
        }
        _ => {
            if year >= 2016 {
                fixed(8, 11);
            }
        }
    }

    // Enthronement of Emperor Naruhito
    if year == 2019 {
        fixed(4, 30);
        fixed(5, 1);
        fixed(5, 2);
        fixed(10, 22);
    }

    let mondays = [
        (1, 2),  // Coming of Age Day
        (9, 3),  // Respect for the Aged Day
    ];
    let mut floating: Vec<NaiveDate> = mondays
        .iter()
        .filter_map(|&(m, n)| nth_weekday_of_month(year, m, Weekday::Mon, n))
        .collect();
    if year != 2020 && year != 2021 {
        floating.extend(nth_weekday_of_month(year, 7, Weekday::Mon, 3)); // Marine Day
        floating.extend(nth_weekday_of_month(year, 10, Weekday::Mon, 2)); // Sports Day
    }
    holidays.extend(floating);

    add_citizens_holidays(&mut holidays);
    add_substitute_holidays(&mut holidays);
    holidays
}

/// Approximation valid for 1980-2099.
fn vernal_equinox_day(year: i32) -> u32 {
    let y = f64::from(year - 1980);
    (20.8431 + 0.242194 * y - (y / 4.0).floor()) as u32
}

/// Approximation valid for 1980-2099.
fn autumnal_equinox_day(year: i32) -> u32 {
    let y = f64::from(year - 1980);
    (23.2488 + 0.242194 * y - (y / 4.0).floor()) as u32
}

fn add_citizens_holidays(holidays: &mut Vec<NaiveDate>) {
    let sandwiched: Vec<NaiveDate> = holidays
        .iter()
        .filter_map(|h| h.succ_opt())
        .filter(|d| {
            d.weekday() != Weekday::Sun
                && !holidays.contains(d)
                && d.succ_opt().is_some_and(|next| holidays.contains(&next))
        })
        .collect();
    holidays.extend(sandwiched);
}

fn add_substitute_holidays(holidays: &mut Vec<NaiveDate>) {
    let mut substitutes = Vec::new();
    for holiday in holidays.iter().filter(|h| h.weekday() == Weekday::Sun) {
        let mut candidate = *holiday;
        while let Some(next) = candidate.succ_opt() {
            candidate = next;
            if !holidays.contains(&candidate) && !substitutes.contains(&candidate) {
                substitutes.push(candidate);
                break;
            }
        }
    }
    holidays.extend(substitutes);
}
