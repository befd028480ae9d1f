//! Bitmap-based holiday calendar for O(1) lookups.
//!
//! Holiday rules are expanded once per calendar into a bitmap covering
//! 1970-2100; lookups outside that range see weekends only.

use crate::types::Date;
use chrono::{Datelike, NaiveDate, Weekday};
use std::collections::HashSet;

/// Minimum year supported by the calendar.
pub const MIN_YEAR: i32 = 1970;
/// Maximum year supported by the calendar.
pub const MAX_YEAR: i32 = 2100;

const YEAR_COUNT: usize = (MAX_YEAR - MIN_YEAR + 1) as usize;
const MAX_DAYS_PER_YEAR: usize = 366;
const TOTAL_BITS: usize = YEAR_COUNT * MAX_DAYS_PER_YEAR;
const WORD_COUNT: usize = (TOTAL_BITS + 63) / 64;

/// Weekend definition for a calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeekendType {
    /// Saturday and Sunday
    #[default]
    SaturdaySunday,
    /// No weekends; only listed holidays are closed
    None,
}

impl WeekendType {
    /// Check if a weekday is a weekend day for this type.
    #[inline]
    pub fn is_weekend(&self, weekday: Weekday) -> bool {
        match self {
            WeekendType::SaturdaySunday => matches!(weekday, Weekday::Sat | Weekday::Sun),
            WeekendType::None => false,
        }
    }
}

/// How a fixed-date holiday that lands on a weekend is observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Observance {
    /// Only the date itself; a weekend occurrence is lost.
    Actual,
    /// A Saturday or Sunday occurrence moves to the following Monday.
    NextMonday,
}

/// Bitmap of holidays, one bit per day.
#[derive(Clone)]
pub struct HolidayBitmap {
    name: &'static str,
    bits: Box<[u64; WORD_COUNT]>,
    weekend: WeekendType,
}

impl std::fmt::Debug for HolidayBitmap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HolidayBitmap")
            .field("name", &self.name)
            .field("weekend", &self.weekend)
            .field("holiday_count", &self.count_holidays())
            .finish()
    }
}

impl HolidayBitmap {
    /// Create a new empty holiday bitmap.
    pub fn new(name: &'static str, weekend: WeekendType) -> Self {
        Self {
            name,
            bits: Box::new([0u64; WORD_COUNT]),
            weekend,
        }
    }

    /// Create a holiday bitmap from a set of holiday dates.
    pub fn from_holidays(
        name: &'static str,
        weekend: WeekendType,
        holidays: &HashSet<NaiveDate>,
    ) -> Self {
        let mut bitmap = Self::new(name, weekend);
        for &date in holidays {
            bitmap.add_holiday(date);
        }
        bitmap
    }

    /// Get the name of this calendar.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Add a holiday to the bitmap. Dates outside the range are ignored.
    pub fn add_holiday(&mut self, date: NaiveDate) {
        if let Some((word_idx, bit_idx)) = Self::date_to_indices(date) {
            self.bits[word_idx] |= 1u64 << bit_idx;
        }
    }

    /// Check if a date is a listed holiday (weekends excluded).
    #[inline]
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        Self::date_to_indices(date)
            .is_some_and(|(word_idx, bit_idx)| self.bits[word_idx] & (1u64 << bit_idx) != 0)
    }

    /// A business day is neither a weekend nor a holiday.
    #[inline]
    pub fn is_business_day(&self, date: NaiveDate) -> bool {
        !self.weekend.is_weekend(date.weekday()) && !self.is_holiday(date)
    }

    /// Same as [`is_business_day`](Self::is_business_day) for a [`Date`].
    #[inline]
    pub fn is_business_day_date(&self, date: Date) -> bool {
        self.is_business_day(date.as_naive_date())
    }

    /// Count total holidays in the bitmap.
    pub fn count_holidays(&self) -> usize {
        self.bits.iter().map(|w| w.count_ones() as usize).sum()
    }

    #[inline]
    fn date_to_indices(date: NaiveDate) -> Option<(usize, usize)> {
        let year = date.year();
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return None;
        }

        let bit_position =
            (year - MIN_YEAR) as usize * MAX_DAYS_PER_YEAR + date.ordinal0() as usize;
        Some((bit_position / 64, bit_position % 64))
    }
}

/// Builder for creating holiday bitmaps from holiday rules.
pub struct HolidayCalendarBuilder {
    name: &'static str,
    weekend: WeekendType,
    holidays: HashSet<NaiveDate>,
    start_year: i32,
    end_year: i32,
}

impl HolidayCalendarBuilder {
    /// Create a new builder covering the full supported range.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            weekend: WeekendType::SaturdaySunday,
            holidays: HashSet::new(),
            start_year: MIN_YEAR,
            end_year: MAX_YEAR,
        }
    }

    /// Set the weekend type.
    pub fn weekend(mut self, weekend: WeekendType) -> Self {
        self.weekend = weekend;
        self
    }

    /// Set the year range for generating holidays.
    pub fn year_range(mut self, start: i32, end: i32) -> Self {
        self.start_year = start.max(MIN_YEAR);
        self.end_year = end.min(MAX_YEAR);
        self
    }

    /// Add a fixed holiday (same date every year).
    pub fn add_fixed_holiday(self, month: u32, day: u32, observance: Observance) -> Self {
        let from = self.start_year;
        self.add_fixed_holiday_from(month, day, from, observance)
    }

    /// Add a fixed holiday starting from a specific year.
    pub fn add_fixed_holiday_from(
        mut self,
        month: u32,
        day: u32,
        from_year: i32,
        observance: Observance,
    ) -> Self {
        for year in from_year.max(self.start_year)..=self.end_year {
            if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
                let observed = match observance {
                    Observance::Actual => date,
                    Observance::NextMonday => monday_substitute(date),
                };
                self.holidays.insert(observed);
            }
        }
        self
    }

    /// Add a floating holiday (nth weekday of month).
    pub fn add_nth_weekday_holiday(mut self, month: u32, weekday: Weekday, occurrence: u32) -> Self {
        for year in self.start_year..=self.end_year {
            if let Some(date) = nth_weekday_of_month(year, month, weekday, occurrence) {
                self.holidays.insert(date);
            }
        }
        self
    }

    /// Add last weekday of month holiday.
    pub fn add_last_weekday_holiday(mut self, month: u32, weekday: Weekday) -> Self {
        for year in self.start_year..=self.end_year {
            if let Some(date) = last_weekday_of_month(year, month, weekday) {
                self.holidays.insert(date);
            }
        }
        self
    }

    /// Add Easter-based holiday (offset from Easter Sunday).
    pub fn add_easter_holiday(mut self, offset_days: i64) -> Self {
        for year in self.start_year..=self.end_year {
            if let Some(date) = easter_sunday(year)
                .and_then(|e| e.checked_add_signed(chrono::Duration::days(offset_days)))
            {
                self.holidays.insert(date);
            }
        }
        self
    }

    /// Add a custom holiday generator function.
    pub fn add_custom_holidays<F>(mut self, generator: F) -> Self
    where
        F: Fn(i32) -> Vec<NaiveDate>,
    {
        for year in self.start_year..=self.end_year {
            self.holidays.extend(generator(year));
        }
        self
    }

    /// Build the holiday bitmap.
    pub fn build(self) -> HolidayBitmap {
        log::debug!(
            "built {} calendar with {} holidays for {}-{}",
            self.name,
            self.holidays.len(),
            self.start_year,
            self.end_year
        );
        HolidayBitmap::from_holidays(self.name, self.weekend, &self.holidays)
    }
}

/// Moves a Saturday or Sunday to the following Monday.
pub fn monday_substitute(date: NaiveDate) -> NaiveDate {
    let shift = match date.weekday() {
        Weekday::Sat => 2,
        Weekday::Sun => 1,
        _ => 0,
    };
    date + chrono::Duration::days(shift)
}

/// Christmas and Boxing Day with Commonwealth-style substitutes.
///
/// A weekend Christmas moves to the 27th. A weekend Boxing Day moves to the
/// 28th when Christmas was a Friday or Saturday, otherwise to the 27th.
pub fn christmas_and_boxing_day(year: i32) -> Vec<NaiveDate> {
    let Some(christmas) = NaiveDate::from_ymd_opt(year, 12, 25) else {
        return Vec::new();
    };
    let day = |d: u32| NaiveDate::from_ymd_opt(year, 12, d);

    let pair = match christmas.weekday() {
        Weekday::Fri => [day(25), day(28)],
        Weekday::Sat => [day(27), day(28)],
        Weekday::Sun => [day(26), day(27)],
        _ => [day(25), day(26)],
    };
    pair.into_iter().flatten().collect()
}

/// Calculate the nth occurrence of a weekday in a month.
pub fn nth_weekday_of_month(year: i32, month: u32, weekday: Weekday, n: u32) -> Option<NaiveDate> {
    NaiveDate::from_weekday_of_month_opt(year, month, weekday, u8::try_from(n).ok()?)
}

/// Calculate the last occurrence of a weekday in a month.
pub fn last_weekday_of_month(year: i32, month: u32, weekday: Weekday) -> Option<NaiveDate> {
    let last_day = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?.pred_opt()?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?.pred_opt()?
    };

    let days_back = (last_day.weekday().num_days_from_monday() as i64
        - weekday.num_days_from_monday() as i64)
        .rem_euclid(7);

    last_day.checked_sub_signed(chrono::Duration::days(days_back))
}

/// Calculate Easter Sunday using the Anonymous Gregorian algorithm.
#[allow(clippy::many_single_char_names)]
pub fn easter_sunday(year: i32) -> Option<NaiveDate> {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = ((h + l - 7 * m + 114) % 31) + 1;

    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_bitmap_basic() {
        let mut bitmap = HolidayBitmap::new("Test", WeekendType::SaturdaySunday);

        let date = ymd(2025, 1, 1);
        assert!(!bitmap.is_holiday(date));

        bitmap.add_holiday(date);
        assert!(bitmap.is_holiday(date));
        assert_eq!(bitmap.count_holidays(), 1);
    }

    #[test]
    fn test_out_of_range_is_weekend_only() {
        let mut bitmap = HolidayBitmap::new("Test", WeekendType::None);
        bitmap.add_holiday(ymd(2150, 1, 1));
        assert!(!bitmap.is_holiday(ymd(2150, 1, 1)));
        assert!(bitmap.is_business_day(ymd(2150, 1, 1)));
    }

    #[test]
    fn test_nth_weekday() {
        // 3rd Monday of January 2025
        assert_eq!(nth_weekday_of_month(2025, 1, Weekday::Mon, 3), Some(ymd(2025, 1, 20)));
        // There is no 5th Monday in February 2025
        assert_eq!(nth_weekday_of_month(2025, 2, Weekday::Mon, 5), None);
    }

    #[test]
    fn test_last_weekday() {
        assert_eq!(last_weekday_of_month(2025, 5, Weekday::Mon), Some(ymd(2025, 5, 26)));
        assert_eq!(last_weekday_of_month(2025, 12, Weekday::Wed), Some(ymd(2025, 12, 31)));
    }

    #[test]
    fn test_easter() {
        assert_eq!(easter_sunday(2025), Some(ymd(2025, 4, 20)));
        assert_eq!(easter_sunday(2024), Some(ymd(2024, 3, 31)));
    }

    #[test]
    fn test_monday_substitute() {
        // 1 Jan 2028 is a Saturday, 1 Jan 2023 a Sunday
        assert_eq!(monday_substitute(ymd(2028, 1, 1)), ymd(2028, 1, 3));
        assert_eq!(monday_substitute(ymd(2023, 1, 1)), ymd(2023, 1, 2));
        assert_eq!(monday_substitute(ymd(2025, 1, 1)), ymd(2025, 1, 1));
    }

    #[test]
    fn test_christmas_substitutes() {
        // 2027: Saturday and Sunday
        assert_eq!(christmas_and_boxing_day(2027), vec![ymd(2027, 12, 27), ymd(2027, 12, 28)]);
        // 2026: Friday and Saturday
        assert_eq!(christmas_and_boxing_day(2026), vec![ymd(2026, 12, 25), ymd(2026, 12, 28)]);
        // 2022: Sunday and Monday
        assert_eq!(christmas_and_boxing_day(2022), vec![ymd(2022, 12, 26), ymd(2022, 12, 27)]);
        // 2025: Thursday and Friday
        assert_eq!(christmas_and_boxing_day(2025), vec![ymd(2025, 12, 25), ymd(2025, 12, 26)]);
    }

    #[test]
    fn test_builder() {
        let calendar = HolidayCalendarBuilder::new("Test")
            .year_range(2025, 2028)
            .add_fixed_holiday(1, 1, Observance::NextMonday)
            .build();

        assert!(calendar.is_holiday(ymd(2025, 1, 1)));
        assert!(calendar.is_holiday(ymd(2028, 1, 3)));
        assert!(!calendar.is_holiday(ymd(2029, 1, 1)));
    }
}
