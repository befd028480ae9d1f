//! Date type for curve calculations.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

use crate::error::{CoreError, CoreResult};
use crate::types::{Tenor, TimeUnit};

/// A calendar date.
///
/// Newtype over `chrono::NaiveDate` with the month and year arithmetic used
/// when rolling swap schedules.
///
/// # Example
///
/// ```rust
/// use oisfwd_core::types::Date;
///
/// let date = Date::from_ymd(2025, 1, 31).unwrap();
/// let next = date.add_months(1).unwrap();
/// assert_eq!(next, Date::from_ymd(2025, 2, 28).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a new date from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the date is invalid.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> CoreResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| CoreError::invalid_date(format!("{year}-{month:02}-{day:02}")))
    }

    /// Creates a date from an ISO 8601 string (YYYY-MM-DD).
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the string is not a valid date.
    pub fn parse(s: &str) -> CoreResult<Self> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Date)
            .map_err(|_| CoreError::invalid_date(format!("Cannot parse: {s}")))
    }

    /// Returns today's date in local time.
    #[must_use]
    pub fn today() -> Self {
        Date(chrono::Local::now().date_naive())
    }

    /// Returns the year component.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Checks if the year is a leap year.
    #[must_use]
    pub fn is_leap_year(&self) -> bool {
        self.0.leap_year()
    }

    /// Returns the number of days in the date's month.
    #[must_use]
    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.year(), self.month())
    }

    /// Adds a number of days to the date.
    ///
    /// Panics if the result leaves chrono's date range; use
    /// [`checked_add_days`](Self::checked_add_days) for untrusted offsets.
    #[must_use]
    pub fn add_days(&self, days: i64) -> Self {
        Date(self.0 + chrono::Duration::days(days))
    }

    /// Adds a number of days to the date.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the result is outside years
    /// 1 to 9999.
    pub fn checked_add_days(&self, days: i64) -> CoreResult<Self> {
        chrono::Duration::try_days(days)
            .and_then(|delta| self.0.checked_add_signed(delta))
            .map(Date)
            .filter(Date::in_supported_range)
            .ok_or_else(|| CoreError::invalid_date(format!("{self} + {days} days out of range")))
    }

    /// Years 1 to 9999, the range a `%Y-%m-%d` date round-trips in and
    /// that leaves room for business day rolls.
    fn in_supported_range(&self) -> bool {
        (1..=9999).contains(&self.year())
    }

    /// Adds a number of months to the date.
    ///
    /// If the resulting day would be invalid (e.g., Jan 31 + 1 month),
    /// it rolls back to the last valid day of the month.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the result is out of range.
    pub fn add_months(&self, months: i32) -> CoreResult<Self> {
        let total_months = (self.year() * 12 + self.month() as i32 - 1)
            .checked_add(months)
            .ok_or_else(|| CoreError::invalid_date(format!("{self} + {months} months out of range")))?;
        let new_year = total_months.div_euclid(12);
        let new_month = (total_months.rem_euclid(12) + 1) as u32;

        let new_day = self.day().min(days_in_month(new_year, new_month));

        Self::from_ymd(new_year, new_month, new_day)
            .ok()
            .filter(Date::in_supported_range)
            .ok_or_else(|| CoreError::invalid_date(format!("{self} + {months} months out of range")))
    }

    /// Adds a number of years to the date, clamping 29 February.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the result is invalid.
    pub fn add_years(&self, years: i32) -> CoreResult<Self> {
        let months = years
            .checked_mul(12)
            .ok_or_else(|| CoreError::invalid_date(format!("{self} + {years} years out of range")))?;
        self.add_months(months)
    }

    /// Adds a tenor without any business day adjustment.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the result is out of range.
    pub fn add_tenor(&self, tenor: Tenor) -> CoreResult<Self> {
        let n = i64::from(tenor.magnitude());
        match tenor.unit() {
            TimeUnit::Day => self.checked_add_days(n),
            TimeUnit::Week => self.checked_add_days(7 * n),
            TimeUnit::Month => self.add_months(to_months(n)?),
            TimeUnit::Year => self.add_months(to_months(12 * n)?),
        }
    }

    /// Calculates the number of calendar days from `self` to `other`.
    #[must_use]
    pub fn days_between(&self, other: &Date) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// Returns the underlying `NaiveDate`.
    #[must_use]
    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }

    /// Returns the last calendar day of the date's month.
    #[must_use]
    pub fn end_of_month(&self) -> Self {
        self.add_days(i64::from(self.days_in_month() - self.day()))
    }

    /// Returns the day of week.
    #[must_use]
    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Checks if the date is a Saturday or Sunday.
    #[must_use]
    pub fn is_weekend(&self) -> bool {
        matches!(self.weekday(), Weekday::Sat | Weekday::Sun)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl std::str::FromStr for Date {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl From<Date> for NaiveDate {
    fn from(date: Date) -> Self {
        date.0
    }
}

impl Add<i64> for Date {
    type Output = Self;

    fn add(self, days: i64) -> Self::Output {
        self.add_days(days)
    }
}

impl Sub<i64> for Date {
    type Output = Self;

    fn sub(self, days: i64) -> Self::Output {
        self.add_days(-days)
    }
}

impl Sub<Date> for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    fn sub(self, other: Date) -> Self::Output {
        other.days_between(&self)
    }
}

fn to_months(n: i64) -> CoreResult<i32> {
    i32::try_from(n).map_err(|_| CoreError::invalid_date(format!("{n} months out of range")))
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 31,
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_creation() {
        let date = Date::from_ymd(2025, 6, 15).unwrap();
        assert_eq!(date.year(), 2025);
        assert_eq!(date.month(), 6);
        assert_eq!(date.day(), 15);
    }

    #[test]
    fn test_invalid_date() {
        assert!(Date::from_ymd(2025, 2, 30).is_err());
        assert!(Date::from_ymd(2025, 13, 1).is_err());
    }

    #[test]
    fn test_parse_and_display() {
        let date = Date::parse("2025-01-15").unwrap();
        assert_eq!(date.to_string(), "2025-01-15");
        assert!(Date::parse("15/01/2025").is_err());
    }

    #[test]
    fn test_add_months_clamps_day() {
        let jan31 = Date::from_ymd(2025, 1, 31).unwrap();
        assert_eq!(jan31.add_months(1).unwrap(), Date::from_ymd(2025, 2, 28).unwrap());
        assert_eq!(jan31.add_months(-2).unwrap(), Date::from_ymd(2024, 11, 30).unwrap());
        assert_eq!(jan31.add_months(13).unwrap(), Date::from_ymd(2026, 2, 28).unwrap());
    }

    #[test]
    fn test_add_years_leap_day() {
        let leap = Date::from_ymd(2024, 2, 29).unwrap();
        assert_eq!(leap.add_years(1).unwrap(), Date::from_ymd(2025, 2, 28).unwrap());
        assert_eq!(leap.add_years(4).unwrap(), leap.add_days(1461));
    }

    #[test]
    fn test_add_tenor() {
        let d = Date::from_ymd(2025, 1, 15).unwrap();
        assert_eq!(d.add_tenor(Tenor::days(5)).unwrap(), Date::from_ymd(2025, 1, 20).unwrap());
        assert_eq!(d.add_tenor(Tenor::weeks(2)).unwrap(), Date::from_ymd(2025, 1, 29).unwrap());
        assert_eq!(d.add_tenor(Tenor::months(3)).unwrap(), Date::from_ymd(2025, 4, 15).unwrap());
        assert_eq!(d.add_tenor(Tenor::years(3)).unwrap(), Date::from_ymd(2028, 1, 15).unwrap());
    }

    #[test]
    fn test_add_tenor_out_of_range() {
        let d = Date::from_ymd(2025, 1, 15).unwrap();
        for tenor in [
            Tenor::days(99_999_999),
            Tenor::weeks(4_000_000_000),
            Tenor::months(u32::MAX),
            Tenor::years(8000),
        ] {
            assert!(
                matches!(d.add_tenor(tenor), Err(CoreError::InvalidDate { .. })),
                "{tenor}"
            );
        }
        assert_eq!(
            d.add_tenor(Tenor::years(7974)).unwrap(),
            Date::from_ymd(9999, 1, 15).unwrap()
        );
    }

    #[test]
    fn test_checked_add_days() {
        let d = Date::from_ymd(2025, 1, 15).unwrap();
        assert_eq!(d.checked_add_days(-15).unwrap(), Date::from_ymd(2024, 12, 31).unwrap());
        assert!(d.checked_add_days(i64::MAX).is_err());
        assert!(d.checked_add_days(-800_000).is_err());
    }

    #[test]
    fn test_days_between_and_sub() {
        let a = Date::from_ymd(2025, 1, 15).unwrap();
        let b = Date::from_ymd(2028, 1, 15).unwrap();
        assert_eq!(a.days_between(&b), 1095);
        assert_eq!(b - a, 1095);
        assert_eq!(a + 1095, b);
    }

    #[test]
    fn test_end_of_month() {
        let d = Date::from_ymd(2024, 2, 10).unwrap();
        assert_eq!(d.end_of_month(), Date::from_ymd(2024, 2, 29).unwrap());
    }
}
