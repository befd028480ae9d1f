//! Australian settlement calendar, used for AONIA.

use super::bitmap::{
    christmas_and_boxing_day, HolidayBitmap, HolidayCalendarBuilder, Observance,
};
use super::Calendar;
use crate::types::Date;
use chrono::Weekday;
use std::sync::OnceLock;

static AUSTRALIA_CALENDAR: OnceLock<AustraliaCalendar> = OnceLock::new();

/// Australian settlement holidays.
///
/// ## Holidays
///
/// - New Year's Day and Australia Day (Monday if on a weekend)
/// - Good Friday, Easter Monday
/// - ANZAC Day (25 April, not moved)
/// - King's Birthday (2nd Monday in June)
/// - Bank Holiday (1st Monday in August)
/// - Labour Day (1st Monday in October)
/// - Christmas Day and Boxing Day (with substitutes)
#[derive(Debug, Clone)]
pub struct AustraliaCalendar {
    bitmap: HolidayBitmap,
}

impl AustraliaCalendar {
    /// Create a new Australia calendar.
    pub fn new() -> Self {
        Self {
            bitmap: HolidayCalendarBuilder::new("Australia")
                .add_fixed_holiday(1, 1, Observance::NextMonday)
                .add_fixed_holiday(1, 26, Observance::NextMonday)
                .add_easter_holiday(-2)
                .add_easter_holiday(1)
                .add_fixed_holiday(4, 25, Observance::Actual)
                .add_nth_weekday_holiday(6, Weekday::Mon, 2)
                .add_nth_weekday_holiday(8, Weekday::Mon, 1)
                .add_nth_weekday_holiday(10, Weekday::Mon, 1)
                .add_custom_holidays(christmas_and_boxing_day)
                .build(),
        }
    }

    /// Get the global Australia calendar instance.
    pub fn global() -> &'static AustraliaCalendar {
        AUSTRALIA_CALENDAR.get_or_init(AustraliaCalendar::new)
    }
}

impl Default for AustraliaCalendar {
    fn default() -> Self {
        Self::new()
    }
}

impl Calendar for AustraliaCalendar {
    fn name(&self) -> &'static str {
        "Australia"
    }

    fn is_business_day(&self, date: Date) -> bool {
        self.bitmap.is_business_day_date(date)
    }
}
