//! TARGET2 calendar for euro payments and ESTR fixings.

use super::bitmap::{HolidayBitmap, HolidayCalendarBuilder, Observance, WeekendType};
use super::Calendar;
use crate::types::Date;
use std::sync::OnceLock;

static TARGET2_CALENDAR: OnceLock<Target2Calendar> = OnceLock::new();

/// TARGET2 holiday calendar for Eurozone markets.
///
/// ## Holidays
///
/// - New Year's Day (January 1)
/// - Good Friday
/// - Easter Monday
/// - Labour Day (May 1)
/// - Christmas Day (December 25)
/// - Boxing Day (December 26)
///
/// Holidays falling on a weekend are not moved.
#[derive(Debug, Clone)]
pub struct Target2Calendar {
    bitmap: HolidayBitmap,
}

impl Target2Calendar {
    /// Create a new TARGET2 calendar.
    pub fn new() -> Self {
        Self {
            bitmap: build_target2_holidays(),
        }
    }

    /// Get the global TARGET2 calendar instance.
    pub fn global() -> &'static Target2Calendar {
        TARGET2_CALENDAR.get_or_init(Target2Calendar::new)
    }
}

impl Default for Target2Calendar {
    fn default() -> Self {
        Self::new()
    }
}

impl Calendar for Target2Calendar {
    fn name(&self) -> &'static str {
        "TARGET2"
    }

    fn is_business_day(&self, date: Date) -> bool {
        self.bitmap.is_business_day_date(date)
    }
}

fn build_target2_holidays() -> HolidayBitmap {
    HolidayCalendarBuilder::new("TARGET2")
        .weekend(WeekendType::SaturdaySunday)
        .add_fixed_holiday(1, 1, Observance::Actual)
        .add_easter_holiday(-2)
        .add_easter_holiday(1)
        .add_fixed_holiday(5, 1, Observance::Actual)
        .add_fixed_holiday(12, 25, Observance::Actual)
        .add_fixed_holiday(12, 26, Observance::Actual)
        .build()
}
