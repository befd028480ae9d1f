//! CLI command implementations.

pub mod conventions;
pub mod curve;
pub mod run;

pub use conventions::ConventionsArgs;
pub use curve::CurveArgs;
pub use run::RunArgs;

use oisfwd_core::Date;

use crate::error::{CliError, CliResult};

/// Parses a date string in YYYY-MM-DD format.
pub fn parse_date(s: &str) -> CliResult<Date> {
    Date::parse(s).map_err(|_| CliError::InvalidDate(s.to_string()))
}

/// The given date, or today when absent.
pub fn date_or_today(s: Option<&str>) -> CliResult<Date> {
    s.map_or_else(|| Ok(Date::today()), parse_date)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2025-01-15").unwrap(), Date::from_ymd(2025, 1, 15).unwrap());
        assert!(matches!(parse_date("15/01/2025"), Err(CliError::InvalidDate(_))));
        assert!(parse_date("2025-02-30").is_err());
    }
}
