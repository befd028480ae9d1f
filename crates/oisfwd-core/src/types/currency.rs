//! Currencies with a supported OIS curve.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, CoreResult};

/// ISO 4217 codes of the currencies this library builds OIS curves for.
///
/// The set is closed; an unknown code is an `UnsupportedCurrency` error.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Currency {
    /// Euro
    EUR,
    /// British Pound Sterling
    GBP,
    /// United States Dollar
    USD,
    /// Japanese Yen
    JPY,
    /// Australian Dollar
    AUD,
    /// Canadian Dollar
    CAD,
}

impl Currency {
    /// All supported currencies, in table order.
    pub const ALL: [Currency; 6] = [
        Currency::EUR,
        Currency::GBP,
        Currency::USD,
        Currency::JPY,
        Currency::AUD,
        Currency::CAD,
    ];

    /// Returns the ISO 4217 3-letter code.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::USD => "USD",
            Currency::JPY => "JPY",
            Currency::AUD => "AUD",
            Currency::CAD => "CAD",
        }
    }

    /// Returns the full currency name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Currency::EUR => "Euro",
            Currency::GBP => "British Pound",
            Currency::USD => "US Dollar",
            Currency::JPY => "Japanese Yen",
            Currency::AUD => "Australian Dollar",
            Currency::CAD => "Canadian Dollar",
        }
    }

    /// Parses a currency code, ignoring case and surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::UnsupportedCurrency` for any other code.
    pub fn from_code(code: &str) -> CoreResult<Self> {
        let wanted = code.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CoreError::unsupported_currency(code))
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Currency {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_code() {
        assert_eq!(Currency::EUR.code(), "EUR");
        assert_eq!(Currency::CAD.to_string(), "CAD");
    }

    #[test]
    fn test_from_code() {
        assert_eq!(Currency::from_code("gbp").unwrap(), Currency::GBP);
        assert_eq!(" JPY ".parse::<Currency>().unwrap(), Currency::JPY);
        assert!(matches!(
            Currency::from_code("CHF"),
            Err(CoreError::UnsupportedCurrency { .. })
        ));
    }

    #[test]
    fn test_all_round_trip() {
        for ccy in Currency::ALL {
            assert_eq!(Currency::from_code(ccy.code()).unwrap(), ccy);
        }
    }

    #[test]
    fn test_serde_uses_code() {
        let json = serde_json::to_string(&Currency::AUD).unwrap();
        assert_eq!(json, "\"AUD\"");
    }
}
