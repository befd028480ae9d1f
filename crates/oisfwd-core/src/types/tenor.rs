//! Tenor representation (e.g., 3M, 1Y, 10Y).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, CoreResult};

/// Unit of a tenor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TimeUnit {
    /// Calendar days
    Day,
    /// Weeks of seven days
    Week,
    /// Calendar months
    Month,
    /// Calendar years
    Year,
}

impl TimeUnit {
    /// Single-letter code used in tenor strings.
    #[must_use]
    pub fn code(&self) -> char {
        match self {
            TimeUnit::Day => 'D',
            TimeUnit::Week => 'W',
            TimeUnit::Month => 'M',
            TimeUnit::Year => 'Y',
        }
    }

    fn from_code(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'D' => Some(TimeUnit::Day),
            'W' => Some(TimeUnit::Week),
            'M' => Some(TimeUnit::Month),
            'Y' => Some(TimeUnit::Year),
            _ => None,
        }
    }
}

/// A positive period length such as `3M` or `10Y`.
///
/// Serializes as its string form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tenor {
    magnitude: u32,
    unit: TimeUnit,
}

impl Tenor {
    /// Creates a tenor.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidTenorMagnitude` if `magnitude` is zero.
    pub fn new(magnitude: u32, unit: TimeUnit) -> CoreResult<Self> {
        if magnitude == 0 {
            return Err(CoreError::invalid_tenor_magnitude(format!(
                "{magnitude}{}",
                unit.code()
            )));
        }
        Ok(Self { magnitude, unit })
    }

    /// `n` days. Callers pass a positive count.
    #[must_use]
    pub const fn days(n: u32) -> Self {
        Self {
            magnitude: n,
            unit: TimeUnit::Day,
        }
    }

    /// `n` weeks.
    #[must_use]
    pub const fn weeks(n: u32) -> Self {
        Self {
            magnitude: n,
            unit: TimeUnit::Week,
        }
    }

    /// `n` months.
    #[must_use]
    pub const fn months(n: u32) -> Self {
        Self {
            magnitude: n,
            unit: TimeUnit::Month,
        }
    }

    /// `n` years.
    #[must_use]
    pub const fn years(n: u32) -> Self {
        Self {
            magnitude: n,
            unit: TimeUnit::Year,
        }
    }

    /// Parses a tenor string.
    ///
    /// The last character is the unit (D, W, M, Y in either case) and the
    /// rest must be a positive integer. Surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// - `InvalidTenorUnit` when the string is empty or ends in another character.
    /// - `InvalidTenorMagnitude` when the prefix is not a positive integer.
    ///
    /// # Example
    ///
    /// ```rust
    /// use oisfwd_core::types::{Tenor, TimeUnit};
    ///
    /// let t = Tenor::parse("10y").unwrap();
    /// assert_eq!((t.magnitude(), t.unit()), (10, TimeUnit::Year));
    /// assert!(Tenor::parse("3X").is_err());
    /// ```
    pub fn parse(s: &str) -> CoreResult<Self> {
        let trimmed = s.trim();
        let Some(last) = trimmed.chars().last() else {
            return Err(CoreError::invalid_tenor_unit(s));
        };
        let unit = TimeUnit::from_code(last).ok_or_else(|| CoreError::invalid_tenor_unit(s))?;

        let prefix = &trimmed[..trimmed.len() - last.len_utf8()];
        let magnitude = prefix
            .parse::<u32>()
            .ok()
            .filter(|n| *n > 0)
            .ok_or_else(|| CoreError::invalid_tenor_magnitude(s))?;

        Ok(Self { magnitude, unit })
    }

    /// Number of units.
    #[must_use]
    pub fn magnitude(&self) -> u32 {
        self.magnitude
    }

    /// The unit.
    #[must_use]
    pub fn unit(&self) -> TimeUnit {
        self.unit
    }

    /// True for month and year tenors, which roll Modified Following.
    #[must_use]
    pub fn is_month_based(&self) -> bool {
        matches!(self.unit, TimeUnit::Month | TimeUnit::Year)
    }

    /// Length in whole months, or `None` for day and week tenors.
    #[must_use]
    pub fn in_months(&self) -> Option<u32> {
        match self.unit {
            TimeUnit::Month => Some(self.magnitude),
            TimeUnit::Year => Some(self.magnitude * 12),
            TimeUnit::Day | TimeUnit::Week => None,
        }
    }
}

impl fmt::Display for Tenor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.magnitude, self.unit.code())
    }
}

impl FromStr for Tenor {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Tenor {
    type Error = CoreError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<Tenor> for String {
    fn from(tenor: Tenor) -> Self {
        tenor.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_units() {
        assert_eq!(Tenor::parse("3M").unwrap(), Tenor::months(3));
        assert_eq!(Tenor::parse("10Y").unwrap(), Tenor::years(10));
        assert_eq!(Tenor::parse("5d").unwrap(), Tenor::days(5));
        assert_eq!(Tenor::parse(" 2w ").unwrap(), Tenor::weeks(2));
    }

    #[test]
    fn test_parse_bad_unit() {
        assert!(matches!(
            Tenor::parse("3X"),
            Err(CoreError::InvalidTenorUnit { .. })
        ));
        assert!(matches!(
            Tenor::parse(""),
            Err(CoreError::InvalidTenorUnit { .. })
        ));
        assert!(matches!(
            Tenor::parse("3é"),
            Err(CoreError::InvalidTenorUnit { .. })
        ));
    }

    #[test]
    fn test_parse_bad_magnitude() {
        for bad in ["-2Y", "Y", "0M", "1.5Y", "abcD"] {
            assert!(
                matches!(Tenor::parse(bad), Err(CoreError::InvalidTenorMagnitude { .. })),
                "{bad} should fail on magnitude"
            );
        }
    }

    #[test]
    fn test_new_rejects_zero() {
        assert!(Tenor::new(0, TimeUnit::Month).is_err());
        assert_eq!(Tenor::new(6, TimeUnit::Month).unwrap(), Tenor::months(6));
    }

    #[test]
    fn test_display_round_trip() {
        for s in ["1D", "2W", "18M", "30Y"] {
            assert_eq!(Tenor::parse(s).unwrap().to_string(), s);
        }
    }

    #[test]
    fn test_serde_as_string() {
        assert_eq!(serde_json::to_string(&Tenor::years(3)).unwrap(), "\"3Y\"");
        let t: Tenor = serde_json::from_str("\"18m\"").unwrap();
        assert_eq!(t, Tenor::months(18));
        assert!(serde_json::from_str::<Tenor>("\"3X\"").is_err());
    }

    #[test]
    fn test_in_months() {
        assert_eq!(Tenor::years(2).in_months(), Some(24));
        assert_eq!(Tenor::months(18).in_months(), Some(18));
        assert_eq!(Tenor::weeks(1).in_months(), None);
    }
}
