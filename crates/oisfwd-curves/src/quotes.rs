//! Market quotes and their normalization.

use serde::{Deserialize, Serialize};
use std::fmt;

use oisfwd_core::{CoreResult, Tenor};

/// An OIS par rate quoted against a tenor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateQuote {
    /// Swap tenor
    pub tenor: Tenor,
    /// Par rate in percent (3.5 means 3.5%)
    pub rate_percent: f64,
}

impl RateQuote {
    /// Creates a quote from a typed tenor.
    #[must_use]
    pub fn new(tenor: Tenor, rate_percent: f64) -> Self {
        Self {
            tenor,
            rate_percent,
        }
    }

    /// The par rate as a decimal fraction.
    #[must_use]
    pub fn fixed_rate(&self) -> f64 {
        self.rate_percent / 100.0
    }
}

impl fmt::Display for RateQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {:.4}%", self.tenor, self.rate_percent)
    }
}

/// Converts a raw tenor string and percentage rate into a typed quote.
///
/// The tenor is trimmed and parsed with [`Tenor::parse`]; the rate is carried
/// through unchanged.
///
/// # Errors
///
/// `InvalidTenorUnit` or `InvalidTenorMagnitude` when the tenor does not parse.
///
/// # Example
///
/// ```rust
/// use oisfwd_curves::quotes::normalize;
/// use oisfwd_core::{Tenor, TimeUnit};
///
/// let quote = normalize(" 10y ", 3.1).unwrap();
/// assert_eq!(quote.tenor, Tenor::new(10, TimeUnit::Year).unwrap());
/// assert_eq!(quote.rate_percent, 3.1);
/// ```
pub fn normalize(tenor: &str, rate_percent: f64) -> CoreResult<RateQuote> {
    Ok(RateQuote::new(Tenor::parse(tenor)?, rate_percent))
}
