//! Job inputs: ticker mapping and liquidity windows.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use oisfwd_core::{Currency, Tenor, TimeUnit};

/// One configured market data ticker and the OIS tenor it quotes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickerConfig {
    /// Vendor ticker
    pub ticker: String,
    /// Currency of the swap
    pub currency: Currency,
    /// Tenor length
    pub term: u32,
    /// Tenor unit
    pub unit: TimeUnit,
}

impl TickerConfig {
    /// Tenor string in quote form, e.g. "3M".
    #[must_use]
    pub fn tenor_string(&self) -> String {
        format!("{}{}", self.term, self.unit.code())
    }

    /// Typed tenor, if the term is positive.
    #[must_use]
    pub fn tenor(&self) -> Option<Tenor> {
        Tenor::new(self.term, self.unit).ok()
    }
}

/// Hours of the day, `[first_update, last_update)`, during which a currency
/// is liquid enough to refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateWindow {
    /// First hour (0-23) at which to refresh
    pub first_update: u32,
    /// Hour from which refreshes stop
    pub last_update: u32,
}

impl UpdateWindow {
    /// Creates a window.
    #[must_use]
    pub fn new(first_update: u32, last_update: u32) -> Self {
        Self {
            first_update,
            last_update,
        }
    }

    /// True when `first_update <= hour < last_update`.
    #[must_use]
    pub fn is_open(&self, hour: u32) -> bool {
        self.first_update <= hour && hour < self.last_update
    }
}

impl fmt::Display for UpdateWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:02}:00, {:02}:00)", self.first_update, self.last_update)
    }
}

/// Liquidity windows by currency.
pub type UpdateWindows = BTreeMap<Currency, UpdateWindow>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tenor_string() {
        let t = TickerConfig {
            ticker: "EESWE1Z BGN Curncy".into(),
            currency: Currency::EUR,
            term: 1,
            unit: TimeUnit::Week,
        };
        assert_eq!(t.tenor_string(), "1W");
        assert_eq!(t.tenor(), Some(Tenor::weeks(1)));
    }

    #[test]
    fn test_zero_term_has_no_tenor() {
        let t = TickerConfig {
            ticker: "X".into(),
            currency: Currency::EUR,
            term: 0,
            unit: TimeUnit::Month,
        };
        assert_eq!(t.tenor(), None);
        assert_eq!(t.tenor_string(), "0M");
    }

    #[test]
    fn test_window_is_half_open() {
        let w = UpdateWindow::new(7, 18);
        assert!(!w.is_open(6));
        assert!(w.is_open(7));
        assert!(w.is_open(17));
        assert!(!w.is_open(18));
        assert_eq!(w.to_string(), "[07:00, 18:00)");
    }

    #[test]
    fn test_empty_window_never_opens() {
        let w = UpdateWindow::new(9, 9);
        assert!((0..24).all(|h| !w.is_open(h)));
    }
}
