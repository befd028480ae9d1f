//! Liquidity-window gate deciding which currencies refresh on a run.

use std::fmt;

use oisfwd_core::Currency;

use crate::config::{UpdateWindow, UpdateWindows};

/// Outcome of gating one currency at a given hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// Inside the window: rebuild the curve.
    Refresh,
    /// Outside the window: keep any earlier output.
    Closed {
        /// The currency's window
        window: UpdateWindow,
        /// Hour the job ran at
        hour: u32,
    },
    /// No window configured for the currency.
    NoWindow,
}

impl GateDecision {
    /// Whether the currency refreshes.
    #[must_use]
    pub fn is_refresh(&self) -> bool {
        matches!(self, GateDecision::Refresh)
    }
}

impl fmt::Display for GateDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GateDecision::Refresh => write!(f, "refresh"),
            GateDecision::Closed { window, hour } => {
                write!(f, "hour {hour:02} outside window {window}")
            }
            GateDecision::NoWindow => write!(f, "no update window configured"),
        }
    }
}

/// Gates a currency on its liquidity window.
#[must_use]
pub fn decide(windows: &UpdateWindows, currency: Currency, hour: u32) -> GateDecision {
    match windows.get(&currency) {
        Some(window) if window.is_open(hour) => GateDecision::Refresh,
        Some(window) => GateDecision::Closed {
            window: *window,
            hour,
        },
        None => GateDecision::NoWindow,
    }
}
