//! # OIS Forward Curves
//!
//! OIS discount curve construction and daily forward extraction.
//!
//! This crate provides:
//!
//! - **Conventions**: Settlement lag, calendar, day count and index per currency
//! - **Quotes**: Tenor/rate normalization
//! - **Instruments**: OIS schedules and par pricing
//! - **Curve**: Log-cubic discount curve with flat-forward extrapolation
//! - **Bootstrap**: Gauss-Seidel fit of the curve to OIS quotes, with repricing
//! - **Forwards**: Daily one-business-day forward series
//!
//! ## Quick Start
//!
//! ```rust
//! use oisfwd_curves::prelude::*;
//! use chrono::NaiveDate;
//!
//! let valuation = Date::from_ymd(2025, 1, 15).unwrap();
//! let convention = conventions::lookup_code("eur").unwrap();
//! let quotes = vec![
//!     normalize("1M", 3.50).unwrap(),
//!     normalize("3M", 3.55).unwrap(),
//!     normalize("1Y", 3.40).unwrap(),
//! ];
//!
//! let curve = OisBootstrapper::from_quotes(valuation, convention, &quotes)
//!     .unwrap()
//!     .bootstrap()
//!     .unwrap();
//!
//! let computed_at = NaiveDate::from_ymd_opt(2025, 1, 15)
//!     .unwrap()
//!     .and_hms_opt(16, 0, 0)
//!     .unwrap();
//! let forwards = ForwardExtractor::default()
//!     .extract(&curve, valuation, convention.calendar(), convention.currency, computed_at)
//!     .unwrap();
//!
//! assert_eq!(forwards.len(), 1095);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]

pub mod bootstrap;
pub mod conventions;
pub mod curves;
pub mod error;
pub mod forwards;
pub mod instruments;
pub mod quotes;
pub mod repricing;
pub mod traits;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bootstrap::{build, BootstrapConfig, OisBootstrapper};
    pub use crate::conventions::{self, CurrencyConvention};
    pub use crate::curves::DiscountCurve;
    pub use crate::error::{CurveError, CurveResult};
    pub use crate::forwards::{ExtractionConfig, ForwardExtractor, ForwardPoint};
    pub use crate::instruments::{FixedPeriod, OisInstrument};
    pub use crate::quotes::{normalize, RateQuote};
    pub use crate::repricing::{BootstrapResult, RepricingCheck, RepricingReport};
    pub use crate::traits::Curve;
    pub use oisfwd_core::{Currency, Date, Tenor};
}

pub use bootstrap::{BootstrapConfig, OisBootstrapper};
pub use conventions::CurrencyConvention;
pub use curves::DiscountCurve;
pub use error::{CurveError, CurveResult};
pub use forwards::{ExtractionConfig, ForwardExtractor, ForwardPoint};
pub use instruments::OisInstrument;
pub use quotes::RateQuote;
pub use traits::Curve;
