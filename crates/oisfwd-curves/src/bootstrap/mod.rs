//! Curve bootstrap.
//!
//! OIS discount curves are fitted by a Gauss-Seidel fixed-point iteration:
//! each sweep solves every pillar from its own par relation, with all other
//! discount factors read off the current log-cubic curve.
//!
//! # Example
//!
//! ```rust
//! use oisfwd_core::{Currency, Date};
//! use oisfwd_curves::bootstrap::OisBootstrapper;
//! use oisfwd_curves::conventions;
//! use oisfwd_curves::quotes::normalize;
//! use oisfwd_curves::Curve;
//!
//! let valuation = Date::from_ymd(2025, 1, 15).unwrap();
//! let quotes = vec![
//!     normalize("1M", 3.50).unwrap(),
//!     normalize("3M", 3.55).unwrap(),
//!     normalize("1Y", 3.40).unwrap(),
//! ];
//!
//! let result = OisBootstrapper::from_quotes(valuation, conventions::lookup(Currency::EUR), &quotes)
//!     .unwrap()
//!     .bootstrap_validated()
//!     .unwrap();
//!
//! assert!(result.is_valid());
//! assert_eq!(result.curve.discount_factor(valuation).unwrap(), 1.0);
//! ```

mod fixed_point;

pub use fixed_point::{build, BootstrapConfig, OisBootstrapper};
