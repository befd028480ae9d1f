//! # OIS Forward Core
//!
//! Core types shared by the OIS curve crates:
//!
//! - **Types**: `Date`, `Tenor`, `Currency`
//! - **Day Count Conventions**: ACT/360 and ACT/365 Fixed
//! - **Business Day Calendars**: holiday calendars for the six supported markets
//!
//! ## Example
//!
//! ```rust
//! use oisfwd_core::prelude::*;
//!
//! let valuation = Date::from_ymd(2025, 1, 15).unwrap();
//! let tenor = Tenor::parse("3M").unwrap();
//! let maturity = CalendarId::Target2
//!     .calendar()
//!     .advance_by_tenor(valuation, tenor, BusinessDayConvention::ModifiedFollowing)
//!     .unwrap();
//! assert_eq!(maturity, Date::from_ymd(2025, 4, 15).unwrap());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::trivially_copy_pass_by_ref)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::match_same_arms)]

pub mod calendars;
pub mod daycounts;
pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::calendars::{BusinessDayConvention, Calendar, CalendarId};
    pub use crate::daycounts::{DayCount, DayCountConvention};
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{Currency, Date, Tenor, TimeUnit};
}

// Re-export commonly used types at crate root
pub use error::{CoreError, CoreResult};
pub use types::{Currency, Date, Tenor, TimeUnit};
