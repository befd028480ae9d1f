//! Domain types.

mod currency;
mod date;
mod tenor;

pub use currency::Currency;
pub use date::Date;
pub use tenor::{Tenor, TimeUnit};
