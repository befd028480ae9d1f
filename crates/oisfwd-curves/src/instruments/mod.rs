//! Calibration instruments.
//!
//! Only overnight index swaps are used to build the curves here; each quote
//! becomes one [`OisInstrument`] with its schedule resolved against the
//! valuation date.

mod ois;

pub use ois::{FixedPeriod, OisInstrument};
