//! Curve implementations.

mod discount;

pub use discount::DiscountCurve;
