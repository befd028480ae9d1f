//! # OIS Forward Math
//!
//! Numerical building blocks for discount curve construction:
//!
//! - **Interpolation**: natural cubic spline and its monotone (Hyman filtered)
//!   Hermite form
//! - **Extrapolation**: flat and linear continuation past the last knot

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::unreadable_literal)]

pub mod error;
pub mod extrapolation;
pub mod interpolation;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::extrapolation::{
        ExtrapolationMethod, Extrapolator, FlatExtrapolator, LinearExtrapolator,
    };
    pub use crate::interpolation::{CubicSpline, Interpolator, MonotoneCubic};
}

pub use error::{MathError, MathResult};
