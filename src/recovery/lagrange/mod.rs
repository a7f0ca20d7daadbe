//! Lagrange reconstruction over the integers.
//!
//! The implementation is split into two layers:
//!
//! - `core`
//!   Public types and the threshold-aware [`reconstruct`] entry point:
//!   point selection, soft failure on too few points.
//!
//! - `interpolation`
//!   The exact arithmetic: Lagrange basis products at zero accumulated as
//!   reduced rationals, followed by one exact integer division.
//!
//! ## Design notes
//!
//! - All intermediate values are exact; nothing is rounded.
//! - Fractions are reduced after every addition to bound their growth.
//! - `x` coordinates must be distinct among the selected points.

mod core;
mod interpolation;

pub use self::core::{Outcome, Point, reconstruct};
pub use self::interpolation::interpolate_at_zero;
