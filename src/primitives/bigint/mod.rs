//! Arbitrary-precision signed integer primitive
//!
//! This module defines `BigInt`, a growable signed integer with exact
//! addition, subtraction, multiplication, truncating division and GCD.
//!
//! It is split the same way as the fixed-size primitives:
//! - `core`: the type, its canonical form, ordering and formatting
//! - `limbs`: magnitude arithmetic on raw limb slices
//! - `ops`: operator traits and sign handling
//! - `conv`: conversions from and to native integers and decimal strings

mod conv;
mod core;
pub(crate) mod limbs;
mod ops;

/// Arbitrary-precision signed integer.
pub use self::core::BigInt;
