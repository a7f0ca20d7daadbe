//! Primitive types
//!
//! This module defines the exact numeric types used throughout the crate.
//!
//! Unlike fixed-width integers these primitives never overflow or round:
//! every result is exact, growing in size as needed. They are kept
//! intentionally small, providing only the operations secret reconstruction
//! needs rather than a full big-number library.
//!
//! Current primitives include:
//! - `BigInt`: an arbitrary-precision signed integer
//! - `Rational`: an exact fraction of two `BigInt`s, kept in lowest terms

mod bigint;
mod rational;

/// Exact numeric primitives.
///
/// These types are re-exported as the primary numeric values used across
/// the crate.
pub use bigint::BigInt;
pub use rational::Rational;
