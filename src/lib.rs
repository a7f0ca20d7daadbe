//! Exact secret reconstruction for threshold secret sharing
//!
//! This crate recovers the constant term of a polynomial, the shared secret
//! of a `k`-of-`n` scheme, from `k` of its points using Lagrange
//! interpolation over arbitrary-precision integers.
//!
//! The focus is on **exactness**: no value is ever rounded, truncated or
//! wrapped. Intermediate fractions are kept as reduced rationals and the
//! final result is produced by an exact division that fails loudly instead
//! of silently losing information.
//!
//! # Module overview
//!
//! - `primitives`
//!   Exact numeric types: `BigInt`, an arbitrary-precision signed integer
//!   in radix `10^18`, and `Rational`, a fraction of two `BigInt`s kept in
//!   lowest terms.
//!
//! - `encoding`
//!   Digit strings in bases 2 to 36, the textual form in which share values
//!   are transported.
//!
//! - `recovery`
//!   Lagrange interpolation at zero, threshold-aware reconstruction, and
//!   the JSON share document format.
//!
//! - `errors`
//!   The crate-wide [`Error`] type.
//!
//! # Example
//!
//! ```
//! use polysecret::primitives::BigInt;
//! use polysecret::recovery::lagrange::{Point, reconstruct};
//!
//! // f(x) = 2x + 1
//! let points = vec![
//!     Point::new(1, BigInt::from(3)),
//!     Point::new(2, BigInt::from(5)),
//!     Point::new(3, BigInt::from(7)),
//! ];
//! let outcome = reconstruct(&points, 3).unwrap();
//!
//! assert_eq!(outcome.secret().to_string(), "1");
//! ```
//!
//! # Design goals
//!
//! - Exact arithmetic end to end
//! - Immutable values with explicit, predictable semantics
//! - Deterministic results independent of input order
//! - Library code reports through `Result`; only the binary decides how
//!   errors are presented

pub mod encoding;
pub mod errors;
pub mod primitives;
pub mod recovery;

pub use errors::Error;
