//! Error types for the crate.
//!
//! Every fallible operation in `polysecret` reports through the single
//! [`Error`] enum below. All variants are fatal to the call that produced
//! them; the one soft condition of the reconstruction pipeline (fewer points
//! than the threshold) is not an error and is reported through
//! [`Outcome`](crate::recovery::lagrange::Outcome) instead.

use thiserror::Error;

/// Errors returned by parsing, decoding, arithmetic and interpolation.
#[derive(Debug, Error)]
pub enum Error {
    /// A decimal or digit string is empty or contains non-digit characters.
    #[error("invalid number format: {0:?}")]
    InvalidFormat(String),

    /// A digit is outside the range `[0, base)`.
    #[error("invalid digit {digit:?} for base {base}")]
    InvalidDigit { digit: char, base: u32 },

    /// The base is outside `2..=36`.
    #[error("unsupported base {0}, expected 2..=36")]
    InvalidBase(u32),

    /// Two selected points share the same x coordinate.
    #[error("duplicate x coordinate {x} in point set")]
    DuplicateAbscissa { x: i64 },

    /// An exact division left a non-zero remainder.
    #[error("rational {numerator}/{denominator} does not reduce to an integer")]
    NonIntegerResult {
        numerator: String,
        denominator: String,
    },

    /// Division by a zero divisor or a rational with zero denominator.
    #[error("division by zero")]
    DivisionByZero,

    /// The reconstruction threshold must be at least one.
    #[error("invalid threshold {0}, expected at least 1")]
    InvalidThreshold(usize),

    /// A share document is structurally invalid.
    #[error("malformed share document: {0}")]
    Document(String),

    /// The share document is not valid JSON.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
