//! Threshold secret reconstruction.
//!
//! This module provides the public API for recovering the constant term of
//! a polynomial, the shared secret, from evaluation points.
//!
//! A secret of a `k`-of-`n` scheme is the constant term of a polynomial of
//! degree `k - 1`, and each share is one point on it:
//!
//! - Any `k` points with distinct `x` determine the polynomial and thus the
//!   secret.
//! - Fewer than `k` points do not.
//!
//! ## Provided operations
//!
//! - [`reconstruct`]
//!   Select `k` points deterministically and recover the secret, reporting
//!   a shortage of points as a soft [`Outcome`] rather than an error.
//!
//! - [`interpolate_at_zero`](super::interpolate_at_zero)
//!   The exact interpolation itself, over exactly the points given.
//!
//! Unlike finite-field schemes, everything here is computed over the
//! integers with exact rationals, so shares are plain (possibly huge)
//! integers and `x` coordinates are machine integers.

use tracing::{debug, instrument, warn};

use super::interpolation::interpolate_at_zero;
use crate::errors::Error;
use crate::primitives::BigInt;

/// A single share: the evaluation `y = f(x)` of the secret polynomial.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Point {
    /// Share identifier (x-coordinate).
    ///
    /// Must be unique among the points used for one reconstruction.
    pub x: i64,

    /// Polynomial value at `x`.
    pub y: BigInt,
}

impl Point {
    pub fn new(x: i64, y: BigInt) -> Self {
        Self { x, y }
    }
}

impl From<(i64, BigInt)> for Point {
    fn from((x, y): (i64, BigInt)) -> Self {
        Self { x, y }
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Self {
            x,
            y: BigInt::from(y),
        }
    }
}

/// Result of a reconstruction attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The secret was recovered.
    Recovered(BigInt),

    /// Fewer points than the threshold were supplied. Nothing was computed.
    InsufficientPoints { required: usize, provided: usize },
}

impl Outcome {
    pub fn is_recovered(&self) -> bool {
        matches!(self, Outcome::Recovered(_))
    }

    /// The recovered secret, or zero if there were not enough points.
    pub fn secret(&self) -> BigInt {
        match self {
            Outcome::Recovered(secret) => secret.clone(),
            Outcome::InsufficientPoints { .. } => BigInt::zero(),
        }
    }

    /// The recovered secret, if any.
    pub fn into_secret(self) -> Option<BigInt> {
        match self {
            Outcome::Recovered(secret) => Some(secret),
            Outcome::InsufficientPoints { .. } => None,
        }
    }
}

/// Reconstructs the secret from the first `threshold` points by `x`.
///
/// The points are sorted by `x` and exactly the first `threshold` of them
/// are interpolated, so supplying more points than needed gives a
/// reproducible selection.
///
/// # Returns
///
/// - [`Outcome::Recovered`] with `f(0)` on success.
/// - [`Outcome::InsufficientPoints`] if fewer than `threshold` points are
///   given. This is logged as a warning and is not an error.
///
/// # Errors
///
/// - [`Error::InvalidThreshold`] if `threshold` is zero.
/// - [`Error::DuplicateAbscissa`] if two selected points share `x`.
/// - [`Error::NonIntegerResult`] if the selected points do not lie on an
///   integer polynomial.
#[instrument(level = "debug", skip(points), fields(points = points.len()))]
pub fn reconstruct(points: &[Point], threshold: usize) -> Result<Outcome, Error> {
    if threshold == 0 {
        return Err(Error::InvalidThreshold(threshold));
    }

    if points.len() < threshold {
        warn!(
            required = threshold,
            provided = points.len(),
            "not enough points to reconstruct the secret"
        );

        return Ok(Outcome::InsufficientPoints {
            required: threshold,
            provided: points.len(),
        });
    }

    let mut selected = points.to_vec();
    selected.sort_by_key(|p| p.x);
    selected.truncate(threshold);

    debug!(
        xs = ?selected.iter().map(|p| p.x).collect::<Vec<_>>(),
        "interpolating selected points"
    );

    interpolate_at_zero(&selected).map(Outcome::Recovered)
}
