//! Exact Lagrange interpolation at zero.
//!
//! For points `(x_i, y_i)` the constant term of the interpolating polynomial
//! is
//!
//! ```text
//! f(0) = Σ_i  y_i · Π_{j≠i} (0 − x_j) / (x_i − x_j)
//! ```
//!
//! Each basis product is built as an integer numerator and denominator,
//! the term is folded into a reduced [`Rational`] accumulator, and the sum is
//! turned back into an integer by a single exact division at the end. No
//! step rounds or truncates.
//!
//! This module performs no threshold handling; callers pass exactly the
//! points to interpolate.

use std::collections::HashSet;

use tracing::{instrument, trace};

use super::core::Point;
use crate::errors::Error;
use crate::primitives::{BigInt, Rational};

/// Computes `f(0)` for the unique polynomial of degree `points.len() - 1`
/// through `points`.
///
/// The result depends only on the set of points, not their order. An empty
/// slice interpolates to zero.
///
/// # Preconditions
///
/// All `x` values must be distinct.
///
/// # Errors
///
/// - [`Error::DuplicateAbscissa`] if two points share an `x` value.
/// - [`Error::NonIntegerResult`] if the sum is not an integer, which means
///   the points do not come from an integer polynomial.
#[instrument(level = "trace", skip_all, fields(points = points.len()))]
pub fn interpolate_at_zero(points: &[Point]) -> Result<BigInt, Error> {
    ensure_distinct(points)?;

    let mut acc = Rational::zero();

    for (i, pi) in points.iter().enumerate() {
        let xi = BigInt::from(pi.x);

        let mut num = BigInt::one();
        let mut den = BigInt::one();

        for (j, pj) in points.iter().enumerate() {
            if i != j {
                let xj = BigInt::from(pj.x);

                num = &num * &(-&xj);
                den = &den * &(&xi - &xj);
            }
        }

        let term = Rational::new(&pi.y * &num, den);
        trace!(i, x = pi.x, %term, "basis term");

        acc = &acc + &term;
    }

    acc.into_integer()
}

fn ensure_distinct(points: &[Point]) -> Result<(), Error> {
    let mut seen = HashSet::with_capacity(points.len());

    for p in points {
        if !seen.insert(p.x) {
            return Err(Error::DuplicateAbscissa { x: p.x });
        }
    }

    Ok(())
}
