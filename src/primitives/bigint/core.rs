//! Arbitrary-precision signed integer
//!
//! This module defines `BigInt`, the exact integer type every other part of
//! the crate computes with. Unlike the fixed-size primitives it grows as
//! needed, so sums and products never overflow.
//!
//! The representation is a sign flag plus a vector of decimal limbs in radix
//! `10^18`, least significant limb first. A decimal radix keeps formatting
//! trivial (each limb prints as a zero-padded 18-digit group) while the
//! product of two limbs still fits a `u128` carry accumulator.

use std::cmp::Ordering;
use std::fmt::{Display, Formatter, Result};

use super::limbs;

/// Arbitrary-precision signed integer.
///
/// Values are immutable: every operation returns a new `BigInt`.
///
/// The representation is always canonical. There are no most-significant
/// zero limbs, and zero is the single limb `0` with a non-negative sign, so
/// structural equality is numeric equality.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BigInt {
    pub(crate) negative: bool,
    pub(crate) limbs: Vec<u64>,
}

impl BigInt {
    /// Radix of a single limb (`10^18`).
    pub const LIMB_RADIX: u64 = limbs::RADIX;

    /// Decimal digits per limb.
    pub const LIMB_DIGITS: usize = limbs::DIGITS;

    /// The value zero.
    pub fn zero() -> Self {
        Self {
            negative: false,
            limbs: vec![0],
        }
    }

    /// The value one.
    pub fn one() -> Self {
        Self {
            negative: false,
            limbs: vec![1],
        }
    }

    /// Builds a value from a sign and raw limbs, restoring the canonical form.
    pub(crate) fn from_parts(negative: bool, mut limbs: Vec<u64>) -> Self {
        limbs::trim(&mut limbs);
        let negative = negative && !limbs::is_zero(&limbs);

        Self { negative, limbs }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        limbs::is_zero(&self.limbs)
    }

    /// Returns `true` for strictly negative values. Zero is never negative.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        !self.negative && !self.is_zero()
    }

    /// Absolute value.
    pub fn abs(&self) -> Self {
        Self {
            negative: false,
            limbs: self.limbs.clone(),
        }
    }

    /// Number of limbs in the magnitude.
    pub fn limb_len(&self) -> usize {
        self.limbs.len()
    }

    /// Compares magnitudes, ignoring signs.
    pub fn cmp_magnitude(&self, other: &Self) -> Ordering {
        limbs::cmp(&self.limbs, &other.limbs)
    }
}

impl Default for BigInt {
    fn default() -> Self {
        Self::zero()
    }
}

/// Total numeric order.
///
/// Signs are compared first (negative < non-negative), then magnitudes by
/// limb count and from the most significant limb down. For two negative
/// values the magnitude order is inverted.
impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => limbs::cmp(&self.limbs, &other.limbs),
            (true, true) => limbs::cmp(&other.limbs, &self.limbs),
        }
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for BigInt {
    /// Formats the value in canonical decimal.
    ///
    /// The most significant limb is printed as is and every following limb
    /// is zero-padded to 18 digits. A leading `-` appears only for negative
    /// values.
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        if self.negative {
            f.write_str("-")?;
        }

        let mut limbs = self.limbs.iter().rev();

        if let Some(top) = limbs.next() {
            write!(f, "{top}")?;
        }

        for limb in limbs {
            write!(f, "{limb:0width$}", width = Self::LIMB_DIGITS)?;
        }

        Ok(())
    }
}
