//! Conversions between `BigInt` and native integer types
//!
//! Widening conversions (`From<iN>` / `From<uN>`) are exact. Narrowing back
//! to `i64` or `u64` is available in two flavours: a checked `TryFrom`
//! that fails when the value does not fit, and
//! [`BigInt::to_i64_saturating`], which clamps to the target range.

use crate::primitives::BigInt;
use crate::primitives::bigint::limbs::RADIX;

/// Splits a non-negative magnitude into radix-`10^18` limbs.
fn limbs_of(mut magnitude: u128) -> Vec<u64> {
    let mut out = Vec::with_capacity(3);

    loop {
        out.push((magnitude % RADIX as u128) as u64);
        magnitude /= RADIX as u128;

        if magnitude == 0 {
            return out;
        }
    }
}

macro_rules! from_signed {
    ($($t:ty),*) => {$(
        impl From<$t> for BigInt {
            fn from(value: $t) -> Self {
                BigInt::from_parts(value < 0, limbs_of(value.unsigned_abs() as u128))
            }
        }
    )*};
}

macro_rules! from_unsigned {
    ($($t:ty),*) => {$(
        impl From<$t> for BigInt {
            fn from(value: $t) -> Self {
                BigInt::from_parts(false, limbs_of(value as u128))
            }
        }
    )*};
}

from_signed!(i8, i16, i32, i64, i128, isize);
from_unsigned!(u8, u16, u32, u64, u128, usize);

impl BigInt {
    /// Magnitude as a `u128`, or `None` if it does not fit.
    fn magnitude_u128(&self) -> Option<u128> {
        self.limbs
            .iter()
            .rev()
            .try_fold(0u128, |acc, &limb| {
                acc.checked_mul(RADIX as u128)?.checked_add(limb as u128)
            })
    }

    /// Converts to `i64`, clamping to `i64::MIN` / `i64::MAX` on overflow.
    ///
    /// This is a lossy conversion for values outside the `i64` range; use
    /// `i64::try_from(&value)` to detect that case instead.
    pub fn to_i64_saturating(&self) -> i64 {
        i64::try_from(self).unwrap_or(if self.negative { i64::MIN } else { i64::MAX })
    }
}

/// Attempts to convert a `BigInt` into an `i64`.
///
/// Fails if the value is outside `i64::MIN..=i64::MAX`.
impl TryFrom<&BigInt> for i64 {
    type Error = ();

    fn try_from(value: &BigInt) -> Result<Self, Self::Error> {
        let magnitude = i128::try_from(value.magnitude_u128().ok_or(())?).map_err(|_| ())?;
        let signed = if value.negative { -magnitude } else { magnitude };

        i64::try_from(signed).map_err(|_| ())
    }
}

/// Attempts to convert a `BigInt` into a `u64`.
///
/// Fails for negative values and for values above `u64::MAX`.
impl TryFrom<&BigInt> for u64 {
    type Error = ();

    fn try_from(value: &BigInt) -> Result<Self, Self::Error> {
        if value.negative {
            return Err(());
        }

        u64::try_from(value.magnitude_u128().ok_or(())?).map_err(|_| ())
    }
}
