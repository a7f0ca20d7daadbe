//! Arithmetic operations for `BigInt`
//!
//! Operator traits are implemented on references (`&a + &b`) and forwarded
//! for owned operands, so callers can mix both without cloning. Signs are
//! resolved here; magnitude work is delegated to the `limbs` helpers.
//!
//! Division is exposed through [`BigInt::div_rem`] rather than the `Div` and
//! `Rem` operators because division by zero is reported as an error instead
//! of a panic.

use std::cmp::Ordering;
use std::ops::{Add, Mul, Neg, Sub};

use super::core::BigInt;
use super::limbs;
use crate::errors::Error;

/// Implements a binary operator for every owned/borrowed operand combination
/// by forwarding to the `&BigInt op &BigInt` implementation.
macro_rules! forward_binop {
    ($imp:ident, $method:ident) => {
        impl $imp<BigInt> for BigInt {
            type Output = BigInt;

            #[inline]
            fn $method(self, rhs: BigInt) -> BigInt {
                (&self).$method(&rhs)
            }
        }

        impl $imp<&BigInt> for BigInt {
            type Output = BigInt;

            #[inline]
            fn $method(self, rhs: &BigInt) -> BigInt {
                (&self).$method(rhs)
            }
        }

        impl $imp<BigInt> for &BigInt {
            type Output = BigInt;

            #[inline]
            fn $method(self, rhs: BigInt) -> BigInt {
                self.$method(&rhs)
            }
        }
    };
}

/// Exact addition.
///
/// Equal signs add magnitudes. Opposite signs subtract the smaller magnitude
/// from the larger one and keep the sign of the larger.
impl Add<&BigInt> for &BigInt {
    type Output = BigInt;

    fn add(self, rhs: &BigInt) -> BigInt {
        if self.negative == rhs.negative {
            return BigInt::from_parts(self.negative, limbs::add(&self.limbs, &rhs.limbs));
        }

        match limbs::cmp(&self.limbs, &rhs.limbs) {
            Ordering::Less => BigInt::from_parts(rhs.negative, limbs::sub(&rhs.limbs, &self.limbs)),
            _ => BigInt::from_parts(self.negative, limbs::sub(&self.limbs, &rhs.limbs)),
        }
    }
}

/// Exact subtraction, `a - b = a + (-b)`.
impl Sub<&BigInt> for &BigInt {
    type Output = BigInt;

    fn sub(self, rhs: &BigInt) -> BigInt {
        self + &(-rhs)
    }
}

/// Exact schoolbook multiplication.
impl Mul<&BigInt> for &BigInt {
    type Output = BigInt;

    fn mul(self, rhs: &BigInt) -> BigInt {
        BigInt::from_parts(
            self.negative != rhs.negative,
            limbs::mul(&self.limbs, &rhs.limbs),
        )
    }
}

forward_binop!(Add, add);
forward_binop!(Sub, sub);
forward_binop!(Mul, mul);

/// Negation. Zero stays non-negative.
impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        BigInt::from_parts(!self.negative, self.limbs.clone())
    }
}

impl Neg for BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        BigInt::from_parts(!self.negative, self.limbs)
    }
}

impl BigInt {
    /// Truncating division with remainder.
    ///
    /// Returns `(q, r)` with `self = q * divisor + r`, `|r| < |divisor|`, the
    /// quotient rounded toward zero and `r` carrying the sign of `self`.
    ///
    /// # Errors
    ///
    /// [`Error::DivisionByZero`] if `divisor` is zero.
    pub fn div_rem(&self, divisor: &BigInt) -> Result<(BigInt, BigInt), Error> {
        if divisor.is_zero() {
            return Err(Error::DivisionByZero);
        }

        let (q, r) = limbs::div_rem(&self.limbs, &divisor.limbs);

        Ok((
            BigInt::from_parts(self.negative != divisor.negative, q),
            BigInt::from_parts(self.negative, r),
        ))
    }

    /// Exact division: fails unless `divisor` divides `self` evenly.
    ///
    /// # Errors
    ///
    /// - [`Error::DivisionByZero`] if `divisor` is zero.
    /// - [`Error::NonIntegerResult`] if the remainder is non-zero.
    pub fn div_exact(&self, divisor: &BigInt) -> Result<BigInt, Error> {
        let (q, r) = self.div_rem(divisor)?;

        if !r.is_zero() {
            return Err(Error::NonIntegerResult {
                numerator: self.to_string(),
                denominator: divisor.to_string(),
            });
        }

        Ok(q)
    }

    /// Greatest common divisor of the magnitudes (Euclid).
    ///
    /// The result is non-negative; `gcd(0, 0)` is zero.
    pub fn gcd(&self, other: &BigInt) -> BigInt {
        let mut a = self.limbs.clone();
        let mut b = other.limbs.clone();

        while !limbs::is_zero(&b) {
            let (_, r) = limbs::div_rem(&a, &b);
            a = b;
            b = r;
        }

        BigInt::from_parts(false, a)
    }

    /// Truncated quotient by a divisor the caller knows to be non-zero.
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is zero.
    pub(crate) fn quotient_unchecked(&self, divisor: &BigInt) -> BigInt {
        let (q, _) = limbs::div_rem(&self.limbs, &divisor.limbs);
        BigInt::from_parts(self.negative != divisor.negative, q)
    }

    /// `self * m` for a single-limb factor, used by radix decoding.
    pub(crate) fn mul_small(&self, m: u64) -> BigInt {
        BigInt::from_parts(self.negative, limbs::mul_small(&self.limbs, m))
    }

    /// `|self| + m` for a non-negative `self` and a single-limb addend.
    pub(crate) fn add_small(&self, m: u64) -> BigInt {
        debug_assert!(!self.negative);
        BigInt::from_parts(false, limbs::add_small(&self.limbs, m))
    }
}
