//! Exact rational numbers over `BigInt`
//!
//! `Rational` is the accumulator used by Lagrange interpolation: basis terms
//! that do not divide evenly on their own are summed as fractions and only
//! the final sum is turned back into an integer.
//!
//! Every constructor and operation reduces the fraction to lowest terms and
//! moves the sign into the numerator. Without the reduction, repeated
//! additions make numerator and denominator grow combinatorially in the
//! number of terms.

use std::fmt::{Display, Formatter};
use std::ops::{Add, Mul, Neg};

use crate::errors::Error;
use crate::primitives::BigInt;

/// Exact rational number `numerator / denominator`.
///
/// For a non-zero denominator the value is always in lowest terms with a
/// positive denominator, so structural equality is numeric equality.
///
/// A zero denominator is accepted by [`Rational::new`] and left untouched;
/// it is only rejected when the value is turned back into an integer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rational {
    numerator: BigInt,
    denominator: BigInt,
}

impl Rational {
    /// Creates `numerator / denominator`, reduced to lowest terms.
    pub fn new(numerator: BigInt, denominator: BigInt) -> Self {
        Self {
            numerator,
            denominator,
        }
        .reduced()
    }

    /// The value zero (`0/1`).
    pub fn zero() -> Self {
        Self::from(BigInt::zero())
    }

    pub fn numerator(&self) -> &BigInt {
        &self.numerator
    }

    pub fn denominator(&self) -> &BigInt {
        &self.denominator
    }

    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    /// Whether the value is a whole number (denominator one after reduction).
    pub fn is_integer(&self) -> bool {
        self.denominator == BigInt::one()
    }

    /// Converts the value to an integer by exact division.
    ///
    /// # Errors
    ///
    /// - [`Error::DivisionByZero`] if the denominator is zero.
    /// - [`Error::NonIntegerResult`] if the division leaves a remainder.
    pub fn into_integer(self) -> Result<BigInt, Error> {
        self.numerator.div_exact(&self.denominator)
    }

    fn reduced(self) -> Self {
        let Self {
            mut numerator,
            mut denominator,
        } = self;

        if denominator.is_zero() {
            return Self {
                numerator,
                denominator,
            };
        }

        if numerator.is_zero() {
            return Self {
                numerator,
                denominator: BigInt::one(),
            };
        }

        if denominator.is_negative() {
            numerator = -numerator;
            denominator = -denominator;
        }

        let g = numerator.gcd(&denominator);
        if g != BigInt::one() {
            numerator = numerator.quotient_unchecked(&g);
            denominator = denominator.quotient_unchecked(&g);
        }

        Self {
            numerator,
            denominator,
        }
    }
}

impl From<BigInt> for Rational {
    fn from(value: BigInt) -> Self {
        Self {
            numerator: value,
            denominator: BigInt::one(),
        }
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::zero()
    }
}

/// Cross-multiplied sum `(a·d + c·b) / (b·d)`, reduced.
impl Add<&Rational> for &Rational {
    type Output = Rational;

    fn add(self, rhs: &Rational) -> Rational {
        if self.denominator == rhs.denominator {
            return Rational::new(&self.numerator + &rhs.numerator, self.denominator.clone());
        }

        Rational::new(
            &self.numerator * &rhs.denominator + &rhs.numerator * &self.denominator,
            &self.denominator * &rhs.denominator,
        )
    }
}

impl Add for Rational {
    type Output = Rational;

    fn add(self, rhs: Rational) -> Rational {
        &self + &rhs
    }
}

/// Product `(a·c) / (b·d)`, reduced.
impl Mul<&Rational> for &Rational {
    type Output = Rational;

    fn mul(self, rhs: &Rational) -> Rational {
        Rational::new(
            &self.numerator * &rhs.numerator,
            &self.denominator * &rhs.denominator,
        )
    }
}

impl Mul for Rational {
    type Output = Rational;

    fn mul(self, rhs: Rational) -> Rational {
        &self * &rhs
    }
}

impl Neg for Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational {
            numerator: -self.numerator,
            denominator: self.denominator,
        }
    }
}

impl Display for Rational {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}
