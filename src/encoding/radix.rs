//! Base-N digit strings
//!
//! Share values are transported as digit strings in an arbitrary base
//! between 2 and 36. Digits `0`–`9` map to 0–9 and letters map to 10–35
//! regardless of case, so `"ff"` and `"FF"` decode to the same value.
//!
//! Decoding is exact: the value is accumulated as a [`BigInt`], so strings of
//! any length are supported.

use crate::errors::Error;
use crate::primitives::BigInt;

/// Smallest supported base.
pub const MIN_BASE: u32 = 2;

/// Largest supported base (`0-9` plus `a-z`).
pub const MAX_BASE: u32 = 36;

/// Maps a single character to its digit value, if it is alphanumeric ASCII.
#[inline]
pub fn digit_value(c: char) -> Option<u32> {
    c.to_digit(MAX_BASE)
}

/// Decodes `digits`, written in `base`, into a `BigInt`.
///
/// The string is read most significant digit first using Horner's rule,
/// `acc = acc · base + d`, which yields the same value as summing
/// `d_i · base^i` from the right.
///
/// # Errors
///
/// - [`Error::InvalidBase`] if `base` is outside `2..=36`.
/// - [`Error::InvalidFormat`] if `digits` is empty.
/// - [`Error::InvalidDigit`] if a character is not a digit below `base`.
///
/// # Examples
///
/// ```
/// use polysecret::encoding::radix::decode;
///
/// assert_eq!(decode("FF", 16).unwrap().to_string(), "255");
/// assert_eq!(decode("1010", 2).unwrap().to_string(), "10");
/// ```
pub fn decode(digits: &str, base: u32) -> Result<BigInt, Error> {
    if !(MIN_BASE..=MAX_BASE).contains(&base) {
        return Err(Error::InvalidBase(base));
    }

    if digits.is_empty() {
        return Err(Error::InvalidFormat(digits.to_owned()));
    }

    digits.chars().try_fold(BigInt::zero(), |acc, c| -> Result<BigInt, Error> {
        let value = digit_value(c)
            .filter(|&v| v < base)
            .ok_or(Error::InvalidDigit { digit: c, base })?;

        Ok(acc.mul_small(u64::from(base)).add_small(u64::from(value)))
    })
}

/// Encodes a non-negative `value` as a lowercase digit string in `base`.
///
/// Negative values are prefixed with `-`. This is the inverse of [`decode`]
/// and is mainly used to produce share documents.
///
/// # Errors
///
/// [`Error::InvalidBase`] if `base` is outside `2..=36`.
pub fn encode(value: &BigInt, base: u32) -> Result<String, Error> {
    if !(MIN_BASE..=MAX_BASE).contains(&base) {
        return Err(Error::InvalidBase(base));
    }

    if value.is_zero() {
        return Ok("0".to_owned());
    }

    let divisor = BigInt::from(base);
    let mut rest = value.abs();
    let mut out = Vec::new();

    while !rest.is_zero() {
        let (q, r) = rest.div_rem(&divisor)?;

        // r < base, so it is held entirely in the lowest limb.
        let digit = r.limbs[0] as u32;
        out.push(std::char::from_digit(digit, base).ok_or(Error::InvalidBase(base))?);
        rest = q;
    }

    if value.is_negative() {
        out.push('-');
    }

    Ok(out.iter().rev().collect())
}
