//! Decimal string parsing for `BigInt`
//!
//! Formatting is the `Display` impl in `core`; this is its inverse.

use std::str::FromStr;

use crate::errors::Error;
use crate::primitives::BigInt;
use crate::primitives::bigint::limbs::DIGITS;

/// Parses an optionally `-`-prefixed decimal string.
///
/// The empty string parses as zero. Leading zeros are accepted and `-0`
/// yields (non-negative) zero. Anything else that is not a run of ASCII
/// digits, including a lone `-` or a `+` sign, is rejected with
/// [`Error::InvalidFormat`].
impl FromStr for BigInt {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Ok(BigInt::zero());
        }

        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidFormat(s.to_owned()));
        }

        // Full 18-digit groups taken from the right, least significant first.
        let limbs = digits
            .as_bytes()
            .rchunks(DIGITS)
            .map(|chunk| {
                chunk
                    .iter()
                    .fold(0u64, |acc, &b| acc * 10 + u64::from(b - b'0'))
            })
            .collect();

        Ok(BigInt::from_parts(negative, limbs))
    }
}
