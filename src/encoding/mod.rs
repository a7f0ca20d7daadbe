//! Textual encodings of share values.
//!
//! - `radix`: digit strings in bases 2 to 36, decoded exactly into
//!   [`BigInt`](crate::primitives::BigInt).

pub mod radix;
