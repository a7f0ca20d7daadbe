//! Conversion utilities for `BigInt`
//!
//! - `int`: exact widening from native integers, checked and saturating
//!   narrowing back.
//! - `decimal`: decimal string parsing.

mod decimal;
mod int;
