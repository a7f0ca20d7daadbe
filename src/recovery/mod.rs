//! Secret recovery.
//!
//! This module recovers a shared secret from threshold shares, the points
//! of a polynomial whose constant term is the secret.
//!
//! ## Provided functionality
//!
//! - [`lagrange`]
//!   - Exact Lagrange interpolation at zero over arbitrary-precision
//!     integers.
//!   - Threshold-aware reconstruction that selects the first `k` points by
//!     `x` and reports a shortage of points as a soft outcome.
//!
//! - [`document`]
//!   - Parsing of JSON share documents (`keys.n`, `keys.k` and one entry per
//!     share, each a digit string in its own base).
//!
//! ## Scope
//!
//! Reconstruction is exact and deterministic. It does not provide:
//! - share generation or refresh
//! - authentication or integrity protection for shares
//! - detection of shares that lie on a different polynomial
//!
//! Shares from a different polynomial are only caught when they make the
//! final division inexact.

pub mod document;
pub mod lagrange;
