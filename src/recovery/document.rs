//! Share documents.
//!
//! A share document is the JSON form in which a set of shares is handed to
//! the reconstruction. The threshold parameters live under `keys`, and every
//! other key that parses as an integer is a share whose `x` coordinate is
//! the key itself:
//!
//! ```json
//! {
//!     "keys": { "n": 4, "k": 3 },
//!     "1": { "base": "10", "value": "4" },
//!     "2": { "base": "2", "value": "111" },
//!     "3": { "base": "10", "value": "12" },
//!     "6": { "base": "4", "value": "213" }
//! }
//! ```
//!
//! `n`, `k` and `base` may be written either as JSON numbers or as numeric
//! strings. Keys that are not integers, and integer keys that do not hold an
//! object, are ignored.

use std::collections::BTreeMap;
use std::io::Read;

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use super::lagrange::{Outcome, Point, reconstruct};
use crate::encoding::radix;
use crate::errors::Error;

/// Threshold parameters of a share set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Keys {
    /// Total number of shares issued.
    pub n: usize,

    /// Number of shares required to reconstruct the secret.
    pub k: usize,
}

/// A share as written in a document, before decoding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedShare {
    pub x: i64,
    pub base: u32,
    pub value: String,
}

impl EncodedShare {
    /// Decodes the value into a point.
    ///
    /// # Errors
    ///
    /// Any error of [`radix::decode`].
    pub fn decode(&self) -> Result<Point, Error> {
        Ok(Point::new(self.x, radix::decode(&self.value, self.base)?))
    }
}

/// A parsed share document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShareDocument {
    pub keys: Keys,

    /// Shares in ascending `x` order.
    pub shares: Vec<EncodedShare>,
}

/// A number that may be written as a JSON number or a numeric string.
#[derive(Deserialize)]
#[serde(untagged)]
enum LooseNumber {
    Number(u64),
    Text(String),
}

impl LooseNumber {
    fn parse(self, field: &str) -> Result<u64, Error> {
        match self {
            LooseNumber::Number(n) => Ok(n),
            LooseNumber::Text(s) => s
                .trim()
                .parse()
                .map_err(|_| Error::Document(format!("{field} is not a number: {s:?}"))),
        }
    }
}

#[derive(Deserialize)]
struct RawKeys {
    n: LooseNumber,
    k: LooseNumber,
}

#[derive(Deserialize)]
struct RawShare {
    base: LooseNumber,
    value: String,
}

#[derive(Deserialize)]
struct RawDocument {
    keys: RawKeys,

    #[serde(flatten)]
    entries: BTreeMap<String, Value>,
}

impl ShareDocument {
    /// Parses a document from a JSON string.
    ///
    /// # Errors
    ///
    /// - [`Error::Json`] if the input is not valid JSON or lacks `keys`.
    /// - [`Error::Document`] if `n`, `k` or a share entry is malformed.
    #[instrument(level = "debug", skip_all)]
    pub fn from_json(input: &str) -> Result<Self, Error> {
        Self::from_raw(serde_json::from_str(input)?)
    }

    /// Parses a document from a reader.
    ///
    /// # Errors
    ///
    /// Same as [`ShareDocument::from_json`].
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, Error> {
        Self::from_raw(serde_json::from_reader(reader)?)
    }

    fn from_raw(raw: RawDocument) -> Result<Self, Error> {
        let keys = Keys {
            n: to_usize(raw.keys.n.parse("n")?, "n")?,
            k: to_usize(raw.keys.k.parse("k")?, "k")?,
        };

        let mut shares = Vec::with_capacity(raw.entries.len());

        for (key, value) in raw.entries {
            let Ok(x) = key.trim().parse::<i64>() else {
                debug!(key = %key, "ignoring non-share entry");
                continue;
            };

            if !value.is_object() {
                debug!(key = %key, "ignoring share entry that is not an object");
                continue;
            }

            let share: RawShare = serde_json::from_value(value)
                .map_err(|e| Error::Document(format!("share {key}: {e}")))?;

            let base = u32::try_from(share.base.parse("base")?)
                .map_err(|_| Error::Document(format!("share {key}: base out of range")))?;

            shares.push(EncodedShare {
                x,
                base,
                value: share.value,
            });
        }

        shares.sort_by_key(|s| s.x);

        if shares.len() != keys.n {
            warn!(
                declared = keys.n,
                found = shares.len(),
                "share count does not match n"
            );
        }

        debug!(n = keys.n, k = keys.k, shares = shares.len(), "parsed share document");

        Ok(Self { keys, shares })
    }

    /// Degree of the secret polynomial, `k - 1`.
    pub fn degree(&self) -> usize {
        self.keys.k.saturating_sub(1)
    }

    /// Decodes every share into a point, in ascending `x` order.
    ///
    /// # Errors
    ///
    /// The first decoding error encountered; a single bad share aborts the
    /// whole set.
    pub fn points(&self) -> Result<Vec<Point>, Error> {
        self.shares.iter().map(EncodedShare::decode).collect()
    }

    /// Decodes all shares and reconstructs the secret with threshold `k`.
    ///
    /// # Errors
    ///
    /// Any decoding error, or any error of [`reconstruct`].
    pub fn reconstruct(&self) -> Result<Outcome, Error> {
        reconstruct(&self.points()?, self.keys.k)
    }
}

fn to_usize(value: u64, field: &str) -> Result<usize, Error> {
    usize::try_from(value).map_err(|_| Error::Document(format!("{field} out of range")))
}
