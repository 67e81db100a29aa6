//! Test-case records: the threshold keys plus the encoded shares

use std::collections::BTreeMap;

use num_bigint::BigUint;
use serde::Deserialize;
use serde_json::Value;

use super::{Radix, ShareIndex, Threshold};
use crate::codec;
use crate::error::RecoverError;

/// Threshold parameters of a test case
///
/// `n` is the total number of shares that were handed out. It is informational
/// only: reconstruction reads exactly `k` shares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keys {
    n: Option<u32>,
    k: Threshold,
}

impl Keys {
    #[must_use]
    pub fn new(n: Option<u32>, k: Threshold) -> Self {
        Self { n, k }
    }

    /// Gets the declared share count, if any
    #[must_use]
    pub fn share_count(&self) -> Option<u32> {
        self.n
    }

    /// Gets the threshold
    #[must_use]
    pub fn threshold(&self) -> Threshold {
        self.k
    }
}

/// One encoded share: a point on the secret polynomial with its y-value in `base`
///
/// The base is kept as the text it was read from; it is parsed and validated
/// when the share is decoded, so malformed entries beyond the threshold never
/// abort a reconstruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Share {
    index: ShareIndex,
    base: String,
    digits: String,
}

impl Share {
    pub fn new(index: ShareIndex, base: u32, digits: impl Into<String>) -> Self {
        Self::with_raw_base(index, base.to_string(), digits)
    }

    /// Creates a share whose base has not been parsed yet
    pub fn with_raw_base(
        index: ShareIndex,
        base: impl Into<String>,
        digits: impl Into<String>,
    ) -> Self {
        Self {
            index,
            base: base.into(),
            digits: digits.into(),
        }
    }

    #[must_use]
    pub fn index(&self) -> ShareIndex {
        self.index
    }

    /// Gets the base as it was read
    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    #[must_use]
    pub fn digits(&self) -> &str {
        &self.digits
    }

    /// Decodes the share's y-value
    ///
    /// # Errors
    /// Returns an error if the base is not an integer in 2..=36 or a digit is
    /// invalid for it
    pub fn decode(&self) -> Result<BigUint, RecoverError> {
        let base: u32 = self.base.parse().map_err(|_| RecoverError::InvalidBase {
            base: self.base.clone(),
        })?;
        let radix = Radix::new(base)?;
        codec::decode(&self.digits, radix)
    }
}

/// A complete reconstruction input: keys plus shares keyed by index
///
/// Deserializes from the record shape
/// `{"keys": {"n": 4, "k": 3}, "1": {"base": "10", "value": "4"}, ...}`
/// where `base` may be a JSON string or integer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawTestCase")]
pub struct TestCase {
    keys: Keys,
    shares: BTreeMap<ShareIndex, Share>,
}

impl TestCase {
    /// Builds a test case from already-parsed shares
    ///
    /// A later share with the same index replaces an earlier one.
    pub fn new(keys: Keys, shares: impl IntoIterator<Item = Share>) -> Self {
        let shares = shares
            .into_iter()
            .map(|share| (share.index(), share))
            .collect();
        Self { keys, shares }
    }

    #[must_use]
    pub fn keys(&self) -> Keys {
        self.keys
    }

    #[must_use]
    pub fn threshold(&self) -> Threshold {
        self.keys.threshold()
    }

    /// Looks up the share declared under `index`
    #[must_use]
    pub fn share(&self, index: u32) -> Option<&Share> {
        ShareIndex::new(index)
            .ok()
            .and_then(|index| self.shares.get(&index))
    }

    /// Iterates all declared shares in index order, including those beyond `k`
    pub fn shares(&self) -> impl Iterator<Item = &Share> {
        self.shares.values()
    }
}

#[derive(Deserialize)]
struct RawKeys {
    #[serde(default)]
    n: Option<u32>,
    k: u32,
}

#[derive(Deserialize)]
struct RawShare {
    base: Value,
    value: String,
}

#[derive(Deserialize)]
struct RawTestCase {
    keys: RawKeys,
    #[serde(flatten)]
    entries: BTreeMap<String, Value>,
}

/// Renders a JSON base as text; `"16"` and `16` both become `16`
fn base_text(base: Value) -> String {
    match base {
        Value::String(text) => text,
        other => other.to_string(),
    }
}

impl TryFrom<RawTestCase> for TestCase {
    type Error = RecoverError;

    fn try_from(raw: RawTestCase) -> Result<Self, Self::Error> {
        let threshold = Threshold::new(raw.keys.k)?;
        let keys = Keys::new(raw.keys.n, threshold);

        if let Some(n) = raw.keys.n
            && n < *threshold
        {
            tracing::warn!("threshold k={threshold} exceeds declared share count n={n}");
        }

        let mut shares = Vec::new();
        for (key, entry) in raw.entries {
            let Ok(index) = key.parse::<ShareIndex>() else {
                tracing::debug!(%key, "skipping entry that is not a share index");
                continue;
            };

            match serde_json::from_value::<RawShare>(entry) {
                Ok(share) => {
                    shares.push(Share::with_raw_base(index, base_text(share.base), share.value));
                }
                Err(err) if *index <= *threshold => {
                    return Err(RecoverError::MalformedShare {
                        index: *index,
                        reason: err.to_string(),
                    });
                }
                Err(err) => {
                    tracing::debug!(%index, %err, "skipping malformed share beyond threshold");
                }
            }
        }

        Ok(Self::new(keys, shares))
    }
}
