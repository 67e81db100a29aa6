//! `ShareIndex` newtype for secret reconstruction

use std::str::FromStr;

use crate::error::RecoverError;

/// Share index (1-based)
///
/// The index doubles as the share's x-coordinate on the secret polynomial,
/// so 0 is rejected: it is where the secret itself lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShareIndex(u32);

impl ShareIndex {
    /// Creates a new share index
    ///
    /// # Errors
    /// Returns [`RecoverError::InvalidShareIndex`] if index is 0
    ///
    /// # Examples
    ///
    /// ```rust
    /// use secret_recover::domain::ShareIndex;
    ///
    /// let index = ShareIndex::new(1).unwrap();
    /// assert_eq!(*index, 1);
    ///
    /// // Invalid: index 0 is the secret's own coordinate
    /// assert!(ShareIndex::new(0).is_err());
    /// ```
    pub fn new(value: u32) -> Result<Self, RecoverError> {
        if value == 0 {
            return Err(RecoverError::InvalidShareIndex {
                index: value.to_string(),
            });
        }
        Ok(Self(value))
    }
}

impl FromStr for ShareIndex {
    type Err = RecoverError;

    /// Parses a JSON object key such as `"3"` into an index
    ///
    /// Only the canonical decimal form is accepted, so `"01"`, `" 1"` and
    /// `"+1"` never alias index 1.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || RecoverError::InvalidShareIndex {
            index: s.to_string(),
        };

        let value: u32 = s.parse().map_err(|_| invalid())?;
        if value.to_string() != s {
            return Err(invalid());
        }
        Self::new(value)
    }
}

impl std::ops::Deref for ShareIndex {
    type Target = u32;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for ShareIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
