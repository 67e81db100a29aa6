//! Threshold newtype for secret reconstruction

use crate::error::RecoverError;

/// Number of shares required to reconstruct the secret (k >= 1)
///
/// Invariant: threshold >= 1 (enforced at construction)
/// A threshold of 1 is the degenerate constant polynomial: the single share value is the secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Threshold(u32);

impl Threshold {
    /// Creates a new threshold, returning an error if value is 0
    ///
    /// # Errors
    /// Returns [`RecoverError::InsufficientPoints`] if the threshold is 0
    ///
    /// # Examples
    ///
    /// ```rust
    /// use secret_recover::domain::Threshold;
    ///
    /// let threshold = Threshold::new(3).unwrap();
    /// assert_eq!(*threshold, 3);
    ///
    /// // k = 1 is allowed: the share value is the secret
    /// assert!(Threshold::new(1).is_ok());
    ///
    /// // Invalid: at least one share is required
    /// assert!(Threshold::new(0).is_err());
    /// ```
    pub fn new(value: u32) -> Result<Self, RecoverError> {
        if value == 0 {
            return Err(RecoverError::InsufficientPoints {
                required: 1,
                actual: 0,
            });
        }
        Ok(Self(value))
    }

    /// Share indices `1..=k` that take part in reconstruction
    pub fn indices(self) -> impl Iterator<Item = u32> {
        1..=self.0
    }
}

impl std::ops::Deref for Threshold {
    type Target = u32;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for Threshold {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
