//! `Radix` newtype for share value encodings

use crate::error::RecoverError;

/// Numeric base of an encoded share value (2..=36)
///
/// The upper bound is the size of the alphanumeric digit alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Radix(u32);

impl Radix {
    /// Smallest supported base
    pub const MIN: u32 = 2;

    /// Largest supported base (`0-9` plus `a-z`)
    pub const MAX: u32 = 36;

    /// Creates a new radix
    ///
    /// # Errors
    /// Returns [`RecoverError::InvalidBase`] if base is outside 2..=36
    ///
    /// # Examples
    ///
    /// ```rust
    /// use secret_recover::domain::Radix;
    ///
    /// let hex = Radix::new(16).unwrap();
    /// assert_eq!(*hex, 16);
    ///
    /// assert!(Radix::new(1).is_err());
    /// assert!(Radix::new(37).is_err());
    /// ```
    pub fn new(base: u32) -> Result<Self, RecoverError> {
        if !(Self::MIN..=Self::MAX).contains(&base) {
            return Err(RecoverError::InvalidBase {
                base: base.to_string(),
            });
        }
        Ok(Self(base))
    }
}

impl std::ops::Deref for Radix {
    type Target = u32;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for Radix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
