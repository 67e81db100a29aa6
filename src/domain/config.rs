//! Reconstruction settings

/// How an inexact per-term interpolation division is handled
///
/// Points sampled from an integer polynomial at `x = 1..=k` always divide
/// exactly. Anything else means the shares do not lie on one polynomial.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DivisionPolicy {
    /// Reject the reconstruction with [`crate::RecoverError::Division`]
    ///
    /// Exactness is checked on the total `f(0)`, not per term: a term's
    /// remainder is carried as an exact fraction and only a non-integral sum
    /// is rejected. For `x = 1..=k` every term divides exactly, so the two
    /// checks agree.
    #[default]
    Strict,
    /// Truncate toward zero and keep going, logging a warning
    Truncate,
}

/// Settings applied to a single reconstruction
///
/// # Examples
///
/// ```rust
/// use secret_recover::domain::{DivisionPolicy, RecoveryConfig};
///
/// // Strict exactness is the default
/// assert_eq!(RecoveryConfig::default().division(), DivisionPolicy::Strict);
///
/// let lenient = RecoveryConfig::new(DivisionPolicy::Truncate);
/// assert_eq!(lenient.division(), DivisionPolicy::Truncate);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecoveryConfig {
    division: DivisionPolicy,
}

impl RecoveryConfig {
    #[must_use]
    pub fn new(division: DivisionPolicy) -> Self {
        Self { division }
    }

    /// Gets the division policy
    #[must_use]
    pub fn division(&self) -> DivisionPolicy {
        self.division
    }
}
