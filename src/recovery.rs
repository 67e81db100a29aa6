//! Secret reconstruction from a threshold set of encoded shares
//!
//! Shares `1..=k` are decoded into points `(i, y_i)` and interpolated at zero.
//! Entries beyond the threshold are ignored and never decoded.

use num_bigint::BigInt;
use tracing::{debug, info};

use crate::domain::{RecoveryConfig, TestCase};
use crate::error::RecoverError;
use crate::interpolation::{Point, interpolate_at_zero};

/// Decodes the points for shares `1..=k`
///
/// # Errors
/// Returns [`RecoverError::MissingShare`] for the first index without a share,
/// or the decoding error of the first malformed share
pub fn extract_points(test_case: &TestCase) -> Result<Vec<Point>, RecoverError> {
    let threshold = test_case.threshold();

    threshold
        .indices()
        .map(|index| -> Result<Point, RecoverError> {
            let share = test_case
                .share(index)
                .ok_or(RecoverError::MissingShare {
                    index,
                    threshold: *threshold,
                })?;

            let y = share.decode()?;
            debug!(index, base = share.base(), %y, "decoded share");

            Ok(Point::new(index, y))
        })
        .collect()
}

/// Reconstructs the secret `f(0)` of a test case
///
/// # Errors
/// Returns any decoding or interpolation error; see [`extract_points`] and
/// [`interpolate_at_zero`]
///
/// # Examples
///
/// ```rust
/// use secret_recover::domain::{Keys, RecoveryConfig, Share, ShareIndex, TestCase, Threshold};
/// use secret_recover::reconstruct_secret;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let keys = Keys::new(Some(3), Threshold::new(3)?);
/// let test_case = TestCase::new(
///     keys,
///     [
///         Share::new(ShareIndex::new(1)?, 10, "4"),
///         Share::new(ShareIndex::new(2)?, 2, "111"),
///         Share::new(ShareIndex::new(3)?, 10, "12"),
///     ],
/// );
///
/// let secret = reconstruct_secret(&test_case, RecoveryConfig::default())?;
/// assert_eq!(secret.to_string(), "3");
/// # Ok(())
/// # }
/// ```
pub fn reconstruct_secret(
    test_case: &TestCase,
    config: RecoveryConfig,
) -> Result<BigInt, RecoverError> {
    let points = extract_points(test_case)?;
    let secret = interpolate_at_zero(&points, config.division())?;

    info!(threshold = points.len(), "reconstructed secret");
    Ok(secret)
}
