//! Domain types for secret reconstruction
//!
//! This module contains validated newtypes and input records:
//! - [`Threshold`] - Shares required for reconstruction (k >= 1)
//! - [`ShareIndex`] - 1-based share identifier, also the share's x-coordinate
//! - [`Radix`] - Base of an encoded share value (2..=36)
//! - [`TestCase`] - Keys plus encoded shares, as read from JSON
//! - [`RecoveryConfig`] - Per-reconstruction settings

mod config;
mod radix;
mod share_index;
mod test_case;
mod threshold;

pub use config::{DivisionPolicy, RecoveryConfig};
pub use radix::Radix;
pub use share_index::ShareIndex;
pub use test_case::{Keys, Share, TestCase};
pub use threshold::Threshold;
