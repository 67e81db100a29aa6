//! Threshold secret reconstruction over exact integers
//!
//! Shares carry y-values encoded in bases 2..=36. They are decoded with
//! [`codec::decode`] and the secret `f(0)` is recovered by exact Lagrange
//! interpolation in [`interpolation::interpolate_at_zero`]. No floating point
//! is involved anywhere, so secrets hundreds of digits long come out exact.

#[cfg(feature = "cli")]
pub mod cli;
pub mod codec;
pub mod commands;
pub mod domain;
pub mod error;
pub mod interpolation;
pub mod recovery;

pub use crate::error::RecoverError;
pub use crate::interpolation::{Point, interpolate_at_zero};
pub use crate::recovery::{extract_points, reconstruct_secret};
