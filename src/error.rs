//! Error taxonomy for share decoding and secret reconstruction

use thiserror::Error;

/// Failures raised while decoding shares or interpolating the secret
///
/// Every variant is detected at the point of violation and returned to the
/// caller; no partial secret is ever produced alongside an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecoverError {
    #[error("invalid base '{base}': must be an integer between 2 and 36")]
    InvalidBase { base: String },

    #[error("invalid digit '{digit}' at position {position} for base {base}")]
    InvalidDigit {
        digit: char,
        position: usize,
        base: u32,
    },

    #[error("share value is empty")]
    EmptyValue,

    #[error("share index must be a positive integer (got {index})")]
    InvalidShareIndex { index: String },

    #[error("malformed share {index}: {reason}")]
    MalformedShare { index: u32, reason: String },

    #[error("missing share {index} (threshold requires indices 1..={threshold})")]
    MissingShare { index: u32, threshold: u32 },

    #[error("insufficient points: need at least {required}, got {actual}")]
    InsufficientPoints { required: usize, actual: usize },

    #[error("duplicate x-coordinate {x}: interpolation denominator is zero")]
    DuplicatePoint { x: String },

    #[error(
        "inexact interpolation: f(0) = {numerator}/{denominator} is not an integer \
         (shares do not lie on one integer polynomial)"
    )]
    Division {
        numerator: String,
        denominator: String,
    },
}
