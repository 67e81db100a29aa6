//! Positional numeral codec for share values
//!
//! Share y-values arrive as digit strings in an arbitrary base between 2 and 36,
//! using the alphanumeric alphabet `0-9` followed by `a-z` (case-insensitive).
//! Decoding is exact: values are accumulated in an unbounded [`BigUint`], so
//! numerals far beyond 64 bits decode without truncation.
//!
//! # Examples
//!
//! ```rust
//! use secret_recover::codec::{decode, encode};
//! use secret_recover::domain::Radix;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let binary = Radix::new(2)?;
//! let value = decode("111", binary)?;
//! assert_eq!(value, 7u32.into());
//!
//! // Upper and lower case letters carry the same value
//! let hex = Radix::new(16)?;
//! assert_eq!(decode("FF", hex)?, decode("ff", hex)?);
//!
//! // Encoding renders lowercase digits
//! assert_eq!(encode(&255u32.into(), hex), "ff");
//! # Ok(())
//! # }
//! ```

use std::collections::HashMap;
use std::sync::LazyLock;

use num_bigint::BigUint;

use crate::domain::Radix;
use crate::error::RecoverError;

/// Digit characters in value order; index is the digit value
const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Static `HashMap` for O(1) character-to-value lookups
///
/// Built once on first use and never written afterwards.
static DIGIT_VALUES: LazyLock<HashMap<char, u32>> = LazyLock::new(|| {
    ALPHABET
        .iter()
        .zip(0u32..)
        .flat_map(|(&byte, value)| {
            let lower = char::from(byte);
            [(lower, value), (lower.to_ascii_uppercase(), value)]
        })
        .collect()
});

/// Looks up the value of a single digit character
///
/// Returns `None` for characters outside the alphabet.
#[must_use]
pub fn digit_value(digit: char) -> Option<u32> {
    DIGIT_VALUES.get(&digit).copied()
}

/// Decodes a numeral in `radix` into an exact unsigned integer
///
/// Digits are read left to right and accumulated as `result * base + digit`.
///
/// # Errors
/// Returns [`RecoverError::EmptyValue`] for an empty string, or
/// [`RecoverError::InvalidDigit`] for a character that is not in the alphabet
/// or whose value is not below the base
pub fn decode(digits: &str, radix: Radix) -> Result<BigUint, RecoverError> {
    if digits.is_empty() {
        return Err(RecoverError::EmptyValue);
    }

    let base = *radix;
    let mut result = BigUint::ZERO;

    for (position, digit) in digits.chars().enumerate() {
        let value = digit_value(digit)
            .filter(|&value| value < base)
            .ok_or(RecoverError::InvalidDigit {
                digit,
                position,
                base,
            })?;

        result *= base;
        result += value;
    }

    Ok(result)
}

/// Encodes an unsigned integer as a lowercase numeral in `radix`
///
/// Zero encodes as `"0"`.
#[must_use]
pub fn encode(value: &BigUint, radix: Radix) -> String {
    value.to_str_radix(*radix)
}
