use anyhow::{Context, Result, bail};
use num_bigint::{BigInt, BigUint};
use serde_json::Value;

use crate::codec;
use crate::domain::{Radix, RecoveryConfig, TestCase};
use crate::recovery::reconstruct_secret;

/// Parse a JSON document holding one test case or an array of test cases
///
/// # Errors
/// Returns an error if the document is not valid JSON, is neither an object
/// nor an array, or any test case record is malformed
pub fn parse_test_cases(json: &str) -> Result<Vec<TestCase>> {
    let document: Value = serde_json::from_str(json).context("Failed to parse JSON input")?;

    match document {
        Value::Object(_) => {
            let test_case =
                serde_json::from_value(document).context("Failed to read test case")?;
            Ok(vec![test_case])
        }
        Value::Array(items) => {
            if items.is_empty() {
                bail!("No test cases provided");
            }
            items
                .into_iter()
                .enumerate()
                .map(|(idx, item)| {
                    serde_json::from_value(item)
                        .with_context(|| format!("Failed to read test case #{}", idx + 1))
                })
                .collect()
        }
        _ => bail!("Expected a test case object or an array of test cases"),
    }
}

/// Reconstruct the secret of every test case, in order
///
/// Stops at the first failure; no secrets are returned if any case fails.
///
/// # Errors
/// Returns an error naming the first test case that could not be reconstructed
pub fn solve_test_cases(test_cases: &[TestCase], config: RecoveryConfig) -> Result<Vec<BigInt>> {
    test_cases
        .iter()
        .enumerate()
        .map(|(idx, test_case)| {
            reconstruct_secret(test_case, config)
                .with_context(|| format!("Failed to reconstruct test case #{}", idx + 1))
        })
        .collect()
}

/// Decode a numeral in `base` into an exact integer
///
/// # Errors
/// Returns an error if the numeral contains a digit invalid for `base`
pub fn decode_value(value: &str, base: Radix) -> Result<BigUint> {
    codec::decode(value.trim(), base)
        .with_context(|| format!("Failed to decode '{}' in base {base}", value.trim()))
}

/// Re-encode a numeral from base `from` into base `to`
///
/// # Errors
/// Returns an error if the numeral contains a digit invalid for `from`
pub fn convert_value(value: &str, from: Radix, to: Radix) -> Result<String> {
    let decoded = decode_value(value, from)?;
    Ok(codec::encode(&decoded, to))
}
