//! Property tests for numeral decoding

use num_bigint::BigUint;
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use secret_recover::RecoverError;
use secret_recover::codec::{decode, digit_value, encode};
use secret_recover::domain::Radix;

/// Wrapper for valid bases (2..=36)
#[derive(Clone, Copy, Debug)]
struct ValidRadix(Radix);

impl Arbitrary for ValidRadix {
    fn arbitrary(g: &mut Gen) -> Self {
        let base = u32::arbitrary(g) % (Radix::MAX - Radix::MIN + 1) + Radix::MIN;
        ValidRadix(Radix::new(base).expect("base in range"))
    }
}

/// Wrapper for unsigned values spanning well past 64 bits
#[derive(Clone, Debug)]
struct WideValue(BigUint);

impl Arbitrary for WideValue {
    fn arbitrary(g: &mut Gen) -> Self {
        // Product of up to three u128 limbs: up to 384 bits
        let limbs = usize::arbitrary(g) % 3 + 1;
        let value = (0..limbs).fold(BigUint::from(1u32), |acc, _| {
            acc * BigUint::from(u128::arbitrary(g))
        });
        WideValue(value)
    }
}

/// Test that encoding then decoding reproduces the original value
#[quickcheck]
fn prop_encode_decode_round_trip(value: WideValue, radix: ValidRadix) -> bool {
    let WideValue(value) = value;
    let ValidRadix(radix) = radix;

    decode(&encode(&value, radix), radix) == Ok(value)
}

/// Test that decoding ignores letter case
#[quickcheck]
fn prop_decode_case_insensitive(value: WideValue, radix: ValidRadix) -> bool {
    let WideValue(value) = value;
    let ValidRadix(radix) = radix;

    let upper = encode(&value, radix).to_ascii_uppercase();
    decode(&upper, radix) == Ok(value)
}

/// Test that "10" decodes to the base and "0" to zero
#[quickcheck]
fn prop_ten_is_base(radix: ValidRadix) -> bool {
    let ValidRadix(radix) = radix;

    decode("10", radix) == Ok(BigUint::from(*radix)) && decode("0", radix) == Ok(BigUint::ZERO)
}

/// Test that a digit equal to or above the base is always rejected
#[quickcheck]
fn prop_digit_at_or_above_base_rejected(radix: ValidRadix, offset: u8) -> bool {
    let ValidRadix(radix) = radix;
    if *radix == Radix::MAX {
        return true; // every alphabet digit is valid
    }

    let digit_value_wanted = *radix + u32::from(offset) % (Radix::MAX - *radix);
    let Some(digit) = char::from_digit(digit_value_wanted, Radix::MAX) else {
        return false;
    };
    if digit_value(digit) != Some(digit_value_wanted) {
        return false;
    }

    let numeral = format!("1{digit}");
    decode(&numeral, radix)
        == Err(RecoverError::InvalidDigit {
            digit,
            position: 1,
            base: *radix,
        })
}
