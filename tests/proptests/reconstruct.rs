//! Property tests for secret reconstruction

use num_bigint::{BigInt, BigUint};
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use secret_recover::codec::encode;
use secret_recover::domain::{
    DivisionPolicy, Keys, Radix, RecoveryConfig, Share, ShareIndex, TestCase, Threshold,
};
use secret_recover::{Point, interpolate_at_zero, reconstruct_secret};

/// Integer polynomial of degree 0..=7, coefficients lowest degree first
#[derive(Clone, Debug)]
struct Polynomial(Vec<BigInt>);

impl Polynomial {
    fn eval(&self, x: &BigInt) -> BigInt {
        self.0
            .iter()
            .rev()
            .fold(BigInt::from(0), |acc, coefficient| acc * x + coefficient)
    }

    fn constant(&self) -> &BigInt {
        &self.0[0]
    }
}

impl Arbitrary for Polynomial {
    fn arbitrary(g: &mut Gen) -> Self {
        let degree = usize::arbitrary(g) % 8;
        let coefficients = (0..=degree)
            .map(|_| BigInt::from(i64::arbitrary(g)) * BigInt::from(i64::arbitrary(g)))
            .collect();
        Polynomial(coefficients)
    }
}

/// Polynomial with non-negative coefficients, so every share value is encodable
#[derive(Clone, Debug)]
struct NonNegativePolynomial(Polynomial);

impl Arbitrary for NonNegativePolynomial {
    fn arbitrary(g: &mut Gen) -> Self {
        let Polynomial(coefficients) = Polynomial::arbitrary(g);
        NonNegativePolynomial(Polynomial(
            coefficients.into_iter().map(|c| c.magnitude().clone().into()).collect(),
        ))
    }
}

/// Test that sampling at x = 1..=k and interpolating returns P(0)
#[quickcheck]
fn prop_interpolation_recovers_constant_term(polynomial: Polynomial) -> bool {
    let k = polynomial.0.len() as u32;
    let points: Vec<_> = (1..=k)
        .map(|x| {
            let x = BigInt::from(x);
            let y = polynomial.eval(&x);
            Point { x, y }
        })
        .collect();

    interpolate_at_zero(&points, DivisionPolicy::Strict).as_ref() == Ok(polynomial.constant())
}

/// Test that distinct, non-consecutive abscissae still interpolate exactly
#[quickcheck]
fn prop_sparse_abscissae_recover_constant_term(polynomial: Polynomial, stride: u8) -> bool {
    let stride = i64::from(stride % 5) + 1;
    let points: Vec<_> = (0..polynomial.0.len() as i64)
        .map(|i| {
            let x = BigInt::from(1 + i * stride);
            let y = polynomial.eval(&x);
            Point { x, y }
        })
        .collect();

    interpolate_at_zero(&points, DivisionPolicy::Strict).as_ref() == Ok(polynomial.constant())
}

/// Test that encoded shares in arbitrary bases reconstruct to P(0)
#[quickcheck]
fn prop_encoded_shares_reconstruct(polynomial: NonNegativePolynomial, bases: Vec<u8>) -> bool {
    let NonNegativePolynomial(polynomial) = polynomial;
    let k = polynomial.0.len() as u32;

    let shares = (1..=k).map(|index| {
        let raw = bases.get(index as usize - 1).copied().unwrap_or(10);
        let radix = Radix::new(u32::from(raw) % 35 + 2).expect("base in range");
        let y = polynomial.eval(&BigInt::from(index));
        let y: BigUint = y.to_biguint().expect("non-negative share value");
        Share::new(ShareIndex::new(index).unwrap(), *radix, encode(&y, radix))
    });

    let keys = Keys::new(Some(k), Threshold::new(k).unwrap());
    let test_case = TestCase::new(keys, shares);

    reconstruct_secret(&test_case, RecoveryConfig::default()).as_ref() == Ok(polynomial.constant())
}
