//! Exact Lagrange interpolation at x = 0
//!
//! For points `(x_i, y_i)` on a polynomial `f` of degree `k - 1`,
//!
//! ```text
//! f(0) = Σ_i  y_i · Π_{j≠i} (0 − x_j) / Π_{j≠i} (x_i − x_j)
//! ```
//!
//! Each term's numerator (including `y_i`) and denominator are accumulated as
//! unbounded [`BigInt`]s and divided only once the full products are known.
//! With `x = 1..=k` every term divides exactly. For other abscissae a term
//! may leave a remainder; under [`DivisionPolicy::Strict`] remainders are
//! carried as an exact fraction and the final sum must come out integral.

use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};
use tracing::{trace, warn};

use crate::domain::DivisionPolicy;
use crate::error::RecoverError;

/// A point on the secret polynomial
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Point {
    pub x: BigInt,
    pub y: BigInt,
}

impl Point {
    pub fn new(x: impl Into<BigInt>, y: impl Into<BigInt>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }
}

/// Numerator and denominator of the `i`-th Lagrange term evaluated at 0
fn lagrange_term(points: &[Point], i: usize) -> Result<(BigInt, BigInt), RecoverError> {
    let xi = &points[i].x;
    let mut numerator = points[i].y.clone();
    let mut denominator = BigInt::one();

    for (j, point) in points.iter().enumerate() {
        if i == j {
            continue;
        }
        numerator *= -&point.x;
        denominator *= xi - &point.x;
    }

    if denominator.is_zero() {
        return Err(RecoverError::DuplicatePoint { x: xi.to_string() });
    }

    Ok((numerator, denominator))
}

/// Sum of fractional remainders, kept exact as `numerator / denominator`
struct Remainder {
    numerator: BigInt,
    denominator: BigInt,
}

impl Remainder {
    fn new() -> Self {
        Self {
            numerator: BigInt::zero(),
            denominator: BigInt::one(),
        }
    }

    fn add(&mut self, numerator: BigInt, denominator: &BigInt) {
        self.numerator = &self.numerator * denominator + numerator * &self.denominator;
        self.denominator *= denominator;
    }
}

/// Computes `f(0)` for the unique polynomial through `points`
///
/// The x-coordinates must be pairwise distinct. A single point is the
/// constant polynomial and returns its y-value unchanged.
///
/// # Errors
/// - [`RecoverError::InsufficientPoints`] if `points` is empty
/// - [`RecoverError::DuplicatePoint`] if two points share an x-coordinate
/// - [`RecoverError::Division`] if `f(0)` is not an integer and `policy` is
///   [`DivisionPolicy::Strict`]
pub fn interpolate_at_zero(
    points: &[Point],
    policy: DivisionPolicy,
) -> Result<BigInt, RecoverError> {
    if points.is_empty() {
        return Err(RecoverError::InsufficientPoints {
            required: 1,
            actual: 0,
        });
    }

    let mut whole = BigInt::zero();
    let mut remainder = Remainder::new();

    for i in 0..points.len() {
        let (numerator, denominator) = lagrange_term(points, i)?;

        // Truncates toward zero; `rest` carries the sign of `numerator`
        let quotient = &numerator / &denominator;
        let rest = &numerator - &quotient * &denominator;
        trace!(term = i, %numerator, %denominator, %quotient, "lagrange term");

        if !rest.is_zero() {
            match policy {
                // Exactness is checked on the completed sum
                DivisionPolicy::Strict => remainder.add(rest, &denominator),
                DivisionPolicy::Truncate => {
                    warn!(
                        term = i,
                        %numerator,
                        %denominator,
                        "truncating inexact interpolation term"
                    );
                }
            }
        }

        whole += quotient;
    }

    if remainder.numerator.is_zero() {
        return Ok(whole);
    }

    let Remainder {
        numerator,
        denominator,
    } = remainder;

    if (&numerator % &denominator).is_zero() {
        return Ok(whole + numerator / denominator);
    }

    // Report f(0) as a single fraction with a positive denominator
    let mut total = whole * &denominator + numerator;
    let mut denominator = denominator;
    if denominator.is_negative() {
        total = -total;
        denominator = -denominator;
    }

    Err(RecoverError::Division {
        numerator: total.to_string(),
        denominator: denominator.to_string(),
    })
}
