// src/interpolate.rs
use num_bigint::BigInt;

use crate::error::SolverError;
use crate::rational::Rational;

/// Evaluate at x = 0 the unique degree-(k-1) polynomial through the k
/// points (xs[i], ys[i]), using the Lagrange formula:
///
/// ```text
/// f(0) = Σ_i  ys[i] * Π_{j≠i} (0 - xs[j]) / (xs[i] - xs[j])
/// ```
///
/// Every step runs in exact rational arithmetic, so the result is correct
/// no matter how large the coordinates grow. O(k²) rational
/// multiplications; intermediate magnitudes grow multiplicatively, which
/// is expected for exact interpolation.
///
/// The x values must be pairwise distinct; a repeated value fails with
/// `DuplicateXValue` before any division can hit a zero denominator.
pub fn interpolate_at_zero(xs: &[BigInt], ys: &[BigInt]) -> Result<Rational, SolverError> {
    if xs.len() != ys.len() {
        return Err(SolverError::InvalidInputStructure(format!(
            "Expected matching coordinate lists, got {} x-values and {} y-values",
            xs.len(),
            ys.len()
        )));
    }

    let k = xs.len();
    let mut result = Rational::zero();

    for i in 0..k {
        let mut term = Rational::from_integer(ys[i].clone());

        for j in 0..k {
            if i == j {
                continue;
            }
            if xs[i] == xs[j] {
                return Err(SolverError::DuplicateXValue(xs[i].clone()));
            }
            let numerator = Rational::from_integer(-&xs[j]);
            let denominator = Rational::from_integer(&xs[i] - &xs[j]);
            term = term.mul(&numerator.div(&denominator)?);
        }
        result = result.add(&term);
    }

    Ok(result)
}
