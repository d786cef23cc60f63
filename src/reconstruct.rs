// src/reconstruct.rs
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use num_bigint::BigInt;
use serde::Deserialize;
use tracing::debug;

use crate::error::SolverError;
use crate::interpolate::interpolate_at_zero;
use crate::radix;

/// A decoded sample of the hidden polynomial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Point {
    pub x: BigInt,
    pub y: BigInt,
}

/// Reconstruction metadata: total share count and threshold.
#[derive(Debug, Deserialize)]
pub struct Keys {
    pub n: usize,
    pub k: usize,
}

/// One share as it appears on the wire: a digit string plus its base.
/// The JSON emits the base either as a number or as a string.
#[derive(Debug, Deserialize)]
pub struct EncodedShare {
    base: Base,
    value: String,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Base {
    Number(u32),
    Text(String),
}

impl EncodedShare {
    fn base(&self) -> Result<u32, SolverError> {
        match &self.base {
            Base::Number(b) => Ok(*b),
            Base::Text(s) => s.trim().parse().map_err(|_| {
                SolverError::InvalidInputStructure(format!("Unparseable base '{}'", s))
            }),
        }
    }
}

/// A full reconstruction request: the "keys" metadata entry plus one entry
/// per point, keyed by the point's x-coordinate as a decimal string.
#[derive(Debug, Deserialize)]
pub struct ShareRecord {
    pub keys: Keys,
    #[serde(flatten)]
    shares: BTreeMap<String, EncodedShare>,
}

impl ShareRecord {
    /// Parse a JSON input record and validate its structure.
    pub fn from_json(input: &str) -> Result<Self, SolverError> {
        let record: ShareRecord = serde_json::from_str(input)
            .map_err(|e| SolverError::InvalidInputStructure(e.to_string()))?;
        if record.keys.k == 0 || record.keys.k > record.keys.n {
            return Err(SolverError::InvalidInputStructure(format!(
                "Threshold k={} must satisfy 1 <= k <= n={}",
                record.keys.k, record.keys.n
            )));
        }
        Ok(record)
    }

    /// Decode every share into a point, interpreting each map key as a
    /// decimal x-coordinate and each value in its stated base.
    pub fn points(&self) -> Result<Vec<Point>, SolverError> {
        let mut points = Vec::with_capacity(self.shares.len());
        for (key, share) in &self.shares {
            let x: BigInt = key.trim().parse().map_err(|_| {
                SolverError::InvalidInputStructure(format!("Unparseable x-coordinate '{}'", key))
            })?;
            let y = radix::decode(&share.value, share.base()?)?;
            points.push(Point { x, y });
        }
        Ok(points)
    }
}

/// Reconstruct the secret from at least `k` points.
///
/// Points are sorted ascending by x-coordinate and the lowest k form the
/// interpolation subset; any fixed rule would do, but lowest-x keeps the
/// selection reproducible across runs. Duplicate x-coordinates are
/// rejected outright rather than ordered arbitrarily.
pub fn reconstruct_secret(k: usize, mut points: Vec<Point>) -> Result<BigInt, SolverError> {
    if k == 0 {
        return Err(SolverError::InvalidInputStructure(
            "Threshold must be at least 1".to_string(),
        ));
    }
    if points.len() < k {
        return Err(SolverError::InsufficientShares {
            required: k,
            available: points.len(),
        });
    }

    points.sort_by(|a, b| a.x.cmp(&b.x));
    for pair in points.windows(2) {
        if pair[0].x == pair[1].x {
            return Err(SolverError::DuplicateXValue(pair[0].x.clone()));
        }
    }
    points.truncate(k);
    debug!(
        "Interpolating through {} points, x = {} .. {}",
        k,
        points[0].x,
        points[k - 1].x
    );

    let xs: Vec<BigInt> = points.iter().map(|p| p.x.clone()).collect();
    let ys: Vec<BigInt> = points.iter().map(|p| p.y.clone()).collect();
    let secret = interpolate_at_zero(&xs, &ys)?;

    if !secret.is_integer() {
        return Err(SolverError::NonIntegerSecret(secret.to_string()));
    }
    Ok(secret.into_numer())
}

/// Decode a record's shares and reconstruct its secret as a base-10 string.
pub fn solve_record(record: &ShareRecord) -> Result<String, SolverError> {
    let points = record.points()?;
    debug!("Decoded {} of {} declared shares", points.len(), record.keys.n);
    let secret = reconstruct_secret(record.keys.k, points)?;
    Ok(secret.to_string())
}

/// Read a JSON input file from disk and reconstruct its secret.
pub fn solve_file<P: AsRef<Path>>(path: P) -> Result<String, SolverError> {
    let input = fs::read_to_string(path)?;
    let record = ShareRecord::from_json(&input)?;
    solve_record(&record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"{
        "keys": {"n": 4, "k": 3},
        "1": {"base": "10", "value": "4"},
        "2": {"base": "2", "value": "111"},
        "3": {"base": "10", "value": "12"},
        "6": {"base": "4", "value": "213"}
    }"#;

    fn point(x: i64, y: i64) -> Point {
        Point {
            x: BigInt::from(x),
            y: BigInt::from(y),
        }
    }

    #[test]
    fn test_parse_sample_record() {
        let record = ShareRecord::from_json(SAMPLE).unwrap();
        assert_eq!(record.keys.n, 4);
        assert_eq!(record.keys.k, 3);
        let points = record.points().unwrap();
        assert_eq!(points.len(), 4);
        assert!(points.contains(&point(2, 7)));
    }

    #[test]
    fn test_numeric_base_field() {
        let record = ShareRecord::from_json(
            r#"{"keys": {"n": 1, "k": 1}, "5": {"base": 16, "value": "ff"}}"#,
        )
        .unwrap();
        assert_eq!(record.points().unwrap(), vec![point(5, 255)]);
    }

    #[test]
    fn test_missing_keys_entry() {
        let err = ShareRecord::from_json(r#"{"1": {"base": "10", "value": "4"}}"#).unwrap_err();
        assert!(matches!(err, SolverError::InvalidInputStructure(_)));
    }

    #[test]
    fn test_threshold_larger_than_total() {
        let err = ShareRecord::from_json(r#"{"keys": {"n": 2, "k": 3}}"#).unwrap_err();
        assert!(matches!(err, SolverError::InvalidInputStructure(_)));
    }

    #[test]
    fn test_invalid_digit_surfaces_from_decoding() {
        let record = ShareRecord::from_json(
            r#"{"keys": {"n": 1, "k": 1}, "1": {"base": "10", "value": "4g"}}"#,
        )
        .unwrap();
        assert!(matches!(
            record.points(),
            Err(SolverError::InvalidDigit { digit: 'g', base: 10 })
        ));
    }

    #[test]
    fn test_solve_sample_record() {
        // Points (1,4), (2,7), (3,12) lie on y = x^2 + 3, so the secret is 3.
        let record = ShareRecord::from_json(SAMPLE).unwrap();
        assert_eq!(solve_record(&record).unwrap(), "3");
    }

    #[test]
    fn test_points_sort_numerically_not_lexically() {
        // "10" sorts before "2" as a string. The two lowest x-coordinates
        // are 2 and 3 (on y = 2x + 1, secret 1); the x=10 share is garbage
        // and must be excluded by the numeric sort.
        let record = ShareRecord::from_json(
            r#"{
                "keys": {"n": 3, "k": 2},
                "10": {"base": "10", "value": "999"},
                "2": {"base": "10", "value": "5"},
                "3": {"base": "10", "value": "7"}
            }"#,
        )
        .unwrap();
        assert_eq!(solve_record(&record).unwrap(), "1");
    }

    #[test]
    fn test_insufficient_shares() {
        let err = reconstruct_secret(3, vec![point(1, 4), point(2, 7)]).unwrap_err();
        assert!(matches!(
            err,
            SolverError::InsufficientShares { required: 3, available: 2 }
        ));
    }

    #[test]
    fn test_zero_threshold_rejected() {
        let err = reconstruct_secret(0, vec![point(1, 4)]).unwrap_err();
        assert!(matches!(err, SolverError::InvalidInputStructure(_)));
    }

    #[test]
    fn test_duplicate_x_rejected_before_interpolation() {
        let err = reconstruct_secret(2, vec![point(1, 4), point(1, 9), point(3, 12)]).unwrap_err();
        assert!(matches!(err, SolverError::DuplicateXValue(x) if x == BigInt::from(1)));
    }

    #[test]
    fn test_fractional_secret_is_an_error() {
        // (1, 0) and (3, 1) interpolate to -1/2 at x = 0.
        let err = reconstruct_secret(2, vec![point(1, 0), point(3, 1)]).unwrap_err();
        assert!(matches!(err, SolverError::NonIntegerSecret(s) if s == "-1/2"));
    }

    #[test]
    fn test_random_polynomials_round_trip() {
        use rand::Rng;
        let mut rng = rand::thread_rng();

        for _ in 0..50 {
            let c0 = rng.gen_range(-1_000_000i64..1_000_000);
            let c1 = rng.gen_range(-1_000i64..1_000);
            let c2 = rng.gen_range(-1_000i64..1_000);
            let poly = |x: i64| c2 * x * x + c1 * x + c0;

            // Five distinct x-values, threshold 3.
            let points: Vec<Point> = [1i64, 4, 9, 16, 25]
                .iter()
                .map(|&x| point(x, poly(x)))
                .collect();
            let secret = reconstruct_secret(3, points).unwrap();
            assert_eq!(secret, BigInt::from(c0));
        }
    }

    #[test]
    fn test_solve_file_end_to_end() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        assert_eq!(solve_file(file.path()).unwrap(), "3");
    }

    #[test]
    fn test_solve_file_missing_path() {
        assert!(matches!(
            solve_file("/no/such/input.json"),
            Err(SolverError::Io(_))
        ));
    }
}
