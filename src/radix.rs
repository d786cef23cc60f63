// src/radix.rs
use num_bigint::BigInt;
use num_traits::Zero;

use crate::error::SolverError;

/// Decode a digit string in the given base into an arbitrary-precision
/// integer.
///
/// Digits '0'-'9' map to 0-9 and letters 'a'-'z' (case-insensitive) map to
/// 10-35, so any base in 2..=36 is supported. The string is read most
/// significant digit first; surrounding whitespace is trimmed. No sign
/// prefix is accepted, the result is always a non-negative magnitude.
pub fn decode(digits: &str, base: u32) -> Result<BigInt, SolverError> {
    if !(2..=36).contains(&base) {
        return Err(SolverError::InvalidBase(base));
    }

    let mut result = BigInt::zero();
    for ch in digits.trim().chars() {
        let value = ch
            .to_digit(36)
            .filter(|&v| v < base)
            .ok_or(SolverError::InvalidDigit { digit: ch, base })?;
        result = result * base + value;
    }
    Ok(result)
}
