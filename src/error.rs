// src/error.rs
use num_bigint::BigInt;

/// Everything that can go wrong while reconstructing a secret.
#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    #[error("Denominator cannot be zero")]
    DivisionByZero,

    #[error("Base {0} is outside the supported range 2..=36")]
    InvalidBase(u32),

    #[error("Invalid digit '{digit}' for base {base}")]
    InvalidDigit { digit: char, base: u32 },

    #[error("Invalid input structure: {0}")]
    InvalidInputStructure(String),

    #[error("Duplicate x-coordinate {0} among shares")]
    DuplicateXValue(BigInt),

    #[error("Calculated constant term {0} is not an integer")]
    NonIntegerSecret(String),

    #[error("Threshold requires {required} shares but only {available} were provided")]
    InsufficientShares { required: usize, available: usize },

    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),
}
