// src/lib.rs
pub mod error;
pub mod interpolate;
pub mod radix;
pub mod rational;
pub mod reconstruct;

// Re-export the working surface so it appears at crate root
pub use crate::error::SolverError;
pub use crate::interpolate::interpolate_at_zero;
pub use crate::rational::Rational;
pub use crate::reconstruct::{reconstruct_secret, solve_file, solve_record, Point, ShareRecord};
