//! Polynomial arithmetic in the negacyclic ring Z_q[X]/(X^n + 1).

mod display;
pub mod element;

pub use element::RingElement;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RingError {
    #[error("Ring degree {degree} must be a non-zero power of two")]
    InvalidDegree { degree: usize },

    #[error("Modulus {modulus} must be greater than 1")]
    InvalidModulus { modulus: u64 },

    #[error("Degree mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Modulus mismatch: expected {expected}, got {actual}")]
    ModulusMismatch { expected: u64, actual: u64 },
}

pub type RingResult<T> = Result<T, RingError>;
