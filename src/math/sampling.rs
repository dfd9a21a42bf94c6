//! Coefficient samplers for keys, masks and noise.
//!
//! Samplers draw from an infallible [`Rng`]. Callers holding a fallible or
//! OS-backed source first derive a ChaCha20 stream from it with
//! [`entropy_stream`], the single point where the source can fail.

use rand::{Rng, SeedableRng, TryCryptoRng};
use rand_chacha::ChaCha20Rng;
use rand_distr::{Distribution, Normal, Uniform};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SamplingError {
    #[error("Invalid distribution: {message}")]
    InvalidDistribution { message: String },

    #[error("Randomness source failed: {message}")]
    SourceFailure { message: String },
}

pub type SamplingResult<T> = Result<T, SamplingError>;

/// Distribution of small ring coefficients.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CoeffDistribution {
    /// Uniform over `{0, 1}`.
    UniformBinary,
    /// Uniform over `{-1, 0, 1}`.
    UniformTernary,
    /// Uniform over the half-open range `[low, high)`.
    Uniform { low: i64, high: i64 },
    /// Normal with mean zero, rounded to the nearest integer.
    Gaussian { std_dev: f64 },
}

impl CoeffDistribution {
    pub fn validate(&self) -> SamplingResult<()> {
        match *self {
            Self::UniformBinary | Self::UniformTernary => Ok(()),
            Self::Uniform { low, high } if low >= high => {
                Err(SamplingError::InvalidDistribution {
                    message: format!("empty uniform range [{low}, {high})"),
                })
            }
            Self::Uniform { .. } => Ok(()),
            Self::Gaussian { std_dev } if !(std_dev.is_finite() && std_dev > 0.0) => {
                Err(SamplingError::InvalidDistribution {
                    message: format!("std_dev must be finite and positive, got {std_dev}"),
                })
            }
            Self::Gaussian { .. } => Ok(()),
        }
    }

    /// Largest absolute value a sample can take, `None` when unbounded.
    pub fn max_magnitude(&self) -> Option<u64> {
        match *self {
            Self::UniformBinary | Self::UniformTernary => Some(1),
            Self::Uniform { low, high } => {
                Some(low.unsigned_abs().max((high - 1).unsigned_abs()))
            }
            Self::Gaussian { .. } => None,
        }
    }

    /// Draws `degree` independent signed coefficients.
    pub fn sample<R: Rng + ?Sized>(
        &self,
        degree: usize,
        rng: &mut R,
    ) -> SamplingResult<Vec<i64>> {
        self.validate()?;
        match *self {
            Self::UniformBinary => uniform_coefficients(0, 2, degree, rng),
            Self::UniformTernary => uniform_coefficients(-1, 2, degree, rng),
            Self::Uniform { low, high } => uniform_coefficients(low, high, degree, rng),
            Self::Gaussian { std_dev } => gaussian_coefficients(std_dev, degree, rng),
        }
    }
}

fn uniform_coefficients<R: Rng + ?Sized>(
    low: i64,
    high: i64,
    degree: usize,
    rng: &mut R,
) -> SamplingResult<Vec<i64>> {
    let distribution =
        Uniform::new(low, high).map_err(|err| SamplingError::InvalidDistribution {
            message: format!("uniform range [{low}, {high}): {err}"),
        })?;
    Ok((0..degree).map(|_| distribution.sample(rng)).collect())
}

fn gaussian_coefficients<R: Rng + ?Sized>(
    std_dev: f64,
    degree: usize,
    rng: &mut R,
) -> SamplingResult<Vec<i64>> {
    let normal =
        Normal::new(0.0, std_dev).map_err(|err| SamplingError::InvalidDistribution {
            message: format!("normal distribution: {err}"),
        })?;
    Ok((0..degree)
        .map(|_| normal.sample(rng).round() as i64)
        .collect())
}

/// Samples `degree` coefficients uniformly from the centered residue system
/// `[-floor(q/2), q - floor(q/2))`, which hits every residue mod q once.
pub fn centered_uniform_coefficients<R: Rng + ?Sized>(
    modulus: u64,
    degree: usize,
    rng: &mut R,
) -> SamplingResult<Vec<i64>> {
    let half = i64::try_from(modulus / 2).map_err(|_| SamplingError::InvalidDistribution {
        message: format!("modulus {modulus} too large for centered sampling"),
    })?;
    let upper = i64::try_from(modulus - modulus / 2).map_err(|_| {
        SamplingError::InvalidDistribution {
            message: format!("modulus {modulus} too large for centered sampling"),
        }
    })?;
    uniform_coefficients(-half, upper, degree, rng)
}

/// Derives a ChaCha20 stream seeded from `source`.
///
/// This is the only fallible entropy draw: a seeded source yields the same
/// stream every time, and an OS source yields fresh entropy.
pub fn entropy_stream<R: TryCryptoRng>(source: &mut R) -> SamplingResult<ChaCha20Rng> {
    ChaCha20Rng::try_from_rng(source).map_err(|err| SamplingError::SourceFailure {
        message: err.to_string(),
    })
}
