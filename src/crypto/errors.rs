use crate::encoding::EncodingError;
use crate::math::SamplingError;
use crate::rings::RingError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GlweError {
    #[error("Invalid parameters: {message}")]
    InvalidParameters { message: String },

    #[error("Randomness source failed: {message}")]
    RandomnessFailure { message: String },

    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Ring arithmetic failed: {source}")]
    Ring {
        #[source]
        source: RingError,
    },

    #[error("Encoding failed: {source}")]
    Encoding {
        #[from]
        source: EncodingError,
    },
}

impl GlweError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidParameters {
            message: message.into(),
        }
    }
}

impl From<RingError> for GlweError {
    fn from(source: RingError) -> Self {
        match source {
            RingError::DimensionMismatch { expected, actual } => {
                Self::DimensionMismatch { expected, actual }
            }
            RingError::InvalidDegree { .. } | RingError::InvalidModulus { .. } => {
                Self::InvalidParameters {
                    message: source.to_string(),
                }
            }
            RingError::ModulusMismatch { .. } => Self::Ring { source },
        }
    }
}

impl From<SamplingError> for GlweError {
    fn from(source: SamplingError) -> Self {
        match source {
            SamplingError::InvalidDistribution { message } => {
                Self::InvalidParameters { message }
            }
            SamplingError::SourceFailure { message } => Self::RandomnessFailure { message },
        }
    }
}

pub type GlweResult<T> = Result<T, GlweError>;
