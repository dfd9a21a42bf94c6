pub mod sampling;

pub use sampling::{
    CoeffDistribution, SamplingError, SamplingResult, centered_uniform_coefficients,
    entropy_stream,
};
