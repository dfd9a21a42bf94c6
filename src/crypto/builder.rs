use super::{GlweEngine, GlweError, GlweParams};
use crate::math::CoeffDistribution;

/// Builder for [`GlweParams`] and [`GlweEngine`].
///
/// Q, P and N are required. The rank defaults to 1 and both the key and
/// noise distributions default to uniform binary.
#[derive(Debug, Clone, Default)]
pub struct GlweEngineBuilder {
    ciphertext_modulus: Option<u64>,
    plaintext_modulus: Option<u64>,
    degree: Option<usize>,
    rank: Option<usize>,
    key_distribution: Option<CoeffDistribution>,
    noise_distribution: Option<CoeffDistribution>,
}

impl GlweEngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ciphertext_modulus(mut self, q: u64) -> Self {
        self.ciphertext_modulus = Some(q);
        self
    }

    pub fn plaintext_modulus(mut self, p: u64) -> Self {
        self.plaintext_modulus = Some(p);
        self
    }

    pub fn degree(mut self, n: usize) -> Self {
        self.degree = Some(n);
        self
    }

    pub fn rank(mut self, k: usize) -> Self {
        self.rank = Some(k);
        self
    }

    pub fn key_distribution(mut self, distribution: CoeffDistribution) -> Self {
        self.key_distribution = Some(distribution);
        self
    }

    pub fn noise_distribution(mut self, distribution: CoeffDistribution) -> Self {
        self.noise_distribution = Some(distribution);
        self
    }

    pub fn build_params(self) -> Result<GlweParams, GlweError> {
        let q = self
            .ciphertext_modulus
            .ok_or_else(|| GlweError::invalid("ciphertext modulus Q is required"))?;
        let p = self
            .plaintext_modulus
            .ok_or_else(|| GlweError::invalid("plaintext modulus P is required"))?;
        let n = self
            .degree
            .ok_or_else(|| GlweError::invalid("ring degree N is required"))?;

        GlweParams::with_distributions(
            q,
            p,
            n,
            self.rank.unwrap_or(1),
            self.key_distribution
                .unwrap_or(CoeffDistribution::UniformBinary),
            self.noise_distribution
                .unwrap_or(CoeffDistribution::UniformBinary),
        )
    }

    pub fn build(self) -> Result<GlweEngine, GlweError> {
        Ok(GlweEngine::new(self.build_params()?))
    }
}
