use super::{GlweError, GlweResult};
use crate::math::CoeffDistribution;
use crate::rings::RingError;
use crate::{Plaintext, RingElement};

/// Largest supported ciphertext modulus. Keeps centered lifts inside `i64`.
pub const MAX_CIPHERTEXT_MODULUS: u64 = 1 << 62;

/// GLWE parameter set.
///
/// - `Q`: ciphertext modulus
/// - `P`: plaintext modulus
/// - `N`: ring degree, a power of two
/// - `K`: GLWE rank, the number of mask and secret key polynomials
/// - `Delta = floor(Q / P)`: spacing between encoded symbols
///
/// P must divide Q, or be a power of two. In the second case the remainder
/// `Q mod P` sits above the top symbol and only widens its decoding window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlweParams {
    ciphertext_modulus: u64,
    plaintext_modulus: u64,
    degree: usize,
    rank: usize,
    delta: u64,
    key_distribution: CoeffDistribution,
    noise_distribution: CoeffDistribution,
}

impl GlweParams {
    /// Parameters with binary secret keys and binary encryption noise.
    pub fn new(q: u64, p: u64, n: usize, k: usize) -> GlweResult<Self> {
        Self::with_distributions(
            q,
            p,
            n,
            k,
            CoeffDistribution::UniformBinary,
            CoeffDistribution::UniformBinary,
        )
    }

    pub fn with_distributions(
        q: u64,
        p: u64,
        n: usize,
        k: usize,
        key_distribution: CoeffDistribution,
        noise_distribution: CoeffDistribution,
    ) -> GlweResult<Self> {
        if !n.is_power_of_two() {
            return Err(GlweError::invalid(format!(
                "ring degree N = {n} must be a non-zero power of two"
            )));
        }
        if k == 0 {
            return Err(GlweError::invalid("rank K must be at least 1"));
        }
        if q <= 1 || q > MAX_CIPHERTEXT_MODULUS {
            return Err(GlweError::invalid(format!(
                "ciphertext modulus Q = {q} must lie in (1, 2^62]"
            )));
        }
        if p < 2 {
            return Err(GlweError::invalid(format!(
                "plaintext modulus P = {p} must be at least 2"
            )));
        }
        if q % p != 0 && !p.is_power_of_two() {
            return Err(GlweError::invalid(format!(
                "plaintext modulus P = {p} neither divides Q = {q} nor is a power of two"
            )));
        }
        let delta = q / p;
        if delta < 2 {
            return Err(GlweError::invalid(format!(
                "scaling factor Q / P = {delta} leaves no room for noise"
            )));
        }
        key_distribution.validate()?;
        noise_distribution.validate()?;

        Ok(Self {
            ciphertext_modulus: q,
            plaintext_modulus: p,
            degree: n,
            rank: k,
            delta,
            key_distribution,
            noise_distribution,
        })
    }

    /// Plain LWE: degree 1, rank `k`.
    pub fn new_lwe(q: u64, p: u64, k: usize) -> GlweResult<Self> {
        Self::new(q, p, 1, k)
    }

    /// Ring LWE: rank 1, degree `n`.
    pub fn new_rlwe(q: u64, p: u64, n: usize) -> GlweResult<Self> {
        Self::new(q, p, n, 1)
    }

    /// Q = 4093, P = 4, N = 8, K = 1, giving Delta = 1023.
    pub fn toy() -> Self {
        Self {
            ciphertext_modulus: 4093,
            plaintext_modulus: 4,
            degree: 8,
            rank: 1,
            delta: 1023,
            key_distribution: CoeffDistribution::UniformBinary,
            noise_distribution: CoeffDistribution::UniformBinary,
        }
    }

    pub fn ciphertext_modulus(&self) -> u64 {
        self.ciphertext_modulus
    }

    pub fn plaintext_modulus(&self) -> u64 {
        self.plaintext_modulus
    }

    pub fn degree(&self) -> usize {
        self.degree
    }

    pub fn rank(&self) -> usize {
        self.rank
    }

    pub fn delta(&self) -> u64 {
        self.delta
    }

    pub fn key_distribution(&self) -> CoeffDistribution {
        self.key_distribution
    }

    pub fn noise_distribution(&self) -> CoeffDistribution {
        self.noise_distribution
    }

    pub(crate) fn check_element(&self, element: &RingElement) -> GlweResult<()> {
        if element.degree() != self.degree {
            return Err(GlweError::DimensionMismatch {
                expected: self.degree,
                actual: element.degree(),
            });
        }
        if element.modulus() != self.ciphertext_modulus {
            return Err(RingError::ModulusMismatch {
                expected: self.ciphertext_modulus,
                actual: element.modulus(),
            }
            .into());
        }
        Ok(())
    }

    pub(crate) fn check_elements(&self, elements: &[RingElement]) -> GlweResult<()> {
        if elements.len() != self.rank {
            return Err(GlweError::DimensionMismatch {
                expected: self.rank,
                actual: elements.len(),
            });
        }
        elements.iter().try_for_each(|e| self.check_element(e))
    }

    pub(crate) fn check_plaintext(&self, plaintext: &Plaintext) -> GlweResult<()> {
        if plaintext.len() != self.degree {
            return Err(GlweError::DimensionMismatch {
                expected: self.degree,
                actual: plaintext.len(),
            });
        }
        if plaintext.modulus() != self.plaintext_modulus {
            return Err(GlweError::invalid(format!(
                "plaintext modulus {} does not match P = {}",
                plaintext.modulus(),
                self.plaintext_modulus
            )));
        }
        Ok(())
    }
}
