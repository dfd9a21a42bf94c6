//! Secret key: K "small" polynomials s_1..s_K, by default with coefficients
//! drawn uniformly from {0, 1}.
use crate::{GlweParams, GlweResult, RingElement};
use std::fmt;

#[derive(Clone, PartialEq, Eq)]
pub struct SecretKey {
    polys: Vec<RingElement>,
}

impl SecretKey {
    /// Builds a key from explicit signed coefficients, one slice per rank.
    pub fn from_signed<C: AsRef<[i64]>>(coeffs: &[C], params: &GlweParams) -> GlweResult<Self> {
        let polys = coeffs
            .iter()
            .map(|c| RingElement::from_signed(c.as_ref(), params.ciphertext_modulus()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_polys(polys, params)
    }

    pub fn from_polys(polys: Vec<RingElement>, params: &GlweParams) -> GlweResult<Self> {
        params.check_elements(&polys)?;
        Ok(Self { polys })
    }

    pub fn polys(&self) -> &[RingElement] {
        &self.polys
    }

    pub fn rank(&self) -> usize {
        self.polys.len()
    }

    pub fn degree(&self) -> usize {
        self.polys.first().map_or(0, RingElement::degree)
    }

    pub(crate) fn check(&self, params: &GlweParams) -> GlweResult<()> {
        params.check_elements(&self.polys)
    }
}

// Key material stays out of logs and panic messages.
impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretKey")
            .field("rank", &self.rank())
            .field("degree", &self.degree())
            .finish_non_exhaustive()
    }
}
