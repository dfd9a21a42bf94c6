use super::{PublicKey, SecretKey};
use crate::crypto::operations::{sample_mask, sample_small};
use crate::math::entropy_stream;
use crate::{GlweParams, GlweResult, RingElement};
use rand::TryCryptoRng;
use tracing::{debug, instrument};

/// Samples secret keys and public keys for a parameter set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyGenerator {
    params: GlweParams,
}

impl KeyGenerator {
    pub fn new(params: GlweParams) -> Self {
        Self { params }
    }

    /// Draws K polynomials with N coefficients each from the key
    /// distribution. Fails only when `rng` fails.
    #[instrument(
        level = "debug",
        skip_all,
        fields(degree = self.params.degree(), rank = self.params.rank())
    )]
    pub fn generate_secret_key<R: TryCryptoRng>(&self, rng: &mut R) -> GlweResult<SecretKey> {
        let mut stream = entropy_stream(rng)?;
        let polys = (0..self.params.rank())
            .map(|_| sample_small(self.params.key_distribution(), &self.params, &mut stream))
            .collect::<GlweResult<Vec<_>>>()?;
        debug!(distribution = ?self.params.key_distribution(), "sampled secret key");
        SecretKey::from_polys(polys, &self.params)
    }

    /// `b = sum a_i * s_i + e` with fresh uniform `a_i` and noise `e`.
    #[instrument(
        level = "debug",
        skip_all,
        fields(degree = self.params.degree(), rank = self.params.rank())
    )]
    pub fn generate_public_key<R: TryCryptoRng>(
        &self,
        secret_key: &SecretKey,
        rng: &mut R,
    ) -> GlweResult<PublicKey> {
        secret_key.check(&self.params)?;
        let mut stream = entropy_stream(rng)?;
        let mask = (0..self.params.rank())
            .map(|_| sample_mask(&self.params, &mut stream))
            .collect::<GlweResult<Vec<_>>>()?;
        let noise = sample_small(self.params.noise_distribution(), &self.params, &mut stream)?;

        let body = RingElement::inner_product(&mask, secret_key.polys())?.checked_add(&noise)?;
        debug!("sampled public key");
        Ok(PublicKey { mask, body })
    }

    pub fn generate_keypair<R: TryCryptoRng>(
        &self,
        rng: &mut R,
    ) -> GlweResult<(SecretKey, PublicKey)> {
        let secret_key = self.generate_secret_key(rng)?;
        let public_key = self.generate_public_key(&secret_key, rng)?;
        Ok((secret_key, public_key))
    }
}
