//! GLWE encryption and decryption.
//!
//! Secret-key encryption computes `b = sum a_i * s_i + Delta * m + e` with a
//! fresh uniform mask `a` and small noise `e`. Decryption computes the phase
//! `b - sum a_i * s_i = Delta * m + e` and rounds it back to `m`.
//!
//! Decryption never reports noise overflow: once any `|e_i|` exceeds the
//! encoder's noise bound the affected symbols silently decode wrong.
use crate::encoding::Encoder;
use crate::math::{CoeffDistribution, centered_uniform_coefficients, entropy_stream};
use crate::{Ciphertext, GlweParams, GlweResult, Plaintext, PublicKey, RingElement, SecretKey};
use rand::{Rng, TryCryptoRng};
use tracing::{debug, instrument};

pub(crate) fn sample_small<R: Rng + ?Sized>(
    distribution: CoeffDistribution,
    params: &GlweParams,
    rng: &mut R,
) -> GlweResult<RingElement> {
    let coeffs = distribution.sample(params.degree(), rng)?;
    Ok(RingElement::from_signed(&coeffs, params.ciphertext_modulus())?)
}

pub(crate) fn sample_mask<R: Rng + ?Sized>(
    params: &GlweParams,
    rng: &mut R,
) -> GlweResult<RingElement> {
    let q = params.ciphertext_modulus();
    let coeffs = centered_uniform_coefficients(q, params.degree(), rng)?;
    Ok(RingElement::from_signed(&coeffs, q)?)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Encryptor {
    params: GlweParams,
    encoder: Encoder,
}

impl Encryptor {
    pub fn new(params: GlweParams) -> Self {
        Self {
            params,
            encoder: Encoder::new(params),
        }
    }

    /// Secret-key encryption with a fresh mask and noise drawn from `rng`.
    ///
    /// The mask must never be reused across encryptions; drawing it here from
    /// a fresh entropy stream guarantees that.
    #[instrument(
        level = "debug",
        skip_all,
        fields(degree = self.params.degree(), rank = self.params.rank())
    )]
    pub fn encrypt<R: TryCryptoRng>(
        &self,
        plaintext: &Plaintext,
        secret_key: &SecretKey,
        rng: &mut R,
    ) -> GlweResult<Ciphertext> {
        self.params.check_plaintext(plaintext)?;
        secret_key.check(&self.params)?;

        let mut stream = entropy_stream(rng)?;
        let mask = (0..self.params.rank())
            .map(|_| sample_mask(&self.params, &mut stream))
            .collect::<GlweResult<Vec<_>>>()?;
        let noise = sample_small(self.params.noise_distribution(), &self.params, &mut stream)?;

        self.encrypt_with(plaintext, secret_key, &mask, &noise)
    }

    /// Deterministic core of [`Encryptor::encrypt`] with caller-chosen mask
    /// and noise.
    pub fn encrypt_with(
        &self,
        plaintext: &Plaintext,
        secret_key: &SecretKey,
        mask: &[RingElement],
        noise: &RingElement,
    ) -> GlweResult<Ciphertext> {
        secret_key.check(&self.params)?;
        self.params.check_elements(mask)?;
        self.params.check_element(noise)?;

        let scaled = self.encoder.encode(plaintext)?;
        let body = RingElement::inner_product(mask, secret_key.polys())?
            .checked_add(&scaled)?
            .checked_add(noise)?;
        debug!("encrypted under secret key");
        Ciphertext::from_parts(mask.to_vec(), body)
    }

    /// Public-key encryption: with `u` from the key distribution and `e1`,
    /// `e2_i` from the noise distribution,
    /// `b = pk.b * u + Delta * m + e1` and `a_i = pk.a_i * u + e2_i`.
    #[instrument(
        level = "debug",
        skip_all,
        fields(degree = self.params.degree(), rank = self.params.rank())
    )]
    pub fn encrypt_public<R: TryCryptoRng>(
        &self,
        plaintext: &Plaintext,
        public_key: &PublicKey,
        rng: &mut R,
    ) -> GlweResult<Ciphertext> {
        self.params.check_plaintext(plaintext)?;
        self.params.check_elements(public_key.mask())?;
        self.params.check_element(public_key.body())?;

        let mut stream = entropy_stream(rng)?;
        let u = sample_small(self.params.key_distribution(), &self.params, &mut stream)?;
        let e1 = sample_small(self.params.noise_distribution(), &self.params, &mut stream)?;

        let scaled = self.encoder.encode(plaintext)?;
        let body = public_key
            .body()
            .checked_mul(&u)?
            .checked_add(&scaled)?
            .checked_add(&e1)?;

        let mut mask = Vec::with_capacity(self.params.rank());
        for a in public_key.mask() {
            let e2 = sample_small(self.params.noise_distribution(), &self.params, &mut stream)?;
            mask.push(a.checked_mul(&u)?.checked_add(&e2)?);
        }
        debug!("encrypted under public key");
        Ciphertext::from_parts(mask, body)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decryptor {
    params: GlweParams,
    encoder: Encoder,
}

impl Decryptor {
    pub fn new(params: GlweParams) -> Self {
        Self {
            params,
            encoder: Encoder::new(params),
        }
    }

    /// The noisy scaled message `b - sum a_i * s_i`.
    pub fn phase(
        &self,
        ciphertext: &Ciphertext,
        secret_key: &SecretKey,
    ) -> GlweResult<RingElement> {
        secret_key.check(&self.params)?;
        self.params.check_elements(ciphertext.mask())?;
        self.params.check_element(ciphertext.body())?;

        let masked = RingElement::inner_product(ciphertext.mask(), secret_key.polys())?;
        Ok(ciphertext.body().checked_sub(&masked)?)
    }

    /// Decodes the phase. Errors only on mismatched shapes, never on noise.
    #[instrument(
        level = "debug",
        skip_all,
        fields(degree = self.params.degree(), rank = self.params.rank())
    )]
    pub fn decrypt(
        &self,
        ciphertext: &Ciphertext,
        secret_key: &SecretKey,
    ) -> GlweResult<Plaintext> {
        let phase = self.phase(ciphertext, secret_key)?;
        self.encoder.decode(&phase)
    }
}
