use super::builder::GlweEngineBuilder;
use super::operations::{Decryptor, Encryptor};
use super::types::{Ciphertext, Plaintext};
use crate::encoding::Encoder;
use crate::{GlweParams, GlweResult, KeyGenerator, PublicKey, SecretKey};
use rand::TryCryptoRng;
use tracing::{info, warn};

/// Bundles a parameter set with the key generator, encoder, encryptor and
/// decryptor built from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlweEngine {
    params: GlweParams,
    key_generator: KeyGenerator,
    encoder: Encoder,
    encryptor: Encryptor,
    decryptor: Decryptor,
}

impl GlweEngine {
    pub fn builder() -> GlweEngineBuilder {
        GlweEngineBuilder::new()
    }

    pub fn new(params: GlweParams) -> Self {
        info!(
            q = params.ciphertext_modulus(),
            p = params.plaintext_modulus(),
            n = params.degree(),
            k = params.rank(),
            delta = params.delta(),
            "GLWE engine ready"
        );
        if params.noise_distribution() == params.key_distribution() {
            warn!(
                distribution = ?params.noise_distribution(),
                "encryption noise reuses the secret key distribution"
            );
        }
        Self {
            params,
            key_generator: KeyGenerator::new(params),
            encoder: Encoder::new(params),
            encryptor: Encryptor::new(params),
            decryptor: Decryptor::new(params),
        }
    }

    pub fn params(&self) -> &GlweParams {
        &self.params
    }

    pub fn key_generator(&self) -> &KeyGenerator {
        &self.key_generator
    }

    pub fn encoder(&self) -> &Encoder {
        &self.encoder
    }

    pub fn encryptor(&self) -> &Encryptor {
        &self.encryptor
    }

    pub fn decryptor(&self) -> &Decryptor {
        &self.decryptor
    }

    pub fn plaintext(&self, symbols: Vec<u64>) -> GlweResult<Plaintext> {
        Plaintext::new(symbols, &self.params)
    }

    pub fn plaintext_from_bytes(&self, data: &[u8]) -> GlweResult<Plaintext> {
        Plaintext::from_bytes(data, &self.params)
    }

    pub fn generate_secret_key<R: TryCryptoRng>(&self, rng: &mut R) -> GlweResult<SecretKey> {
        self.key_generator.generate_secret_key(rng)
    }

    pub fn generate_keypair<R: TryCryptoRng>(
        &self,
        rng: &mut R,
    ) -> GlweResult<(SecretKey, PublicKey)> {
        self.key_generator.generate_keypair(rng)
    }

    pub fn encrypt<R: TryCryptoRng>(
        &self,
        plaintext: &Plaintext,
        secret_key: &SecretKey,
        rng: &mut R,
    ) -> GlweResult<Ciphertext> {
        self.encryptor.encrypt(plaintext, secret_key, rng)
    }

    pub fn encrypt_public<R: TryCryptoRng>(
        &self,
        plaintext: &Plaintext,
        public_key: &PublicKey,
        rng: &mut R,
    ) -> GlweResult<Ciphertext> {
        self.encryptor.encrypt_public(plaintext, public_key, rng)
    }

    pub fn decrypt(
        &self,
        ciphertext: &Ciphertext,
        secret_key: &SecretKey,
    ) -> GlweResult<Plaintext> {
        self.decryptor.decrypt(ciphertext, secret_key)
    }
}
