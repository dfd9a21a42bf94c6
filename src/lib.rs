//! A small GLWE lattice cryptosystem over Z_q[X]/(X^n + 1): key generation,
//! secret- and public-key encryption, and decryption with rounding-based
//! decoding.

pub mod crypto;
pub mod encoding;
pub mod keys;
pub mod math;
pub mod rings;

pub use crypto::{
    Ciphertext, Decryptor, Encryptor, GlweEngine, GlweEngineBuilder, GlweError, GlweParams,
    GlweResult, Plaintext,
};
pub use encoding::{Encoder, EncodingError};
pub use keys::{KeyGenerator, PublicKey, SecretKey};
pub use math::CoeffDistribution;
pub use rings::{RingElement, RingError};
