//! GLWE parameters, key-based encryption and decryption.

pub mod builder;
pub mod engine;
pub mod errors;
pub mod operations;
pub mod params;
pub mod types;

pub use builder::GlweEngineBuilder;
pub use engine::GlweEngine;
pub use errors::{GlweError, GlweResult};
pub use operations::{Decryptor, Encryptor};
pub use params::{GlweParams, MAX_CIPHERTEXT_MODULUS};
pub use types::{Ciphertext, Plaintext};
