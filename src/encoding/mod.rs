//! Plaintext encodings.
//!
//! [`Encoder`] scales plaintext symbols mod P into the message slot mod Q and
//! rounds them back out. [`bytes`] packs byte strings into base-P digits.

pub mod bytes;
mod scaling;

pub use bytes::{decode_base_p, digits_per_byte, encode_base_p};
pub use scaling::Encoder;

use thiserror::Error;

pub type EncodingResult<T> = Result<T, EncodingError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodingError {
    #[error("Symbol {value} out of range for plaintext modulus {modulus}")]
    SymbolOutOfRange { value: u64, modulus: u64 },

    #[error("Message too long: got {got} symbols, max {max}")]
    MessageTooLong { got: usize, max: usize },

    #[error("Invalid digits: {message}")]
    InvalidDigits { message: String },
}
