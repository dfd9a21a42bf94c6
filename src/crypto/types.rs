use super::{GlweError, GlweResult};
use crate::encoding::{EncodingError, decode_base_p, digits_per_byte, encode_base_p};
use crate::rings::RingError;
use crate::{GlweParams, RingElement};

/// N plaintext symbols, each in `[0, P)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Plaintext {
    symbols: Vec<u64>,
    modulus: u64,
}

impl Plaintext {
    pub fn new(symbols: Vec<u64>, params: &GlweParams) -> GlweResult<Self> {
        let modulus = params.plaintext_modulus();
        if symbols.len() != params.degree() {
            return Err(GlweError::DimensionMismatch {
                expected: params.degree(),
                actual: symbols.len(),
            });
        }
        if let Some(&value) = symbols.iter().find(|&&m| m >= modulus) {
            return Err(EncodingError::SymbolOutOfRange { value, modulus }.into());
        }
        Ok(Self { symbols, modulus })
    }

    pub fn zero(params: &GlweParams) -> Self {
        Self {
            symbols: vec![0; params.degree()],
            modulus: params.plaintext_modulus(),
        }
    }

    /// Packs `data` as base-P digits, least significant first, padded with
    /// zero symbols up to N.
    pub fn from_bytes(data: &[u8], params: &GlweParams) -> GlweResult<Self> {
        let mut symbols = encode_base_p(data, params.plaintext_modulus())?;
        if symbols.len() > params.degree() {
            return Err(EncodingError::MessageTooLong {
                got: symbols.len(),
                max: params.degree(),
            }
            .into());
        }
        symbols.resize(params.degree(), 0);
        Self::new(symbols, params)
    }

    /// Decodes the first `len` bytes packed by [`Plaintext::from_bytes`].
    pub fn to_bytes(&self, len: usize) -> GlweResult<Vec<u8>> {
        let per_byte = digits_per_byte(self.modulus)?;
        let needed = len
            .checked_mul(per_byte)
            .filter(|&needed| needed <= self.symbols.len())
            .ok_or(EncodingError::MessageTooLong {
                got: len.saturating_mul(per_byte),
                max: self.symbols.len(),
            })?;
        Ok(decode_base_p(&self.symbols[..needed], self.modulus)?)
    }

    pub fn symbols(&self) -> &[u64] {
        &self.symbols
    }

    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

/// GLWE ciphertext `(a_1, ..., a_K, b)` with
/// `b = sum a_i * s_i + Delta * m + e`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ciphertext {
    mask: Vec<RingElement>,
    body: RingElement,
}

impl Ciphertext {
    /// Assembles a ciphertext, checking every part shares degree and modulus.
    pub fn from_parts(mask: Vec<RingElement>, body: RingElement) -> GlweResult<Self> {
        if mask.is_empty() {
            return Err(GlweError::DimensionMismatch {
                expected: 1,
                actual: 0,
            });
        }
        for a in &mask {
            if a.degree() != body.degree() {
                return Err(GlweError::DimensionMismatch {
                    expected: body.degree(),
                    actual: a.degree(),
                });
            }
            if a.modulus() != body.modulus() {
                return Err(RingError::ModulusMismatch {
                    expected: body.modulus(),
                    actual: a.modulus(),
                }
                .into());
            }
        }
        Ok(Self { mask, body })
    }

    pub fn mask(&self) -> &[RingElement] {
        &self.mask
    }

    pub fn body(&self) -> &RingElement {
        &self.body
    }

    pub fn rank(&self) -> usize {
        self.mask.len()
    }

    pub fn degree(&self) -> usize {
        self.body.degree()
    }
}
