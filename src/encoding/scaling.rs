use crate::{GlweParams, GlweResult, Plaintext, RingElement};

/// Maps plaintext symbols mod P onto multiples of `Delta = floor(Q / P)`.
///
/// Decoding rounds half away from zero, so a coefficient decodes to the
/// right symbol while its noise satisfies `|e| <= floor((Delta - 1) / 2)`.
/// Larger noise silently decodes to a neighbouring symbol.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Encoder {
    params: GlweParams,
}

impl Encoder {
    pub fn new(params: GlweParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &GlweParams {
        &self.params
    }

    /// `m_i * Delta mod Q` for every symbol.
    pub fn encode(&self, plaintext: &Plaintext) -> GlweResult<RingElement> {
        self.params.check_plaintext(plaintext)?;
        let delta = self.params.delta();
        let scaled = plaintext.symbols().iter().map(|&m| m * delta).collect();
        Ok(RingElement::from_residues(
            scaled,
            self.params.ciphertext_modulus(),
        )?)
    }

    /// `round(c_i / Delta) mod P` for every coefficient.
    ///
    /// Coefficients in `[P * Delta, Q)` can only come from symbol 0 with
    /// negative noise, so the rounded value is capped at P before reducing.
    pub fn decode(&self, element: &RingElement) -> GlweResult<Plaintext> {
        self.params.check_element(element)?;
        let delta = self.params.delta() as u128;
        let p = self.params.plaintext_modulus() as u128;
        let symbols = element
            .coeffs()
            .iter()
            .map(|&c| {
                let rounded = (2 * c as u128 + delta) / (2 * delta);
                (rounded.min(p) % p) as u64
            })
            .collect();
        Plaintext::new(symbols, &self.params)
    }

    /// Largest per-coefficient noise magnitude that always decodes correctly.
    pub fn noise_bound(&self) -> u64 {
        (self.params.delta() - 1) / 2
    }

    /// Centered noise left in `phase` once the encoding of `expected` is
    /// removed.
    pub fn noise_of(&self, phase: &RingElement, expected: &Plaintext) -> GlweResult<Vec<i64>> {
        let encoded = self.encode(expected)?;
        Ok(phase.checked_sub(&encoded)?.to_centered())
    }
}
