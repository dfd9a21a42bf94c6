use super::{EncodingError, EncodingResult};

/// Number of base-`p` digits needed to hold one byte: the smallest `d` with
/// `p^d >= 256`, or 1 once `p` exceeds a byte.
pub fn digits_per_byte(p: u64) -> EncodingResult<usize> {
    if p < 2 {
        return Err(EncodingError::InvalidDigits {
            message: format!("base {p} must be at least 2"),
        });
    }
    let mut digits = 1;
    let mut capacity = p;
    while capacity < 256 {
        capacity = capacity.saturating_mul(p);
        digits += 1;
    }
    Ok(digits)
}

/// Splits every byte into base-`p` digits, least significant first.
pub fn encode_base_p(data: &[u8], p: u64) -> EncodingResult<Vec<u64>> {
    let per_byte = digits_per_byte(p)?;
    let mut encoded = Vec::with_capacity(data.len() * per_byte);
    for &byte in data {
        let mut rem = u64::from(byte);
        for _ in 0..per_byte {
            encoded.push(rem % p);
            rem /= p;
        }
    }
    Ok(encoded)
}

/// Inverse of [`encode_base_p`].
pub fn decode_base_p(digits: &[u64], p: u64) -> EncodingResult<Vec<u8>> {
    let per_byte = digits_per_byte(p)?;
    if digits.len() % per_byte != 0 {
        return Err(EncodingError::InvalidDigits {
            message: format!(
                "{} digits is not a multiple of {per_byte} digits per byte",
                digits.len()
            ),
        });
    }

    digits
        .chunks(per_byte)
        .map(|chunk| {
            let mut value: u64 = 0;
            for &digit in chunk.iter().rev() {
                if digit >= p {
                    return Err(EncodingError::SymbolOutOfRange {
                        value: digit,
                        modulus: p,
                    });
                }
                value = value.saturating_mul(p).saturating_add(digit);
            }
            u8::try_from(value).map_err(|_| EncodingError::InvalidDigits {
                message: format!("digits decode to {value}, which is not a byte"),
            })
        })
        .collect()
}
