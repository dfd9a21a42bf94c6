use super::{RingError, RingResult};
use std::ops::Neg;

/// Element of the negacyclic ring Z_q[X]/(X^n + 1) where:
/// q - coefficient modulus
/// n - ring degree, a power of two
///
/// Coefficients are always kept in the canonical range `[0, q)` and the
/// element is never mutated after construction; every operation returns a
/// new element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RingElement {
    coeffs: Vec<u64>,
    modulus: u64,
}

fn validate_shape(degree: usize, modulus: u64) -> RingResult<()> {
    if !degree.is_power_of_two() {
        return Err(RingError::InvalidDegree { degree });
    }
    if modulus <= 1 {
        return Err(RingError::InvalidModulus { modulus });
    }
    Ok(())
}

impl RingElement {
    pub fn zero(degree: usize, modulus: u64) -> RingResult<Self> {
        validate_shape(degree, modulus)?;
        Ok(Self {
            coeffs: vec![0; degree],
            modulus,
        })
    }

    /// Builds an element from unsigned coefficients, reducing each mod q.
    /// The degree is the length of `coeffs`.
    pub fn from_residues(coeffs: Vec<u64>, modulus: u64) -> RingResult<Self> {
        validate_shape(coeffs.len(), modulus)?;
        let coeffs = coeffs.into_iter().map(|c| c % modulus).collect();
        Ok(Self { coeffs, modulus })
    }

    /// Builds an element from signed coefficients, mapping negatives to
    /// their residues (`-1` becomes `q - 1`).
    pub fn from_signed(coeffs: &[i64], modulus: u64) -> RingResult<Self> {
        validate_shape(coeffs.len(), modulus)?;
        let q = i128::from(modulus);
        let coeffs = coeffs
            .iter()
            .map(|&c| i128::from(c).rem_euclid(q) as u64)
            .collect();
        Ok(Self { coeffs, modulus })
    }

    /// The monomial `X^power`, with `X^n = -1` applied for `power >= n`.
    pub fn monomial(power: usize, degree: usize, modulus: u64) -> RingResult<Self> {
        let mut element = Self::zero(degree, modulus)?;
        let wraps = (power / degree) % 2 == 1;
        element.coeffs[power % degree] = if wraps { modulus - 1 } else { 1 };
        Ok(element)
    }

    pub fn degree(&self) -> usize {
        self.coeffs.len()
    }

    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    pub fn coeffs(&self) -> &[u64] {
        &self.coeffs
    }

    /// Coefficients lifted to the centered range `(-q/2, q/2]`.
    pub fn to_centered(&self) -> Vec<i64> {
        let half = self.modulus / 2;
        self.coeffs
            .iter()
            .map(|&c| {
                if c > half {
                    -((self.modulus - c) as i64)
                } else {
                    c as i64
                }
            })
            .collect()
    }

    fn check_compatible(&self, rhs: &Self) -> RingResult<()> {
        if self.modulus != rhs.modulus {
            return Err(RingError::ModulusMismatch {
                expected: self.modulus,
                actual: rhs.modulus,
            });
        }
        if self.degree() != rhs.degree() {
            return Err(RingError::DimensionMismatch {
                expected: self.degree(),
                actual: rhs.degree(),
            });
        }
        Ok(())
    }

    /// Coefficient-wise addition mod q.
    pub fn checked_add(&self, rhs: &Self) -> RingResult<Self> {
        self.check_compatible(rhs)?;
        let q = self.modulus as u128;
        let coeffs = self
            .coeffs
            .iter()
            .zip(&rhs.coeffs)
            .map(|(&a, &b)| ((a as u128 + b as u128) % q) as u64)
            .collect();
        Ok(Self {
            coeffs,
            modulus: self.modulus,
        })
    }

    /// Coefficient-wise subtraction mod q, always non-negative.
    pub fn checked_sub(&self, rhs: &Self) -> RingResult<Self> {
        self.check_compatible(rhs)?;
        let q = self.modulus as u128;
        let coeffs = self
            .coeffs
            .iter()
            .zip(&rhs.coeffs)
            .map(|(&a, &b)| ((a as u128 + q - b as u128) % q) as u64)
            .collect();
        Ok(Self {
            coeffs,
            modulus: self.modulus,
        })
    }

    /// Schoolbook negacyclic convolution.
    ///
    /// The product of coefficients `i` and `j` lands on index `(i + j) mod n`
    /// and is negated when `i + j >= n`, since `X^n = -1`. Every accumulation
    /// step is reduced mod q.
    pub fn checked_mul(&self, rhs: &Self) -> RingResult<Self> {
        self.check_compatible(rhs)?;
        let n = self.degree();
        let q = self.modulus as u128;
        let mut result = vec![0u64; n];

        for (i, &a) in self.coeffs.iter().enumerate() {
            for (j, &b) in rhs.coeffs.iter().enumerate() {
                let prod = (a as u128 * b as u128) % q;
                let pos = i + j;
                if pos < n {
                    result[pos] = ((result[pos] as u128 + prod) % q) as u64;
                } else {
                    // X^(n+k) = -X^k
                    let wrapped = pos - n;
                    result[wrapped] = ((result[wrapped] as u128 + q - prod) % q) as u64;
                }
            }
        }

        Ok(Self {
            coeffs: result,
            modulus: self.modulus,
        })
    }

    /// Multiplies every coefficient by `scalar` mod q.
    pub fn scalar_mul(&self, scalar: u64) -> Self {
        let q = self.modulus as u128;
        let s = scalar as u128 % q;
        let coeffs = self
            .coeffs
            .iter()
            .map(|&c| ((c as u128 * s) % q) as u64)
            .collect();
        Self {
            coeffs,
            modulus: self.modulus,
        }
    }

    /// Sum of pairwise products `sum_i lhs[i] * rhs[i]`, the GLWE inner
    /// product between a mask and a secret key.
    pub fn inner_product(lhs: &[Self], rhs: &[Self]) -> RingResult<Self> {
        if lhs.len() != rhs.len() {
            return Err(RingError::DimensionMismatch {
                expected: lhs.len(),
                actual: rhs.len(),
            });
        }
        let first = lhs.first().ok_or(RingError::DimensionMismatch {
            expected: 1,
            actual: 0,
        })?;
        let mut acc = Self::zero(first.degree(), first.modulus())?;
        for (a, s) in lhs.iter().zip(rhs) {
            acc = acc.checked_add(&a.checked_mul(s)?)?;
        }
        Ok(acc)
    }
}

impl Neg for &RingElement {
    type Output = RingElement;

    fn neg(self) -> RingElement {
        let coeffs = self
            .coeffs
            .iter()
            .map(|&c| (self.modulus - c) % self.modulus)
            .collect();
        RingElement {
            coeffs,
            modulus: self.modulus,
        }
    }
}

impl<'a> IntoIterator for &'a RingElement {
    type Item = &'a u64;
    type IntoIter = std::slice::Iter<'a, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.coeffs.iter()
    }
}
