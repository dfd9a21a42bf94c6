use super::RingElement;
use std::fmt;

impl fmt::Display for RingElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Alternate (`{:#}`) prints every coefficient
        if f.alternate() {
            return self.fmt_full(f);
        }
        let num = f.precision().unwrap_or(3);
        self.fmt_truncated(f, num)
    }
}

impl RingElement {
    /// First `num` and last `num` coefficients
    fn fmt_truncated(&self, f: &mut fmt::Formatter<'_>, num: usize) -> fmt::Result {
        let coeffs = self.coeffs();
        let len = coeffs.len();
        write!(f, "Ring<{}, {}>[", len, self.modulus())?;

        if len <= num * 2 {
            for (i, c) in coeffs.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{c}")?;
            }
        } else {
            for (i, c) in coeffs.iter().take(num).enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{c}")?;
            }
            write!(f, ", ...")?;
            for c in &coeffs[len - num..] {
                write!(f, ", {c}")?;
            }
        }
        write!(f, "]")
    }

    fn fmt_full(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ring<{}, {}>{:?}", self.degree(), self.modulus(), self.coeffs())
    }
}
