use crate::RingElement;

/// GLWE encryption of zero under the secret key:
/// `b = sum a_i * s_i + e`, with every `a_i` uniform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    pub(crate) mask: Vec<RingElement>,
    pub(crate) body: RingElement,
}

impl PublicKey {
    pub fn mask(&self) -> &[RingElement] {
        &self.mask
    }

    pub fn body(&self) -> &RingElement {
        &self.body
    }

    pub fn rank(&self) -> usize {
        self.mask.len()
    }
}
