//! Additive group capability trait

use crate::Result;

/// An additively written abelian group, such as the points of an elliptic
/// curve under the chord-and-tangent law.
pub trait Group: Sized + Clone + PartialEq {
    /// Identity of the group `self` belongs to
    fn identity_like(&self) -> Self;

    /// Whether this is the identity element
    fn is_identity(&self) -> bool;

    /// Group law; fails with `IncompatibleCurve` for elements of different groups
    fn add(&self, other: &Self) -> Result<Self>;

    /// Inverse element
    fn neg(&self) -> Self;

    /// `self + self`
    fn double(&self) -> Result<Self> {
        self.add(self)
    }

    /// `coefficient · self` by repeated addition.
    ///
    /// Runs in O(coefficient); only suitable for small coefficients.
    fn multiply_naive(&self, coefficient: u64) -> Result<Self> {
        let mut result = self.identity_like();
        for _ in 0..coefficient {
            result = result.add(self)?;
        }
        Ok(result)
    }
}
