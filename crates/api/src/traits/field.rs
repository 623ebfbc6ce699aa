//! Finite field capability trait

use crate::Result;

/// Arithmetic in a prime field.
///
/// Every operation returns a new value; operands are never mutated. Binary
/// operations fail with [`Error::IncompatibleField`](crate::Error) when the
/// operands belong to different fields.
pub trait Field: Sized + Clone + PartialEq {
    /// Additive identity of the field `self` belongs to
    fn zero_like(&self) -> Self;

    /// Multiplicative identity of the field `self` belongs to
    fn one_like(&self) -> Self;

    /// Whether this is the additive identity
    fn is_zero(&self) -> bool;

    /// `self + other`
    fn add(&self, other: &Self) -> Result<Self>;

    /// `self - other`
    fn sub(&self, other: &Self) -> Result<Self>;

    /// `self · other`
    fn mul(&self, other: &Self) -> Result<Self>;

    /// `self · other⁻¹`; fails with `DivisionByZero` when `other` is zero
    fn div(&self, other: &Self) -> Result<Self>;

    /// Additive inverse
    fn neg(&self) -> Self;

    /// Multiply by a small integer coefficient
    fn scale_small(&self, coefficient: u64) -> Self;

    /// `self · self`
    fn square(&self) -> Self;
}
