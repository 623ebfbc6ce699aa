//! Field elements of the secp256k1 base field F_p

use super::constants::{FIELD_PRIME, SQRT_EXPONENT};
use crate::error::Result;
use crate::field::FieldElement;
use bitcrypt_api::Field;
use core::fmt;
use num_bigint::BigUint;

/// An element of F_p with p = 2²⁵⁶ − 2³² − 977.
///
/// Wraps a [`FieldElement`] whose modulus is always the secp256k1 prime, so
/// coordinates from any other field cannot be mixed in by construction.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct S256Field(FieldElement);

impl S256Field {
    /// Element with the given value; fails with `Domain` when `value >= p`
    pub fn from_biguint(value: BigUint) -> Result<Self> {
        FieldElement::new(value, FIELD_PRIME.clone()).map(Self)
    }

    /// Element from 32 big-endian bytes
    pub fn from_be_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_biguint(BigUint::from_bytes_be(bytes))
    }

    pub(crate) fn from_inner(inner: FieldElement) -> Self {
        Self(inner)
    }

    /// Canonical representative in `[0, p)`
    pub fn value(&self) -> &BigUint {
        self.0.value()
    }

    /// The underlying generic field element
    pub fn as_field_element(&self) -> &FieldElement {
        &self.0
    }

    /// Whether the canonical representative is odd
    pub fn is_odd(&self) -> bool {
        self.0.is_odd()
    }

    /// Value as 64 lowercase hex digits
    pub fn hex(&self) -> String {
        format!("{:064x}", self.0.value())
    }

    /// Value as 32 big-endian bytes
    pub fn to_be_bytes(&self) -> [u8; 32] {
        let mut out = [0u8; 32];
        let bytes = self.0.value().to_bytes_be();
        // value < p < 2²⁵⁶, so at most 32 bytes
        out[32 - bytes.len()..].copy_from_slice(&bytes);
        out
    }

    /// Square root, if this element is a quadratic residue.
    ///
    /// Uses `self^((p+1)/4)`, valid because p ≡ 3 (mod 4). Of the two roots
    /// `r` and `p - r`, whichever the exponentiation lands on is returned.
    pub fn sqrt(&self) -> Option<Self> {
        let candidate = self.0.value().modpow(&SQRT_EXPONENT, &FIELD_PRIME);
        let root = Self(FieldElement::new(candidate, FIELD_PRIME.clone()).ok()?);
        if root.0.square() == self.0 {
            Some(root)
        } else {
            None
        }
    }

    /// `self^exponent` for a non-negative exponent
    pub fn pow(&self, exponent: &BigUint) -> Result<Self> {
        self.0.pow(exponent.clone()).map(Self)
    }
}

impl fmt::Display for S256Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

impl Field for S256Field {
    fn zero_like(&self) -> Self {
        Self(self.0.zero_like())
    }

    fn one_like(&self) -> Self {
        Self(self.0.one_like())
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    fn add(&self, other: &Self) -> Result<Self> {
        self.0.add(&other.0).map(Self)
    }

    fn sub(&self, other: &Self) -> Result<Self> {
        self.0.sub(&other.0).map(Self)
    }

    fn mul(&self, other: &Self) -> Result<Self> {
        self.0.mul(&other.0).map(Self)
    }

    fn div(&self, other: &Self) -> Result<Self> {
        self.0.div(&other.0).map(Self)
    }

    fn neg(&self) -> Self {
        Self(self.0.neg())
    }

    fn scale_small(&self, coefficient: u64) -> Self {
        Self(self.0.scale(coefficient))
    }

    fn square(&self) -> Self {
        Self(self.0.square())
    }
}
