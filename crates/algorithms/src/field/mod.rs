//! Prime-field arithmetic over arbitrary moduli
//!
//! [`FieldElement`] holds a value in `[0, p)` together with its modulus `p`.
//! Elements of different fields can coexist; combining them is an error
//! rather than a silent reduction into one of the two fields.
//!
//! The modulus is assumed to be prime. Primality is not checked, since the
//! moduli in use are either small textbook primes or fixed curve parameters.

use crate::error::{Error, Result, ResultExt};
use bitcrypt_api::Field;
use core::fmt;
use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Zero};

/// An element of the prime field `F_p`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FieldElement {
    value: BigUint,
    modulus: BigUint,
}

impl FieldElement {
    /// Create an element with the given value in the field of order `modulus`.
    ///
    /// Fails with [`Error::Domain`] when `value >= modulus` or the modulus
    /// is smaller than 2.
    pub fn new(value: BigUint, modulus: BigUint) -> Result<Self> {
        if modulus < BigUint::from(2u32) {
            return Err(Error::domain(
                "FieldElement::new",
                "modulus must be at least 2",
            ));
        }
        if value >= modulus {
            return Err(Error::domain(
                "FieldElement::new",
                format!("{} not in field range 0 to {}", value, &modulus - 1u32),
            ));
        }
        Ok(Self { value, modulus })
    }

    /// Shorthand for small fields whose value and modulus fit in a `u64`
    pub fn from_u64(value: u64, modulus: u64) -> Result<Self> {
        Self::new(BigUint::from(value), BigUint::from(modulus))
    }

    /// The additive identity of `F_modulus`
    pub fn zero(modulus: BigUint) -> Result<Self> {
        Self::new(BigUint::zero(), modulus)
    }

    /// The multiplicative identity of `F_modulus`
    pub fn one(modulus: BigUint) -> Result<Self> {
        Self::new(BigUint::one(), modulus)
    }

    /// Canonical representative in `[0, p)`
    pub fn value(&self) -> &BigUint {
        &self.value
    }

    /// Order of the field this element belongs to
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// Whether this is the additive identity
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// Whether the canonical representative is odd
    pub fn is_odd(&self) -> bool {
        self.value.is_odd()
    }

    /// Same field, new (already reduced) value
    fn with_value(&self, value: BigUint) -> Self {
        Self {
            value,
            modulus: self.modulus.clone(),
        }
    }

    fn ensure_same_field(&self, other: &Self, context: &'static str) -> Result<()> {
        if self.modulus != other.modulus {
            return Err(Error::IncompatibleField { context });
        }
        Ok(())
    }

    /// `(self + other) mod p`
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.ensure_same_field(other, "FieldElement::add")?;
        Ok(self.with_value((&self.value + &other.value) % &self.modulus))
    }

    /// `(self - other) mod p`, always non-negative
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.ensure_same_field(other, "FieldElement::sub")?;
        let value = if self.value >= other.value {
            &self.value - &other.value
        } else {
            &self.modulus - (&other.value - &self.value)
        };
        Ok(self.with_value(value))
    }

    /// `(self · other) mod p`
    pub fn mul(&self, other: &Self) -> Result<Self> {
        self.ensure_same_field(other, "FieldElement::mul")?;
        Ok(self.with_value((&self.value * &other.value) % &self.modulus))
    }

    /// Raise to an arbitrary integer power.
    ///
    /// The exponent is reduced modulo `p - 1` with a non-negative result, so
    /// negative exponents denote powers of the inverse. Zero raised to a
    /// negative power fails with [`Error::DivisionByZero`]; zero raised to
    /// a positive power stays zero.
    pub fn pow<E: Into<BigInt>>(&self, exponent: E) -> Result<Self> {
        let exponent = exponent.into();
        if self.is_zero() {
            return match exponent.sign() {
                num_bigint::Sign::Minus => Err(Error::DivisionByZero {
                    context: "FieldElement::pow",
                }),
                num_bigint::Sign::NoSign => Ok(self.with_value(BigUint::one())),
                num_bigint::Sign::Plus => Ok(self.clone()),
            };
        }
        let order = BigInt::from(&self.modulus - 1u32);
        let (_, reduced) = exponent.mod_floor(&order).into_parts();
        Ok(self.with_value(self.value.modpow(&reduced, &self.modulus)))
    }

    /// Multiplicative inverse via Fermat's little theorem
    pub fn inverse(&self) -> Result<Self> {
        if self.is_zero() {
            return Err(Error::DivisionByZero {
                context: "FieldElement::inverse",
            });
        }
        let exponent = &self.modulus - 2u32;
        Ok(self.with_value(self.value.modpow(&exponent, &self.modulus)))
    }

    /// `self · other^(p-2) mod p`
    pub fn div(&self, other: &Self) -> Result<Self> {
        self.ensure_same_field(other, "FieldElement::div")?;
        let inverse = other.inverse().with_context("FieldElement::div")?;
        self.mul(&inverse)
    }

    /// Multiply by an integer coefficient, reducing the coefficient mod `p`
    pub fn scale<C: Into<BigInt>>(&self, coefficient: C) -> Self {
        let modulus = BigInt::from(self.modulus.clone());
        let product = BigInt::from(self.value.clone()) * coefficient.into();
        let (_, value) = product.mod_floor(&modulus).into_parts();
        self.with_value(value)
    }

    /// Additive inverse
    pub fn neg(&self) -> Self {
        if self.is_zero() {
            return self.clone();
        }
        self.with_value(&self.modulus - &self.value)
    }

    /// `self · self`
    pub fn square(&self) -> Self {
        self.with_value((&self.value * &self.value) % &self.modulus)
    }
}

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldElement_{}({})", self.modulus, self.value)
    }
}

impl Field for FieldElement {
    fn zero_like(&self) -> Self {
        self.with_value(BigUint::zero())
    }

    fn one_like(&self) -> Self {
        self.with_value(BigUint::one())
    }

    fn is_zero(&self) -> bool {
        FieldElement::is_zero(self)
    }

    fn add(&self, other: &Self) -> Result<Self> {
        FieldElement::add(self, other)
    }

    fn sub(&self, other: &Self) -> Result<Self> {
        FieldElement::sub(self, other)
    }

    fn mul(&self, other: &Self) -> Result<Self> {
        FieldElement::mul(self, other)
    }

    fn div(&self, other: &Self) -> Result<Self> {
        FieldElement::div(self, other)
    }

    fn neg(&self) -> Self {
        FieldElement::neg(self)
    }

    fn scale_small(&self, coefficient: u64) -> Self {
        self.scale(coefficient)
    }

    fn square(&self) -> Self {
        FieldElement::square(self)
    }
}

#[cfg(test)]
mod tests;
