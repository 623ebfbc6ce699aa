//! secp256k1 points: scalar multiplication, SEC encoding and addresses

use super::constants::{curve_a, curve_b, GENERATOR, GROUP_ORDER};
use super::field::S256Field;
use crate::ec::weierstrass::Point;
use crate::encoding::{base58, Network};
use crate::error::{validate, Error, Result, ResultExt};
use crate::hash;
use bitcrypt_api::Field;
use bitcrypt_params::traditional::base58check::HASH160_SIZE;
use bitcrypt_params::traditional::secp256k1::{
    SECP256K1_FIELD_ELEMENT_SIZE, SECP256K1_SCALAR_BITS, SECP256K1_SEC_COMPRESSED_SIZE,
    SECP256K1_SEC_UNCOMPRESSED_SIZE, SEC_PREFIX_EVEN, SEC_PREFIX_ODD, SEC_PREFIX_UNCOMPRESSED,
};
use core::fmt;
use num_bigint::BigUint;

/// A point on secp256k1, `y² = x³ + 7` over F_p
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct S256Point(Point<S256Field>);

impl S256Point {
    /// Affine point from integer coordinates, checked against the curve
    pub fn from_integer_coordinates(x: &BigUint, y: &BigUint) -> Result<Self> {
        let x = S256Field::from_biguint(x.clone())?;
        let y = S256Field::from_biguint(y.clone())?;
        Self::from_field_elements(x, y)
    }

    /// Affine point from field elements, checked against the curve
    pub fn from_field_elements(x: S256Field, y: S256Field) -> Result<Self> {
        Point::from_field_elements(x, y, curve_a(), curve_b())
            .map(Self)
            .with_context("S256Point::from_field_elements")
    }

    /// The point at infinity
    pub fn infinity() -> Self {
        Self(Point::infinity(curve_a(), curve_b()))
    }

    /// Base point G
    pub fn generator() -> &'static Self {
        &GENERATOR
    }

    /// Order n of the generator
    pub fn order() -> &'static BigUint {
        &GROUP_ORDER
    }

    pub(crate) fn from_inner(point: Point<S256Field>) -> Self {
        Self(point)
    }

    /// The generic curve point underneath
    pub fn as_point(&self) -> &Point<S256Field> {
        &self.0
    }

    /// Whether this is the point at infinity
    pub fn is_infinity(&self) -> bool {
        self.0.is_infinity()
    }

    /// Affine `x` coordinate, `None` at infinity
    pub fn x(&self) -> Option<&S256Field> {
        self.0.x()
    }

    /// Affine `y` coordinate, `None` at infinity
    pub fn y(&self) -> Option<&S256Field> {
        self.0.y()
    }

    /// Group law
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.0.add(&other.0).map(Self)
    }

    /// `self + self`
    pub fn double(&self) -> Result<Self> {
        self.0.double().map(Self)
    }

    /// Additive inverse
    pub fn neg(&self) -> Self {
        Self(self.0.neg())
    }

    /// `coefficient · self`.
    ///
    /// The coefficient is first reduced modulo n, then consumed by a
    /// double-and-add ladder that always runs for exactly 256 bit positions,
    /// whatever the coefficient's bit length. Coefficients that reduce to
    /// zero give the point at infinity.
    pub fn multiply(&self, coefficient: &BigUint) -> Result<Self> {
        let coefficient = coefficient % &*GROUP_ORDER;
        let mut current = self.clone();
        let mut result = Self::infinity();
        for i in 0..SECP256K1_SCALAR_BITS as u64 {
            if coefficient.bit(i) {
                result = result.add(&current)?;
            }
            current = current.double()?;
        }
        Ok(result)
    }

    fn affine_coordinates(&self, context: &'static str) -> Result<(&S256Field, &S256Field)> {
        match (self.0.x(), self.0.y()) {
            (Some(x), Some(y)) => Ok((x, y)),
            _ => Err(Error::param(
                context,
                "the point at infinity has no affine encoding",
            )),
        }
    }

    /// SEC encoding.
    ///
    /// Compressed: `0x02`/`0x03` (even/odd y) followed by 32 bytes of x.
    /// Uncompressed: `0x04` followed by 32 bytes each of x and y. The point
    /// at infinity cannot be encoded.
    pub fn sec(&self, compressed: bool) -> Result<Vec<u8>> {
        let (x, y) = self.affine_coordinates("S256Point::sec")?;
        let mut out = Vec::with_capacity(if compressed {
            SECP256K1_SEC_COMPRESSED_SIZE
        } else {
            SECP256K1_SEC_UNCOMPRESSED_SIZE
        });
        if compressed {
            out.push(if y.is_odd() { SEC_PREFIX_ODD } else { SEC_PREFIX_EVEN });
            out.extend_from_slice(&x.to_be_bytes());
        } else {
            out.push(SEC_PREFIX_UNCOMPRESSED);
            out.extend_from_slice(&x.to_be_bytes());
            out.extend_from_slice(&y.to_be_bytes());
        }
        Ok(out)
    }

    /// Parse a compressed or uncompressed SEC encoding.
    ///
    /// For compressed input, y is recovered as a square root of `x³ + 7` and
    /// the root with the parity named by the prefix is chosen.
    pub fn parse_sec(bytes: &[u8]) -> Result<Self> {
        const CONTEXT: &str = "S256Point::parse_sec";
        let prefix = *bytes
            .first()
            .ok_or_else(|| Error::encoding(CONTEXT, "empty SEC encoding"))?;

        match prefix {
            SEC_PREFIX_UNCOMPRESSED => {
                validate::length(CONTEXT, bytes.len(), SECP256K1_SEC_UNCOMPRESSED_SIZE)?;
                let (x, y) = bytes[1..].split_at(SECP256K1_FIELD_ELEMENT_SIZE);
                let x = S256Field::from_be_bytes(x).with_context(CONTEXT)?;
                let y = S256Field::from_be_bytes(y).with_context(CONTEXT)?;
                Self::from_field_elements(x, y).with_context(CONTEXT)
            }
            SEC_PREFIX_EVEN | SEC_PREFIX_ODD => {
                validate::length(CONTEXT, bytes.len(), SECP256K1_SEC_COMPRESSED_SIZE)?;
                let x = S256Field::from_be_bytes(&bytes[1..]).with_context(CONTEXT)?;
                let alpha = x.square().mul(&x)?.add(&curve_b())?;
                let beta = alpha
                    .sqrt()
                    .ok_or(Error::CurveMembership { context: CONTEXT })?;
                let want_odd = prefix == SEC_PREFIX_ODD;
                let y = if beta.is_odd() == want_odd { beta } else { beta.neg() };
                Ok(Self(Point::from_field_elements(x, y, curve_a(), curve_b())?))
            }
            other => Err(Error::encoding(
                CONTEXT,
                format!("unknown SEC prefix 0x{:02x}", other),
            )),
        }
    }

    /// `RIPEMD160(SHA256(sec(compressed)))`
    pub fn hash160(&self, compressed: bool) -> Result<[u8; HASH160_SIZE]> {
        Ok(hash::hash160(&self.sec(compressed)?))
    }

    /// Base58Check P2PKH address for the given network
    pub fn address(&self, compressed: bool, network: Network) -> Result<String> {
        let h160 = self.hash160(compressed)?;
        let mut payload = Vec::with_capacity(1 + HASH160_SIZE);
        payload.push(network.address_version());
        payload.extend_from_slice(&h160);
        Ok(base58::encode_check(&payload))
    }
}

impl fmt::Display for S256Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.0.x(), self.0.y()) {
            (Some(x), Some(y)) => write!(f, "S256Point({}, {})", x, y),
            _ => write!(f, "S256Point(infinity)"),
        }
    }
}
