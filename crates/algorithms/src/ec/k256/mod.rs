//! Koblitz secp256k1 Elliptic Curve Primitives
//!
//! The curve equation is y² = x³ + 7 over the prime field F_p where:
//! - p = 2^256 - 2^32 - 977
//! - The curve order n = 0xFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141
//!
//! [`S256Field`] and [`S256Point`] bind the generic field and point types to
//! these fixed parameters. Arithmetic is arbitrary precision and is not
//! constant time; the scalar ladder has a fixed iteration count but the
//! group law underneath branches on its inputs.

mod constants;
mod field;
mod point;

pub use field::S256Field;
pub use point::S256Point;

use crate::error::Result;
use num_bigint::BigUint;

/// Get the standard base point G of the secp256k1 curve
pub fn base_point_g() -> &'static S256Point {
    S256Point::generator()
}

/// Scalar multiplication with the base point: scalar * G
pub fn scalar_mult_base_g(scalar: &BigUint) -> Result<S256Point> {
    S256Point::generator().multiply(scalar)
}

#[cfg(test)]
mod tests;
