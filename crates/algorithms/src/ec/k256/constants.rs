//! Process-wide secp256k1 parameters, parsed once on first use

use super::field::S256Field;
use super::point::S256Point;
use crate::ec::weierstrass::Point;
use crate::field::FieldElement;
use bitcrypt_params::traditional::secp256k1::{
    SECP256K1_A, SECP256K1_B, SECP256K1_GX_HEX, SECP256K1_GY_HEX, SECP256K1_N_HEX,
    SECP256K1_P_HEX,
};
use num_bigint::BigUint;
use std::sync::LazyLock;

fn parse_hex(hex: &str) -> BigUint {
    BigUint::parse_bytes(hex.as_bytes(), 16).expect("secp256k1 constants are valid hex")
}

/// Field prime p = 2²⁵⁶ − 2³² − 977
pub(crate) static FIELD_PRIME: LazyLock<BigUint> = LazyLock::new(|| parse_hex(SECP256K1_P_HEX));

/// Order n of the generator
pub(crate) static GROUP_ORDER: LazyLock<BigUint> = LazyLock::new(|| parse_hex(SECP256K1_N_HEX));

/// (p + 1) / 4, the square-root exponent for p ≡ 3 (mod 4)
pub(crate) static SQRT_EXPONENT: LazyLock<BigUint> =
    LazyLock::new(|| (&*FIELD_PRIME + 1u32) >> 2);

pub(crate) static CURVE_A: LazyLock<S256Field> = LazyLock::new(|| small_element(SECP256K1_A));

pub(crate) static CURVE_B: LazyLock<S256Field> = LazyLock::new(|| small_element(SECP256K1_B));

/// Base point G
pub(crate) static GENERATOR: LazyLock<S256Point> = LazyLock::new(|| {
    let x = S256Field::from_biguint(parse_hex(SECP256K1_GX_HEX));
    let y = S256Field::from_biguint(parse_hex(SECP256K1_GY_HEX));
    let point = x
        .and_then(|x| y.and_then(|y| Point::from_field_elements(x, y, curve_a(), curve_b())))
        .expect("secp256k1 generator lies on the curve");
    S256Point::from_inner(point)
});

fn small_element(value: u64) -> S256Field {
    FieldElement::new(BigUint::from(value), FIELD_PRIME.clone())
        .map(S256Field::from_inner)
        .expect("curve coefficients are below p")
}

pub(crate) fn curve_a() -> S256Field {
    CURVE_A.clone()
}

pub(crate) fn curve_b() -> S256Field {
    CURVE_B.clone()
}
