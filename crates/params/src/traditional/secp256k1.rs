//! Constants for the secp256k1 curve (SEC 2, section 2.4.1)
//!
//! y² = x³ + 7 over F_p with p = 2²⁵⁶ − 2³² − 977.

/// Field prime p, big-endian hex
pub const SECP256K1_P_HEX: &str =
    "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2F";

/// Order n of the base point, big-endian hex
pub const SECP256K1_N_HEX: &str =
    "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141";

/// x-coordinate of the base point G, big-endian hex
pub const SECP256K1_GX_HEX: &str =
    "79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798";

/// y-coordinate of the base point G, big-endian hex
pub const SECP256K1_GY_HEX: &str =
    "483ADA7726A3C4655DA4FBFC0E1108A8FD17B448A68554199C47D08FFB10D4B8";

/// Curve coefficient a
pub const SECP256K1_A: u64 = 0;

/// Curve coefficient b
pub const SECP256K1_B: u64 = 7;

/// Bit width consumed by the double-and-add ladder
pub const SECP256K1_SCALAR_BITS: usize = 256;

/// Size of a field element or scalar in bytes
pub const SECP256K1_FIELD_ELEMENT_SIZE: usize = 32;

/// Size of a compressed SEC point: prefix (0x02/0x03) + x-coordinate
pub const SECP256K1_SEC_COMPRESSED_SIZE: usize = 1 + SECP256K1_FIELD_ELEMENT_SIZE;

/// Size of an uncompressed SEC point: prefix (0x04) + x-coordinate + y-coordinate
pub const SECP256K1_SEC_UNCOMPRESSED_SIZE: usize = 1 + 2 * SECP256K1_FIELD_ELEMENT_SIZE;

/// SEC prefix for a compressed point with even y
pub const SEC_PREFIX_EVEN: u8 = 0x02;

/// SEC prefix for a compressed point with odd y
pub const SEC_PREFIX_ODD: u8 = 0x03;

/// SEC prefix for an uncompressed point
pub const SEC_PREFIX_UNCOMPRESSED: u8 = 0x04;
