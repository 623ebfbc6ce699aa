//! Hash functions used by key, address and signature encodings
//!
//! Thin wrappers over the RustCrypto `sha2` and `ripemd` crates returning
//! fixed-size arrays.

use bitcrypt_params::traditional::base58check::HASH160_SIZE;
use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

/// SHA-256 output size in bytes
pub const SHA256_OUTPUT_SIZE: usize = 32;

/// Single SHA-256
pub fn sha256(data: &[u8]) -> [u8; SHA256_OUTPUT_SIZE] {
    Sha256::digest(data).into()
}

/// `SHA256(SHA256(data))`, used for checksums and message digests
pub fn hash256(data: &[u8]) -> [u8; SHA256_OUTPUT_SIZE] {
    Sha256::digest(Sha256::digest(data)).into()
}

/// Single RIPEMD-160
pub fn ripemd160(data: &[u8]) -> [u8; HASH160_SIZE] {
    Ripemd160::digest(data).into()
}

/// `RIPEMD160(SHA256(data))`, the public-key hash inside addresses
pub fn hash160(data: &[u8]) -> [u8; HASH160_SIZE] {
    Ripemd160::digest(Sha256::digest(data)).into()
}
