//! Digital Signature Schemes
//!
//! ECDSA over secp256k1: private keys with WIF encoding, low-s signing with
//! random or RFC 6979 nonces, DER-encoded signatures and verification
//! against SEC public points.
//!
//! Enable the `trace` feature to emit nonce retries and verification
//! rejections through the `log` facade. Secret material is never logged.

#![forbid(unsafe_code)]

pub mod traditional;

// Re-exports from traditional schemes
pub use traditional::ecdsa::{
    EcdsaVerify, NonceSource, PrivateKey, RandomNonce, Rfc6979Nonce, Secp256k1Ecdsa,
    Secp256k1PublicKey, Secp256k1Signature, Signature,
};
