//! ECDSA signature implementation for secp256k1
//!
//! [`common`] holds the curve-independent signature value and its DER
//! codec; [`k256`] holds keys, nonce generation, verification and the
//! scheme adapter.

pub mod common;
pub mod k256;

pub use common::Signature;

// Re-export secp256k1 types
pub use k256::{
    EcdsaVerify, NonceSource, PrivateKey, RandomNonce, Rfc6979Nonce, Secp256k1Ecdsa,
    Secp256k1PublicKey, Secp256k1Signature,
};
