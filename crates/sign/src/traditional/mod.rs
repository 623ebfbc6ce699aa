//! Traditional signature schemes
//!
//! This module contains ECDSA over the secp256k1 curve.

pub mod ecdsa;

// Re-export ECDSA types
pub use ecdsa::{
    EcdsaVerify, PrivateKey, Secp256k1Ecdsa, Secp256k1PublicKey, Secp256k1Signature, Signature,
};
