//! Constants for the secp256k1 key system

pub mod base58check;
pub mod ecdsa;
pub mod secp256k1;
