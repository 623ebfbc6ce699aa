//! Field, curve and encoding primitives behind secp256k1 keys
//!
//! This crate provides the arithmetic layers that the signing crate builds
//! on:
//!
//! - [`field`]: prime-field elements over arbitrary moduli
//! - [`ec`]: the short Weierstrass group law, generic over the field, and
//!   its secp256k1 binding
//! - [`hash`]: SHA-256, RIPEMD-160 and their Bitcoin compositions
//! - [`encoding`]: Base58, Base58Check and the network version bytes
//!
//! Arithmetic is arbitrary precision via `num-bigint` and makes no
//! constant-time claims.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result, ResultExt};

// Prime fields
pub mod field;
pub use field::FieldElement;

// Elliptic Curve primitives
pub mod ec;
pub use ec::{k256, Point, S256Field, S256Point};

// Hash collaborators
pub mod hash;
pub use hash::{hash160, hash256, ripemd160, sha256};

// Base58Check and networks
pub mod encoding;
pub use encoding::{base58, Network};
