//! # bitcrypt
//!
//! The secp256k1 primitives behind Bitcoin-style keys: prime-field
//! arithmetic, the Weierstrass group law, ECDSA with low-s signatures, DER
//! signature encoding, SEC public keys, WIF private keys and Base58Check
//! addresses.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! bitcrypt = "0.3"
//! ```
//!
//! ## Features
//!
//! - `algorithms` (default): fields, curves, hashes and Base58Check
//! - `sign` (default): ECDSA keys and signatures
//! - `trace`: diagnostic logging of signing retries and verification
//!   rejections through the `log` facade
//! - `full`: All features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`bitcrypt-api`]: Error taxonomy and capability traits
//! - [`bitcrypt-params`]: Curve constants and encoding sizes
//! - [`bitcrypt-algorithms`]: Field elements, points, hashes, Base58Check
//! - [`bitcrypt-sign`]: ECDSA over secp256k1
//!
//! ## Example
//!
//! ```
//! use bitcrypt::prelude::*;
//!
//! let key = PrivateKey::new(&BigUint::from(12345u32))?;
//! let z = BigUint::from_bytes_be(&hash256(b"my message"));
//! let signature = key.sign_deterministic(&z)?;
//!
//! let sec = key.public_point().sec(true)?;
//! let public = S256Point::parse_sec(&sec)?;
//! assert!(public.verify_der(&z, &signature.der()?)?);
//! # Ok::<(), bitcrypt::api::Error>(())
//! ```

#![forbid(unsafe_code)]

// Core re-exports (always available)
pub use bitcrypt_api as api;
pub use bitcrypt_internal as internal;
pub use bitcrypt_params as params;

// Dependencies that appear in public signatures
pub use num_bigint;
pub use rand;

// Feature-gated re-exports
#[cfg(feature = "algorithms")]
pub use bitcrypt_algorithms as algorithms;

#[cfg(feature = "sign")]
pub use bitcrypt_sign as sign;

/// Common imports for bitcrypt users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result, ResultExt};

    // Re-export core traits
    pub use crate::api::{Field, Group, Serialize, Signature as SignatureScheme};

    // Re-export security types
    pub use crate::api::SecretBytes;

    pub use num_bigint::BigUint;

    #[cfg(feature = "algorithms")]
    pub use crate::algorithms::{
        base58, hash160, hash256, FieldElement, Network, Point, S256Field, S256Point,
    };

    #[cfg(feature = "sign")]
    pub use crate::sign::{
        EcdsaVerify, NonceSource, PrivateKey, RandomNonce, Rfc6979Nonce, Secp256k1Ecdsa,
        Signature,
    };
}
