//! ECDSA over secp256k1
//!
//! Signing and verification operate on a 256-bit digest `z`. The
//! [`Secp256k1Ecdsa`] scheme wraps them behind the message-level
//! [`Signature`](bitcrypt_api::Signature) trait, hashing messages with
//! `hash256` (double SHA-256) and carrying keys and signatures as bytes.

mod key;
mod nonce;
mod verify;

pub use key::PrivateKey;
pub use nonce::{NonceSource, RandomNonce, Rfc6979Nonce};
pub use verify::EcdsaVerify;

use crate::traditional::ecdsa::common::Signature;
use bitcrypt_algorithms::ec::k256::S256Point;
use bitcrypt_algorithms::hash::hash256;
use bitcrypt_api::{Error, Result, ResultExt, Signature as SignatureTrait};
use num_bigint::BigUint;
use rand::{CryptoRng, RngCore};

/// ECDSA signature scheme using the secp256k1 curve
pub struct Secp256k1Ecdsa;

/// secp256k1 public key in compressed SEC format (0x02/0x03 || X)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Secp256k1PublicKey(pub Vec<u8>);

/// secp256k1 signature encoded in ASN.1 DER format
///
/// Format: SEQUENCE { r INTEGER, s INTEGER }
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Secp256k1Signature(pub Vec<u8>);

impl AsRef<[u8]> for Secp256k1PublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for Secp256k1Signature {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// `hash256(message)` as a big-endian integer
pub fn message_digest(message: &[u8]) -> BigUint {
    BigUint::from_bytes_be(&hash256(message))
}

impl SignatureTrait for Secp256k1Ecdsa {
    type PublicKey = Secp256k1PublicKey;
    type SecretKey = PrivateKey;
    type SignatureData = Secp256k1Signature;
    type KeyPair = (Self::PublicKey, Self::SecretKey);

    fn name() -> &'static str {
        "ECDSA-secp256k1"
    }

    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self::KeyPair> {
        let secret_key = PrivateKey::generate(rng)?;
        let public_key = Secp256k1PublicKey(secret_key.public_point().sec(true)?);
        Ok((public_key, secret_key))
    }

    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey {
        keypair.0.clone()
    }

    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey {
        keypair.1.clone()
    }

    /// Sign `hash256(message)` with an RFC 6979 nonce
    fn sign(message: &[u8], secret_key: &Self::SecretKey) -> Result<Self::SignatureData> {
        let z = message_digest(message);
        let signature = secret_key.sign_deterministic(&z)?;
        Ok(Secp256k1Signature(signature.der()?))
    }

    fn verify(
        message: &[u8],
        signature: &Self::SignatureData,
        public_key: &Self::PublicKey,
    ) -> Result<()> {
        const CONTEXT: &str = "Secp256k1Ecdsa::verify";
        let signature = Signature::parse(&signature.0).with_context(CONTEXT)?;
        let point = S256Point::parse_sec(&public_key.0).with_context(CONTEXT)?;

        if point.verify(&message_digest(message), &signature)? {
            Ok(())
        } else {
            Err(Error::InvalidSignature {
                context: CONTEXT,
                message: "signature verification failed".into(),
            })
        }
    }
}
