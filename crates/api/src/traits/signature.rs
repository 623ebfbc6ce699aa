//! Message-level signature schemes
//!
//! The curve-level API signs and verifies a digest `z`. This trait sits one
//! level up: it takes raw messages, fixes the hash, and moves keys and
//! signatures around as opaque wire values.

use crate::Result;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// A signature scheme over raw messages
///
/// Secret keys are not required to expose their bytes; leaving memory goes
/// through an explicit export such as WIF.
pub trait Signature {
    /// Public key as carried on the wire
    type PublicKey: Clone;

    /// Secret key; wiped with [`Zeroize`]
    type SecretKey: Zeroize + Clone;

    /// Encoded signature
    type SignatureData: Clone;

    /// Key pair, usually `(PublicKey, SecretKey)`
    type KeyPair;

    /// Scheme identifier, e.g. `"ECDSA-secp256k1"`
    fn name() -> &'static str;

    /// Generate a key pair, drawing the secret from `rng`
    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self::KeyPair>;

    /// Public half of a key pair
    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey;

    /// Secret half of a key pair
    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey;

    /// Hash `message` with the scheme's digest and sign it
    fn sign(message: &[u8], secret_key: &Self::SecretKey) -> Result<Self::SignatureData>;

    /// `Ok(())` if `signature` is valid for `message` under `public_key`.
    ///
    /// Undecodable inputs surface their decoding error; a well-formed
    /// signature that does not verify is `Error::InvalidSignature`.
    fn verify(
        message: &[u8],
        signature: &Self::SignatureData,
        public_key: &Self::PublicKey,
    ) -> Result<()>;
}
