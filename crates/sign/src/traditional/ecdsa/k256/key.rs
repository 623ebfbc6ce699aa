//! secp256k1 private keys: signing and WIF encoding

use super::nonce::{NonceSource, RandomNonce, Rfc6979Nonce};
use crate::traditional::ecdsa::common::Signature;
use bitcrypt_algorithms::base58;
use bitcrypt_algorithms::ec::k256::S256Point;
use bitcrypt_algorithms::Network;
use bitcrypt_api::error::validate;
use bitcrypt_api::{Error, Result, ResultExt, SecretBytes};
use bitcrypt_internal::endian::pad_be;
use bitcrypt_params::traditional::base58check::WIF_COMPRESSED_SUFFIX;
use bitcrypt_params::traditional::secp256k1::SECP256K1_FIELD_ELEMENT_SIZE;
use core::fmt;
use num_bigint::{BigUint, RandBigInt};
use num_traits::{One, Zero};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

const SECRET_SIZE: usize = SECP256K1_FIELD_ELEMENT_SIZE;

/// A secp256k1 private key and its public point
///
/// The secret is any integer in `[1, 2²⁵⁶)` that is not a multiple of the
/// group order n. Its 32-byte big-endian form is what WIF carries; the public
/// point is `(secret mod n)·G`.
#[derive(Clone, PartialEq, Eq)]
pub struct PrivateKey {
    secret: SecretBytes<SECRET_SIZE>,
    point: S256Point,
}

// Manual Zeroize implementation for PrivateKey
impl Zeroize for PrivateKey {
    fn zeroize(&mut self) {
        self.secret.zeroize();
    }
}

impl PrivateKey {
    /// Create a key from a secret integer
    pub fn new(secret: &BigUint) -> Result<Self> {
        let bytes = pad_be::<SECRET_SIZE>(&secret.to_bytes_be())
            .ok_or_else(|| Error::domain("PrivateKey::new", "secret exceeds 256 bits"))?;
        Self::from_secret(SecretBytes::new(bytes), "PrivateKey::new")
    }

    /// Create a key from 32 big-endian secret bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        const CONTEXT: &str = "PrivateKey::from_bytes";
        let secret = SecretBytes::from_slice(bytes).with_context(CONTEXT)?;
        Self::from_secret(secret, CONTEXT)
    }

    fn from_secret(secret: SecretBytes<SECRET_SIZE>, context: &'static str) -> Result<Self> {
        let scalar = BigUint::from_bytes_be(&secret[..]) % S256Point::order();
        validate::parameter(
            !scalar.is_zero(),
            context,
            "secret must not be a multiple of the group order",
        )?;

        let point = S256Point::generator().multiply(&scalar)?;
        Ok(Self { secret, point })
    }

    /// Generate a key with a secret drawn uniformly from `[1, n)`
    pub fn generate<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self> {
        let secret = rng.gen_biguint_range(&BigUint::one(), S256Point::order());
        Self::new(&secret)
    }

    /// The public point `(secret mod n)·G`
    pub fn public_point(&self) -> &S256Point {
        &self.point
    }

    /// Secret as 64 lowercase hex digits
    pub fn hex(&self) -> String {
        hex::encode(&self.secret[..])
    }

    fn scalar(&self) -> BigUint {
        BigUint::from_bytes_be(&self.secret[..]) % S256Point::order()
    }

    /// Sign the digest `z` with a nonce from the operating system RNG
    pub fn sign(&self, z: &BigUint) -> Result<Signature> {
        self.sign_with(z, &mut RandomNonce::new(OsRng))
    }

    /// Sign the digest `z` with an RFC 6979 deterministic nonce
    pub fn sign_deterministic(&self, z: &BigUint) -> Result<Signature> {
        let mut nonces = Rfc6979Nonce::new(&self.scalar(), z, S256Point::order())?;
        self.sign_with(z, &mut nonces)
    }

    /// Sign the digest `z`, drawing nonces from `nonces`.
    ///
    /// A nonce that yields `r = 0` or `s = 0` is discarded and the next one
    /// is drawn. The result always has `s <= n/2`.
    pub fn sign_with<N: NonceSource + ?Sized>(
        &self,
        z: &BigUint,
        nonces: &mut N,
    ) -> Result<Signature> {
        let n = S256Point::order();
        let e = self.scalar();

        loop {
            let k = nonces.next_nonce(n)?;

            let r = match S256Point::generator().multiply(&k)?.x() {
                Some(x) => x.value() % n,
                None => BigUint::zero(),
            };
            if r.is_zero() {
                #[cfg(feature = "trace")]
                log::trace!("ecdsa nonce rejected: r = 0");
                continue;
            }

            let k_inv = k.modpow(&(n - 2u32), n);
            let mut s = ((z + &r * &e) * &k_inv) % n;
            if s.is_zero() {
                #[cfg(feature = "trace")]
                log::trace!("ecdsa nonce rejected: s = 0");
                continue;
            }

            if &s * 2u32 > *n {
                s = n - &s;
            }
            return Ok(Signature::new(r, s));
        }
    }

    /// Wallet Import Format
    ///
    /// `version || secret (32 bytes) || [0x01 if compressed]`, Base58Check
    /// encoded. The version byte is 0x80 on mainnet and 0xef on testnet.
    pub fn wif(&self, compressed: bool, network: Network) -> String {
        let mut payload = Vec::with_capacity(2 + SECRET_SIZE);
        payload.push(network.wif_version());
        payload.extend_from_slice(&self.secret[..]);
        if compressed {
            payload.push(WIF_COMPRESSED_SUFFIX);
        }
        let encoded = base58::encode_check(&payload);
        payload.zeroize();
        encoded
    }

    /// Decode a WIF string into the key, its compression flag and network
    pub fn from_wif(wif: &str) -> Result<(Self, bool, Network)> {
        const CONTEXT: &str = "PrivateKey::from_wif";
        let mut payload = base58::decode_check(wif).with_context(CONTEXT)?;

        let compressed = match payload.len() {
            len if len == 1 + SECRET_SIZE => false,
            len if len == 2 + SECRET_SIZE => {
                if payload[len - 1] != WIF_COMPRESSED_SUFFIX {
                    payload.zeroize();
                    return Err(Error::encoding(CONTEXT, "bad compression suffix"));
                }
                true
            }
            len => {
                payload.zeroize();
                return Err(Error::InvalidLength {
                    context: CONTEXT,
                    expected: 1 + SECRET_SIZE,
                    actual: len,
                });
            }
        };

        let result = Network::from_wif_version(payload[0])
            .with_context(CONTEXT)
            .and_then(|network| {
                Self::from_bytes(&payload[1..1 + SECRET_SIZE]).map(|key| (key, compressed, network))
            });
        payload.zeroize();
        result
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("secret", &"[REDACTED]")
            .field("point", &self.point)
            .finish()
    }
}
