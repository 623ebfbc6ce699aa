//! Ephemeral nonce sources for ECDSA signing

use bitcrypt_api::{Error, Result};
use bitcrypt_params::traditional::ecdsa::ECDSA_DIGEST_SIZE;
use hmac::{Hmac, Mac};
use num_bigint::{BigUint, RandBigInt};
use num_traits::{One, Zero};
use rand::{CryptoRng, RngCore};
use sha2::Sha256;
use zeroize::Zeroize;

type HmacSha256 = Hmac<Sha256>;

const SEPARATOR_ZERO: [u8; 1] = [0x00];
const SEPARATOR_ONE: [u8; 1] = [0x01];

/// A stream of signing nonces.
///
/// Each call yields a candidate `k` in `[1, order)`. When the signer rejects
/// a candidate (because `r` or `s` came out zero) it asks for the next one.
pub trait NonceSource {
    /// Next nonce in `[1, order)`
    fn next_nonce(&mut self, order: &BigUint) -> Result<BigUint>;
}

/// Nonces drawn uniformly from `[1, order)` with a caller-supplied RNG
pub struct RandomNonce<R> {
    rng: R,
}

impl<R: RngCore + CryptoRng> RandomNonce<R> {
    /// Wrap a cryptographically secure RNG
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: RngCore + CryptoRng> NonceSource for RandomNonce<R> {
    fn next_nonce(&mut self, order: &BigUint) -> Result<BigUint> {
        if order <= &BigUint::one() {
            return Err(Error::param("RandomNonce::next_nonce", "order must exceed 1"));
        }
        Ok(self.rng.gen_biguint_range(&BigUint::one(), order))
    }
}

/// Deterministic nonces per RFC 6979 §3.2 with HMAC-SHA256.
///
/// The generator is seeded with the secret scalar and the message digest.
/// Successive calls continue the HMAC-DRBG stream as §3.2 step h.3
/// prescribes, so a rejected nonce is followed by a fresh one rather than
/// the same value again.
pub struct Rfc6979Nonce {
    k: [u8; ECDSA_DIGEST_SIZE],
    v: [u8; ECDSA_DIGEST_SIZE],
    started: bool,
}

impl Rfc6979Nonce {
    /// Seed the generator.
    ///
    /// `secret` is the private scalar already reduced into `[1, order)`.
    /// `digest` goes through `bits2octets`: a digest wider than the order is
    /// cut to its leftmost bits, measured in whole octets, and the result is
    /// reduced modulo `order`.
    pub fn new(secret: &BigUint, digest: &BigUint, order: &BigUint) -> Result<Self> {
        let mut x = int_to_octets(secret)?;
        let mut h = int_to_octets(&(bits_to_int(digest, order.bits()) % order))?;

        let mut v = [0x01u8; ECDSA_DIGEST_SIZE];
        let mut k = [0x00u8; ECDSA_DIGEST_SIZE];

        // step d: K = HMAC_K(V || 0x00 || int2octets(x) || bits2octets(h1))
        k = hmac(&k, &[&v[..], &SEPARATOR_ZERO[..], &x[..], &h[..]])?;
        // step e: V = HMAC_K(V)
        v = hmac(&k, &[&v[..]])?;
        // step f: K = HMAC_K(V || 0x01 || int2octets(x) || bits2octets(h1))
        k = hmac(&k, &[&v[..], &SEPARATOR_ONE[..], &x[..], &h[..]])?;
        // step g: V = HMAC_K(V)
        v = hmac(&k, &[&v[..]])?;

        x.zeroize();
        h.zeroize();

        Ok(Self {
            k,
            v,
            started: false,
        })
    }

    /// step h.3: K = HMAC_K(V || 0x00), V = HMAC_K(V)
    fn reseed(&mut self) -> Result<()> {
        self.k = hmac(&self.k, &[&self.v[..], &SEPARATOR_ZERO[..]])?;
        self.v = hmac(&self.k, &[&self.v[..]])?;
        Ok(())
    }
}

impl NonceSource for Rfc6979Nonce {
    fn next_nonce(&mut self, order: &BigUint) -> Result<BigUint> {
        if self.started {
            self.reseed()?;
        }
        self.started = true;

        loop {
            // qlen equals hlen for a 256-bit order, so T is a single block
            self.v = hmac(&self.k, &[&self.v[..]])?;
            let candidate = BigUint::from_bytes_be(&self.v);
            if !candidate.is_zero() && &candidate < order {
                return Ok(candidate);
            }
            self.reseed()?;
        }
    }
}

impl Drop for Rfc6979Nonce {
    fn drop(&mut self) {
        self.k.zeroize();
        self.v.zeroize();
    }
}

/// `bits2int`: the leftmost `qlen` bits of the digest octets
fn bits_to_int(digest: &BigUint, qlen: u64) -> BigUint {
    let blen = digest.bits().div_ceil(8) * 8;
    if blen > qlen {
        digest >> (blen - qlen)
    } else {
        digest.clone()
    }
}

fn int_to_octets(value: &BigUint) -> Result<[u8; ECDSA_DIGEST_SIZE]> {
    bitcrypt_internal::endian::pad_be::<ECDSA_DIGEST_SIZE>(&value.to_bytes_be()).ok_or_else(|| {
        Error::InvalidLength {
            context: "Rfc6979Nonce::new",
            expected: ECDSA_DIGEST_SIZE,
            actual: value.to_bytes_be().len(),
        }
    })
}

fn hmac(key: &[u8], parts: &[&[u8]]) -> Result<[u8; ECDSA_DIGEST_SIZE]> {
    let mut mac = <HmacSha256 as Mac>::new_from_slice(key)
        .map_err(|_| Error::param("Rfc6979Nonce", "HMAC key rejected"))?;
    for part in parts {
        mac.update(part);
    }
    Ok(mac.finalize().into_bytes().into())
}
