//! ECDSA verification against secp256k1 public points

use crate::traditional::ecdsa::common::Signature;
use bitcrypt_algorithms::ec::k256::S256Point;
use bitcrypt_api::{Result, ResultExt};
use bitcrypt_internal::constant_time::ct_eq;
use num_bigint::BigUint;
use num_traits::Zero;

/// Verification of ECDSA signatures by a public point
pub trait EcdsaVerify {
    /// Check `signature` over the digest `z`.
    ///
    /// Returns `Ok(false)` for any signature that does not verify, including
    /// components outside `[1, n)` and a point-at-infinity public key. Errors
    /// are reserved for arithmetic failures.
    fn verify(&self, z: &BigUint, signature: &Signature) -> Result<bool>;

    /// Parse a DER signature and verify it.
    ///
    /// Malformed DER fails with `MalformedSignature`.
    fn verify_der(&self, z: &BigUint, der: &[u8]) -> Result<bool> {
        let signature = Signature::parse(der).with_context("EcdsaVerify::verify_der")?;
        self.verify(z, &signature)
    }
}

impl EcdsaVerify for S256Point {
    /// Algorithm:
    /// 1. Verify that r and s are integers in [1, n-1]
    /// 2. w = s⁻¹ mod n
    /// 3. u₁ = zw mod n and u₂ = rw mod n
    /// 4. (x₁, y₁) = u₁·G + u₂·Q
    /// 5. If (x₁, y₁) = O, reject the signature
    /// 6. Accept the signature if and only if x₁ mod n = r
    fn verify(&self, z: &BigUint, signature: &Signature) -> Result<bool> {
        let n = S256Point::order();
        let (r, s) = (signature.r(), signature.s());

        if self.is_infinity() {
            reject("public key is the point at infinity");
            return Ok(false);
        }
        if r.is_zero() || s.is_zero() || r >= n || s >= n {
            reject("signature component out of range");
            return Ok(false);
        }

        let s_inv = s.modpow(&(n - 2u32), n);
        let u = (z * &s_inv) % n;
        let v = (r * &s_inv) % n;

        let total = S256Point::generator()
            .multiply(&u)?
            .add(&self.multiply(&v)?)?;

        let x = match total.x() {
            Some(x) => x.value() % n,
            None => {
                reject("verification point is the point at infinity");
                return Ok(false);
            }
        };

        let accepted = ct_eq(x.to_bytes_be(), r.to_bytes_be());
        if !accepted {
            reject("x coordinate does not match r");
        }
        Ok(accepted)
    }
}

#[allow(unused_variables)]
fn reject(reason: &str) {
    #[cfg(feature = "trace")]
    log::debug!("ecdsa verification rejected: {}", reason);
}
