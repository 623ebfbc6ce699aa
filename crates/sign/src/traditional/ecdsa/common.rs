//! ECDSA signature values and their DER encoding

use bitcrypt_algorithms::ec::k256::S256Point;
use bitcrypt_api::error::validate;
use bitcrypt_api::{Error, Result, Serialize};
use bitcrypt_params::traditional::ecdsa::{
    DER_INTEGER_TAG, DER_MAX_INTEGER_SIZE, DER_MAX_SIGNATURE_SIZE, DER_MIN_SIGNATURE_SIZE,
    DER_SEQUENCE_TAG,
};
use core::fmt;
use num_bigint::BigUint;

/// ECDSA signature components (r, s)
///
/// Construction does not validate the range of either component; a
/// signature with `r` or `s` outside `[1, n)` simply fails verification.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Signature {
    r: BigUint,
    s: BigUint,
}

impl Signature {
    /// Create a signature from its components
    pub fn new(r: BigUint, s: BigUint) -> Self {
        Self { r, s }
    }

    /// The `r` component
    pub fn r(&self) -> &BigUint {
        &self.r
    }

    /// The `s` component
    pub fn s(&self) -> &BigUint {
        &self.s
    }

    /// Whether `s <= n/2`, the canonical form produced by signing
    pub fn is_low_s(&self) -> bool {
        &self.s * 2u32 <= *S256Point::order()
    }

    /// Serialize signature to DER format
    ///
    /// `SEQUENCE { INTEGER r, INTEGER s }` with each integer in minimal
    /// big-endian form, prefixed by `0x00` when its top bit is set.
    /// Components wider than 256 bits fail with `InvalidLength`.
    pub fn der(&self) -> Result<Vec<u8>> {
        const CONTEXT: &str = "Signature::der";
        let r = encode_integer(&self.r);
        let s = encode_integer(&self.s);
        validate::max_length(CONTEXT, r.len(), DER_MAX_INTEGER_SIZE)?;
        validate::max_length(CONTEXT, s.len(), DER_MAX_INTEGER_SIZE)?;

        let mut der = Vec::with_capacity(6 + r.len() + s.len());
        der.push(DER_SEQUENCE_TAG);
        der.push((4 + r.len() + s.len()) as u8);
        der.push(DER_INTEGER_TAG);
        der.push(r.len() as u8);
        der.extend_from_slice(&r);
        der.push(DER_INTEGER_TAG);
        der.push(s.len() as u8);
        der.extend_from_slice(&s);
        Ok(der)
    }

    /// Parse signature from DER format
    ///
    /// Rejects anything but the exact layout [`Signature::der`] produces:
    /// wrong tags, a sequence length that disagrees with the input length,
    /// truncated or trailing data, and integers that are empty, negative or
    /// carry redundant leading zero bytes.
    pub fn parse(der: &[u8]) -> Result<Self> {
        const CONTEXT: &str = "Signature::parse";

        validate::der_structure(
            (DER_MIN_SIGNATURE_SIZE..=DER_MAX_SIGNATURE_SIZE).contains(&der.len()),
            CONTEXT,
            "DER signature length out of range",
        )?;
        validate::der_structure(der[0] == DER_SEQUENCE_TAG, CONTEXT, "bad SEQUENCE tag")?;
        validate::der_structure(
            der[1] as usize + 2 == der.len(),
            CONTEXT,
            "sequence length does not match input length",
        )?;

        let mut pos = 2;
        let r = read_integer(der, &mut pos, CONTEXT)?;
        let s = read_integer(der, &mut pos, CONTEXT)?;

        validate::der_structure(
            6 + r.len() + s.len() == der.len(),
            CONTEXT,
            "trailing bytes after s",
        )?;

        Ok(Self {
            r: BigUint::from_bytes_be(r),
            s: BigUint::from_bytes_be(s),
        })
    }
}

/// Minimal big-endian encoding with a sign-padding zero when needed
fn encode_integer(value: &BigUint) -> Vec<u8> {
    // to_bytes_be yields [0] for zero, the minimal DER encoding of 0
    let bytes = value.to_bytes_be();
    if bytes[0] & 0x80 == 0 {
        bytes
    } else {
        let mut padded = Vec::with_capacity(bytes.len() + 1);
        padded.push(0x00);
        padded.extend_from_slice(&bytes);
        padded
    }
}

/// Read one `INTEGER` at `pos`, advancing past it
fn read_integer<'a>(der: &'a [u8], pos: &mut usize, context: &'static str) -> Result<&'a [u8]> {
    let header = der
        .get(*pos..*pos + 2)
        .ok_or_else(|| Error::malformed(context, "truncated INTEGER header"))?;
    validate::der_structure(header[0] == DER_INTEGER_TAG, context, "bad INTEGER tag")?;

    let len = header[1] as usize;
    validate::der_structure(len > 0, context, "empty INTEGER")?;
    validate::der_structure(len <= DER_MAX_INTEGER_SIZE, context, "INTEGER too long")?;

    let start = *pos + 2;
    let body = der
        .get(start..start + len)
        .ok_or_else(|| Error::malformed(context, "truncated INTEGER body"))?;
    validate::der_structure(body[0] & 0x80 == 0, context, "negative INTEGER")?;
    validate::der_structure(
        !(body.len() > 1 && body[0] == 0x00 && body[1] & 0x80 == 0),
        context,
        "INTEGER has redundant leading zero",
    )?;

    *pos = start + len;
    Ok(body)
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature({:x},{:x})", self.r, self.s)
    }
}

impl Serialize for Signature {
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::parse(bytes)
    }

    fn to_bytes(&self) -> Result<Vec<u8>> {
        self.der()
    }
}
