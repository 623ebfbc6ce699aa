//! Base58 and Base58Check
//!
//! Leading zero bytes map one-to-one onto leading `'1'` characters; the
//! remaining bytes are treated as a big-endian integer written in base 58.
//! Base58Check appends the first four bytes of `hash256(payload)`.

use super::Network;
use crate::error::{validate, Error, Result, ResultExt};
use crate::hash::hash256;
use bitcrypt_params::traditional::base58check::{BASE58_ALPHABET, CHECKSUM_SIZE, HASH160_SIZE};
use num_bigint::BigUint;
use num_traits::Zero;

const RADIX: u32 = 58;

/// Encode bytes as Base58
pub fn encode(data: &[u8]) -> String {
    let zeros = data.iter().take_while(|&&b| b == 0).count();
    let num = BigUint::from_bytes_be(&data[zeros..]);
    let digits = if num.is_zero() {
        Vec::new()
    } else {
        num.to_radix_be(RADIX)
    };

    let mut out = String::with_capacity(zeros + digits.len());
    out.extend(core::iter::repeat('1').take(zeros));
    out.extend(digits.iter().map(|&d| BASE58_ALPHABET[d as usize] as char));
    out
}

fn digit_of(c: char) -> Option<u8> {
    BASE58_ALPHABET
        .iter()
        .position(|&a| a as char == c)
        .map(|i| i as u8)
}

/// Decode a Base58 string
pub fn decode(s: &str) -> Result<Vec<u8>> {
    let digits = s
        .chars()
        .map(|c| {
            digit_of(c).ok_or_else(|| {
                Error::encoding(
                    "base58::decode",
                    format!("character {:?} is not in the Base58 alphabet", c),
                )
            })
        })
        .collect::<Result<Vec<u8>>>()?;

    let zeros = digits.iter().take_while(|&&d| d == 0).count();
    let mut out = vec![0u8; zeros];
    let rest = &digits[zeros..];
    if !rest.is_empty() {
        let num = BigUint::from_radix_be(rest, RADIX)
            .ok_or_else(|| Error::encoding("base58::decode", "invalid digit"))?;
        out.extend_from_slice(&num.to_bytes_be());
    }
    Ok(out)
}

fn checksum(payload: &[u8]) -> [u8; CHECKSUM_SIZE] {
    let digest = hash256(payload);
    let mut out = [0u8; CHECKSUM_SIZE];
    out.copy_from_slice(&digest[..CHECKSUM_SIZE]);
    out
}

/// Base58 of `payload || hash256(payload)[..4]`
pub fn encode_check(payload: &[u8]) -> String {
    let mut data = Vec::with_capacity(payload.len() + CHECKSUM_SIZE);
    data.extend_from_slice(payload);
    data.extend_from_slice(&checksum(payload));
    encode(&data)
}

/// Decode Base58Check, verifying and stripping the checksum
pub fn decode_check(s: &str) -> Result<Vec<u8>> {
    let mut data = decode(s).with_context("base58::decode_check")?;
    if data.len() < CHECKSUM_SIZE {
        return Err(Error::encoding(
            "base58::decode_check",
            "input shorter than the checksum",
        ));
    }
    let split = data.len() - CHECKSUM_SIZE;
    if checksum(&data[..split])[..] != data[split..] {
        return Err(Error::encoding("base58::decode_check", "checksum mismatch"));
    }
    data.truncate(split);
    Ok(data)
}

/// Decode a P2PKH address into its network and 20-byte public-key hash
pub fn decode_address(s: &str) -> Result<(Network, [u8; HASH160_SIZE])> {
    const CONTEXT: &str = "base58::decode_address";
    let payload = decode_check(s).with_context(CONTEXT)?;
    validate::length(CONTEXT, payload.len(), 1 + HASH160_SIZE)?;
    let network = Network::from_address_version(payload[0]).with_context(CONTEXT)?;
    let mut h160 = [0u8; HASH160_SIZE];
    h160.copy_from_slice(&payload[1..]);
    Ok((network, h160))
}
