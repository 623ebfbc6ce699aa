//! Constants for ECDSA over secp256k1 and its DER signature framing

/// ASN.1 SEQUENCE tag
pub const DER_SEQUENCE_TAG: u8 = 0x30;

/// ASN.1 INTEGER tag
pub const DER_INTEGER_TAG: u8 = 0x02;

/// Largest DER-encoded integer for a 256-bit value: 32 bytes + sign padding
pub const DER_MAX_INTEGER_SIZE: usize = 33;

/// Largest DER signature: sequence header + two framed 33-byte integers
pub const DER_MAX_SIGNATURE_SIZE: usize = 2 + 2 * (2 + DER_MAX_INTEGER_SIZE);

/// Smallest DER signature: sequence header + two framed 1-byte integers
pub const DER_MIN_SIGNATURE_SIZE: usize = 2 + 2 * (2 + 1);

/// Size of a message digest fed to signing (SHA-256 output)
pub const ECDSA_DIGEST_SIZE: usize = 32;
