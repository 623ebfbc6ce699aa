//! Canonical byte encodings

use crate::Result;

/// Types with a single canonical byte encoding
///
/// For an ECDSA signature this is DER. Decoding is strict: any input that
/// `to_bytes` could not have produced is rejected.
pub trait Serialize: Sized {
    /// Decode from the canonical encoding
    fn from_bytes(bytes: &[u8]) -> Result<Self>;

    /// Encode to the canonical encoding, failing for values it cannot frame
    fn to_bytes(&self) -> Result<Vec<u8>>;
}
