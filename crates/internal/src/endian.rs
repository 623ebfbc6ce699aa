//! Fixed-width big-endian byte helpers

/// Strip leading zero bytes from a big-endian integer encoding
///
/// An all-zero input yields an empty slice.
pub fn strip_leading_zeros(bytes: &[u8]) -> &[u8] {
    let first = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
    &bytes[first..]
}

/// Left-pad a big-endian integer encoding to exactly `N` bytes
///
/// Returns `None` when the integer needs more than `N` bytes.
pub fn pad_be<const N: usize>(bytes: &[u8]) -> Option<[u8; N]> {
    let digits = strip_leading_zeros(bytes);
    if digits.len() > N {
        return None;
    }
    let mut out = [0u8; N];
    out[N - digits.len()..].copy_from_slice(digits);
    Some(out)
}
