//! Constant-time byte comparison

use subtle::ConstantTimeEq;

/// Byte-wise equality without a data-dependent early exit
///
/// Used for secret-key equality and for matching the recovered `x` against a
/// signature's `r`. Only the length check branches.
pub fn ct_eq<A, B>(a: A, b: B) -> bool
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    let (a, b) = (a.as_ref(), b.as_ref());
    a.len() == b.len() && bool::from(a.ct_eq(b))
}
