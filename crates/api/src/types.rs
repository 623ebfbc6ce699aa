//! Containers for secret key material

use crate::error::validate;
use crate::Result;
use bitcrypt_internal::constant_time::ct_eq;
use core::fmt;
use core::ops::Deref;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Fixed-width secret bytes, wiped on drop
///
/// Holds a private key's big-endian serialisation. Equality runs in
/// constant time and `Debug` never prints the contents. Read access goes
/// through `Deref` to the array.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretBytes<const N: usize> {
    data: [u8; N],
}

impl<const N: usize> SecretBytes<N> {
    /// Take ownership of `data`
    pub fn new(data: [u8; N]) -> Self {
        Self { data }
    }

    /// Copy exactly `N` bytes out of `slice`
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        validate::length("SecretBytes::from_slice", slice.len(), N)?;
        let mut data = [0u8; N];
        data.copy_from_slice(slice);
        Ok(Self { data })
    }
}

impl<const N: usize> Deref for SecretBytes<N> {
    type Target = [u8; N];

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<const N: usize> PartialEq for SecretBytes<N> {
    fn eq(&self, other: &Self) -> bool {
        ct_eq(self.data, other.data)
    }
}

impl<const N: usize> Eq for SecretBytes<N> {}

impl<const N: usize> fmt::Debug for SecretBytes<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretBytes<{}>[REDACTED]", N)
    }
}
