//! Context rewriting for results that cross a layer boundary

use super::types::{Error, Result};

/// Re-label the error of a `Result` with the operation that surfaced it
///
/// `Signature::parse(der).with_context("EcdsaVerify::verify_der")` keeps the
/// error kind and message but reports the outer operation.
pub trait ResultExt<T> {
    /// Replace the context of the contained error, if any
    fn with_context(self, context: &'static str) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for core::result::Result<T, E> {
    fn with_context(self, context: &'static str) -> Result<T> {
        self.map_err(|e| e.into().with_context(context))
    }
}
