//! Error handling for the field, curve and encoding primitives
//!
//! The primitives share the workspace-wide error taxonomy defined in
//! `bitcrypt-api`; this module re-exports it under the crate's own path.

pub use bitcrypt_api::error::{validate, Error, Result, ResultExt};
