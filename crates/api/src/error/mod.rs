//! Error handling shared by every bitcrypt crate
//!
//! Each [`Error`] variant names the failing operation in its `context`.
//! [`validate`] wraps the common precondition checks.

pub mod traits;
pub mod types;
pub mod validate;

pub use traits::ResultExt;
pub use types::{Error, Result};
