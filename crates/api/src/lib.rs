//! Public API traits and types for the bitcrypt library
//!
//! This crate provides the public API surface shared by the bitcrypt crates:
//! the error taxonomy, the capability traits implemented by field elements,
//! curve points and signature schemes, and secret-holding byte containers.

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ResultExt};
pub use types::*;

// Re-export all traits from the traits module
pub use traits::{Field, Group, Serialize, Signature};

// Re-export trait modules for direct access
pub use traits::{field, group, serialize, signature};
