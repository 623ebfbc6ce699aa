//! Capability traits implemented across the bitcrypt crates

pub mod field;
pub mod group;
pub mod serialize;
pub mod signature;

pub use field::Field;
pub use group::Group;
pub use serialize::Serialize;
pub use signature::Signature;
