//! Internal utilities for the bitcrypt library
//!
//! Not part of the public API; shared by the member crates.

#![forbid(unsafe_code)]

pub mod constant_time;
pub mod endian;
