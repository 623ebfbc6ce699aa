//! Constant values for the bitcrypt library
//!
//! Curve parameters, encoding sizes and version bytes. Everything here is a
//! plain `const`; parsing into arithmetic types happens in the algorithms
//! crate.

#![no_std]

pub mod traditional;
