//! Elliptic Curve Primitives
//!
//! [`weierstrass`] implements the affine group law over any prime field;
//! [`k256`] binds it to the secp256k1 parameters.

pub mod k256;
pub mod weierstrass;

pub use k256::{S256Field, S256Point};
pub use weierstrass::Point;
