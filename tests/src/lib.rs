//! Shared helpers for the bitcrypt cross-crate test suite

use bitcrypt_algorithms::S256Point;
use num_bigint::BigUint;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Parse a hex literal into an integer. Panics on malformed input.
pub fn big(hex: &str) -> BigUint {
    BigUint::parse_bytes(hex.as_bytes(), 16).expect("valid hex literal")
}

/// `coefficient·G`
pub fn times_g(coefficient: &BigUint) -> S256Point {
    S256Point::generator()
        .multiply(coefficient)
        .expect("scalar multiplication of G")
}

/// Deterministic RNG for reproducible key generation
pub fn seeded_rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}
