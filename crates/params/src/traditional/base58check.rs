//! Constants for Base58Check encoded keys and addresses

/// Base58 alphabet (no `0`, `O`, `I`, `l`)
pub const BASE58_ALPHABET: &[u8; 58] =
    b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Number of double-SHA-256 bytes appended as checksum
pub const CHECKSUM_SIZE: usize = 4;

/// Size of a hash160 digest
pub const HASH160_SIZE: usize = 20;

/// P2PKH address version byte on mainnet
pub const ADDRESS_VERSION_MAINNET: u8 = 0x00;

/// P2PKH address version byte on testnet
pub const ADDRESS_VERSION_TESTNET: u8 = 0x6f;

/// WIF version byte on mainnet
pub const WIF_VERSION_MAINNET: u8 = 0x80;

/// WIF version byte on testnet
pub const WIF_VERSION_TESTNET: u8 = 0xef;

/// Suffix marking a WIF key whose public point is SEC-compressed
pub const WIF_COMPRESSED_SUFFIX: u8 = 0x01;
