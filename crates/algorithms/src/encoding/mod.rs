//! Text encodings for keys and addresses

pub mod base58;

use crate::error::{Error, Result};
use bitcrypt_params::traditional::base58check::{
    ADDRESS_VERSION_MAINNET, ADDRESS_VERSION_TESTNET, WIF_VERSION_MAINNET, WIF_VERSION_TESTNET,
};

/// Network whose version bytes prefix Base58Check payloads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Network {
    /// Production network (addresses start with `1`)
    #[default]
    Mainnet,
    /// Test network (addresses start with `m` or `n`)
    Testnet,
}

impl Network {
    /// Version byte of a P2PKH address
    pub fn address_version(self) -> u8 {
        match self {
            Network::Mainnet => ADDRESS_VERSION_MAINNET,
            Network::Testnet => ADDRESS_VERSION_TESTNET,
        }
    }

    /// Version byte of a WIF private key
    pub fn wif_version(self) -> u8 {
        match self {
            Network::Mainnet => WIF_VERSION_MAINNET,
            Network::Testnet => WIF_VERSION_TESTNET,
        }
    }

    /// Network owning an address version byte
    pub fn from_address_version(version: u8) -> Result<Self> {
        match version {
            ADDRESS_VERSION_MAINNET => Ok(Network::Mainnet),
            ADDRESS_VERSION_TESTNET => Ok(Network::Testnet),
            other => Err(Error::encoding(
                "Network::from_address_version",
                format!("unknown address version 0x{:02x}", other),
            )),
        }
    }

    /// Network owning a WIF version byte
    pub fn from_wif_version(version: u8) -> Result<Self> {
        match version {
            WIF_VERSION_MAINNET => Ok(Network::Mainnet),
            WIF_VERSION_TESTNET => Ok(Network::Testnet),
            other => Err(Error::encoding(
                "Network::from_wif_version",
                format!("unknown WIF version 0x{:02x}", other),
            )),
        }
    }
}
