//! Network selection for address versioning.

#![forbid(unsafe_code)]

/// Target network, encoded in the address version byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Network {
    /// Mainnet (version 0x00, addresses start with '1')
    Mainnet,
    /// Testnet (version 0x6f, addresses start with 'm' or 'n')
    Testnet,
}

impl Network {
    /// Get the P2PKH version byte for this network.
    pub const fn version_byte(self) -> u8 {
        match self {
            Self::Mainnet => 0x00,
            Self::Testnet => 0x6f,
        }
    }
}
