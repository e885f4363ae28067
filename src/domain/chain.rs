//! Supported chains and the key format each one imports

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Chains the gateway can manage wallets for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Chain {
    Ethereum,
    Avalanche,
    Polygon,
    Solana,
    Harmony,
    Ripple,
}

/// Shape of the private key a chain's wallets are imported with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyFormat {
    /// 32 bytes as 64 hex characters, optional `0x` prefix
    EvmHex,
    /// 64-byte keypair, base58 encoded
    SolanaBase58,
    /// 23-byte family seed, base58 encoded
    RippleSeed,
}

impl Chain {
    pub const ALL: [Chain; 6] = [
        Chain::Ethereum,
        Chain::Avalanche,
        Chain::Polygon,
        Chain::Solana,
        Chain::Harmony,
        Chain::Ripple,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Chain::Ethereum => "ethereum",
            Chain::Avalanche => "avalanche",
            Chain::Polygon => "polygon",
            Chain::Solana => "solana",
            Chain::Harmony => "harmony",
            Chain::Ripple => "ripple",
        }
    }

    pub fn key_format(&self) -> KeyFormat {
        match self {
            Chain::Ethereum | Chain::Avalanche | Chain::Polygon | Chain::Harmony => KeyFormat::EvmHex,
            Chain::Solana => KeyFormat::SolanaBase58,
            Chain::Ripple => KeyFormat::RippleSeed,
        }
    }
}

impl std::fmt::Display for Chain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no supported chain
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown chain: {0}")]
pub struct UnknownChain(pub String);

impl FromStr for Chain {
    type Err = UnknownChain;

    /// Exact, case-sensitive match on the wire name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Chain::ALL
            .into_iter()
            .find(|chain| chain.as_str() == s)
            .ok_or_else(|| UnknownChain(s.to_string()))
    }
}
