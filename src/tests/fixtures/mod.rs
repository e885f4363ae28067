//! Test fixtures for gateway tests
//!
//! Keys are generated deterministically so every test run sees the same data.

use crate::{
    application::{
        services::{MetricsService, WalletService},
        use_cases::WalletUseCase,
    },
    domain::{chain::Chain, wallet::WalletValidators},
    infrastructure::adapters::InMemoryWalletStore,
};
use serde_json::{json, Value};
use std::sync::Arc;

/// 64 hex characters with a `0x` prefix
pub fn eth_key() -> String {
    format!("0x{}", "a".repeat(64))
}

/// 64 hex characters without prefix, mixed case
pub fn eth_key_unprefixed() -> String {
    "aB".repeat(32)
}

/// Base58 encoding of 64 bytes
pub fn sol_key() -> String {
    bs58::encode([7u8; 64]).into_string()
}

/// Base58 encoding of 32 bytes; decodes but has the wrong length for Solana
pub fn sol_key_short() -> String {
    bs58::encode([7u8; 32]).into_string()
}

/// Base58 encoding of 23 bytes
pub fn ripple_seed() -> String {
    bs58::encode([9u8; 23]).into_string()
}

/// A valid private key for the given chain
pub fn key_for(chain: Chain) -> String {
    match chain {
        Chain::Solana => sol_key(),
        Chain::Ripple => ripple_seed(),
        Chain::Ethereum | Chain::Avalanche | Chain::Polygon | Chain::Harmony => eth_key(),
    }
}

/// `POST /wallet/add` body
pub fn add_body(chain: &str, network: &str, private_key: &str) -> Value {
    json!({ "chain": chain, "network": network, "privateKey": private_key })
}

/// `DELETE /wallet/remove` body
pub fn remove_body(chain: &str, address: &str) -> Value {
    json!({ "chain": chain, "address": address })
}

/// Wallet use case over a fresh in-memory store
pub fn wallet_use_case() -> (Arc<WalletUseCase>, Arc<MetricsService>) {
    let metrics = Arc::new(MetricsService::new());
    let service = Arc::new(WalletService::new(Arc::new(InMemoryWalletStore::new())));
    let use_case = WalletUseCase::new(WalletValidators::build().unwrap(), service, metrics.clone());
    (Arc::new(use_case), metrics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::validation::predicates::{is_eth_private_key, is_ripple_seed_key, is_sol_private_key};

    #[test]
    fn fixture_keys_have_expected_shapes() {
        assert!(is_eth_private_key(&eth_key()));
        assert!(is_eth_private_key(&eth_key_unprefixed()));
        assert!(is_sol_private_key(&sol_key()));
        assert!(!is_sol_private_key(&sol_key_short()));
        assert!(is_ripple_seed_key(&ripple_seed()));
    }

    #[test]
    fn key_for_covers_every_chain() {
        for chain in Chain::ALL {
            assert!(!key_for(chain).is_empty());
        }
    }
}
