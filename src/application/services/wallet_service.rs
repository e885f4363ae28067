//! Wallet service - wallet bookkeeping behind the validated routes

use sha2::{Digest, Sha256};
use std::sync::Arc;
use tracing::{debug, info};

use crate::domain::chain::{Chain, KeyFormat};
use crate::domain::wallet::{AddWalletRequest, RemoveWalletRequest, WalletEntry, WalletStore};
use crate::shared::error::{AppError, AppResult};

/// Bytes of the SHA-256 digest kept in a wallet identifier
const FINGERPRINT_BYTES: usize = 20;

/// Wallet bookkeeping over a `WalletStore`.
///
/// Requests reaching this service have already passed shape validation.
pub struct WalletService {
    store: Arc<dyn WalletStore>,
}

impl WalletService {
    pub fn new(store: Arc<dyn WalletStore>) -> Self {
        Self { store }
    }

    /// Register a wallet. The key itself is hashed and dropped.
    pub async fn add_wallet(&self, request: AddWalletRequest) -> AppResult<WalletEntry> {
        let entry = WalletEntry {
            chain: request.chain,
            network: request.network,
            address: key_fingerprint(request.chain, &request.private_key),
        };

        self.store.upsert(entry.clone()).await?;
        info!(chain = %entry.chain, network = %entry.network, address = %entry.address, "Wallet added");

        Ok(entry)
    }

    pub async fn remove_wallet(&self, request: RemoveWalletRequest) -> AppResult<()> {
        if !self.store.remove(request.chain, &request.address).await? {
            debug!(chain = %request.chain, address = %request.address, "Wallet to remove not found");
            return Err(AppError::WalletNotFound {
                chain: request.chain.to_string(),
                address: request.address,
            });
        }

        info!(chain = %request.chain, address = %request.address, "Wallet removed");
        Ok(())
    }

    /// Wallets, optionally restricted to one chain
    pub async fn list_wallets(&self, chain: Option<Chain>) -> AppResult<Vec<WalletEntry>> {
        let wallets = self.store.list().await?;
        Ok(match chain {
            Some(chain) => wallets.into_iter().filter(|w| w.chain == chain).collect(),
            None => wallets,
        })
    }

    pub async fn is_available(&self) -> bool {
        self.store.is_available().await
    }
}

/// Stable identifier for a wallet derived from its key.
///
/// Hex keys are normalised (prefix and case) so the same EVM key always maps
/// to the same identifier.
pub fn key_fingerprint(chain: Chain, private_key: &str) -> String {
    let normalised = match chain.key_format() {
        KeyFormat::EvmHex => private_key.trim_start_matches("0x").to_ascii_lowercase(),
        KeyFormat::SolanaBase58 | KeyFormat::RippleSeed => private_key.to_string(),
    };

    let mut hasher = Sha256::new();
    hasher.update(chain.as_str().as_bytes());
    hasher.update(b":");
    hasher.update(normalised.as_bytes());
    let digest = hasher.finalize();

    hex::encode(&digest[..FINGERPRINT_BYTES])
}
