use async_trait::async_trait;

use crate::domain::chain::Chain;
use crate::domain::wallet::models::WalletEntry;
use crate::shared::error::AppResult;

/// Persistence for wallets known to the gateway (driven port)
#[async_trait]
pub trait WalletStore: Send + Sync {
    /// Insert or replace the wallet identified by its chain and address
    async fn upsert(&self, entry: WalletEntry) -> AppResult<()>;

    /// Remove a wallet, returning whether one was present
    async fn remove(&self, chain: Chain, address: &str) -> AppResult<bool>;

    /// All wallets, ordered by chain then address
    async fn list(&self) -> AppResult<Vec<WalletEntry>>;

    /// Whether the store can currently serve requests
    async fn is_available(&self) -> bool {
        true
    }
}
