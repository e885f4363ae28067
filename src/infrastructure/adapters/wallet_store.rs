//! In-memory wallet store

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::chain::Chain;
use crate::domain::wallet::{WalletEntry, WalletStore};
use crate::shared::error::AppResult;

/// Wallet registry kept in process memory, keyed by chain and address
#[derive(Clone, Default)]
pub struct InMemoryWalletStore {
    wallets: Arc<RwLock<BTreeMap<(Chain, String), WalletEntry>>>,
}

impl InMemoryWalletStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl WalletStore for InMemoryWalletStore {
    async fn upsert(&self, entry: WalletEntry) -> AppResult<()> {
        let key = (entry.chain, entry.address.clone());
        self.wallets.write().await.insert(key, entry);
        Ok(())
    }

    async fn remove(&self, chain: Chain, address: &str) -> AppResult<bool> {
        let removed = self.wallets.write().await.remove(&(chain, address.to_string()));
        Ok(removed.is_some())
    }

    async fn list(&self) -> AppResult<Vec<WalletEntry>> {
        Ok(self.wallets.read().await.values().cloned().collect())
    }
}
