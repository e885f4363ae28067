use serde::{Deserialize, Serialize};

use crate::domain::chain::Chain;

/// Body of `POST /wallet/add`
#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddWalletRequest {
    pub chain: Chain,
    pub network: String,
    pub private_key: String,
}

impl std::fmt::Debug for AddWalletRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AddWalletRequest")
            .field("chain", &self.chain)
            .field("network", &self.network)
            .field("private_key", &"<redacted>")
            .finish()
    }
}

/// Body of `DELETE /wallet/remove`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoveWalletRequest {
    pub chain: Chain,
    pub address: String,
}

/// A wallet known to the gateway. Never holds key material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletEntry {
    pub chain: Chain,
    pub network: String,
    pub address: String,
}
