use crate::{
    application::services::WalletService,
    domain::{health::*, wallet::WalletValidators},
    shared::error::AppResult,
};
use serde_json::json;
use std::sync::Arc;
use std::time::Instant;

/// Health check use case
pub struct HealthCheckUseCase {
    validators: WalletValidators,
    wallet_service: Arc<WalletService>,
    started_at: Instant,
}

impl HealthCheckUseCase {
    /// Create a new health check use case
    pub fn new(validators: WalletValidators, wallet_service: Arc<WalletService>) -> Self {
        Self {
            validators,
            wallet_service,
            started_at: Instant::now(),
        }
    }

    /// Execute health check over the validators and the wallet store
    pub async fn execute(&self) -> AppResult<HealthResponse> {
        let validators_ready = !self.validators.add.is_empty() && !self.validators.remove.is_empty();
        let store_available = self.wallet_service.is_available().await;

        let components = vec![
            ComponentCheck::new("validators", validators_ready, true),
            ComponentCheck::new("wallet_store", store_available, false),
        ];

        let details = json!({
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "version": env!("CARGO_PKG_VERSION"),
            "uptime": self.get_uptime(),
        });

        Ok(HealthResponse::from_checks(components, details))
    }

    /// Process uptime as "Xd Yh Zm"
    fn get_uptime(&self) -> String {
        let secs = self.started_at.elapsed().as_secs();
        let days = secs / 86400;
        let hours = (secs % 86400) / 3600;
        let minutes = (secs % 3600) / 60;
        format!("{}d {}h {}m", days, hours, minutes)
    }
}
