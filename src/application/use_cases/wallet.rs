//! Wallet use cases - validate, then hand typed requests to the service

use serde_json::Value;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, warn};

use crate::application::services::{MetricsService, WalletService};
use crate::domain::chain::Chain;
use crate::domain::validation::ValidationError;
use crate::domain::wallet::validators::{CHAIN_FIELD, INVALID_CHAIN_ERROR};
use crate::domain::wallet::{AddWalletRequest, RemoveWalletRequest, WalletEntry, WalletValidators};
use crate::shared::error::{AppError, AppResult};

/// Use case behind the wallet routes
pub struct WalletUseCase {
    validators: WalletValidators,
    wallet_service: Arc<WalletService>,
    metrics_service: Arc<MetricsService>,
}

impl WalletUseCase {
    pub fn new(
        validators: WalletValidators,
        wallet_service: Arc<WalletService>,
        metrics_service: Arc<MetricsService>,
    ) -> Self {
        Self {
            validators,
            wallet_service,
            metrics_service,
        }
    }

    /// `POST /wallet/add`
    pub async fn add_wallet(&self, body: &Value) -> AppResult<WalletEntry> {
        let start = Instant::now();
        let result = self.validated_add(body).await;
        self.record(&result, start);
        result
    }

    /// `DELETE /wallet/remove`
    pub async fn remove_wallet(&self, body: &Value) -> AppResult<()> {
        let start = Instant::now();
        let result = self.validated_remove(body).await;
        self.record(&result, start);
        result
    }

    /// `GET /wallet`, optionally filtered by a chain name
    pub async fn list_wallets(&self, chain: Option<&str>) -> AppResult<Vec<WalletEntry>> {
        let start = Instant::now();
        let result = match chain.map(Chain::from_str).transpose() {
            Ok(chain) => self.wallet_service.list_wallets(chain).await,
            Err(e) => {
                debug!("Rejecting wallet listing: {}", e);
                Err(AppError::RequestValidation {
                    errors: vec![ValidationError::new(CHAIN_FIELD, INVALID_CHAIN_ERROR)],
                })
            }
        };
        self.record(&result, start);
        result
    }

    // Exactly one validator runs per request; typed decoding only follows success.
    async fn validated_add(&self, body: &Value) -> AppResult<WalletEntry> {
        self.validators.add.validate(body)?;
        let request: AddWalletRequest = serde_json::from_value(body.clone())?;
        self.wallet_service.add_wallet(request).await
    }

    async fn validated_remove(&self, body: &Value) -> AppResult<()> {
        self.validators.remove.validate(body)?;
        let request: RemoveWalletRequest = serde_json::from_value(body.clone())?;
        self.wallet_service.remove_wallet(request).await
    }

    fn record<T>(&self, result: &AppResult<T>, start: Instant) {
        let duration_ms = start.elapsed().as_millis() as u64;
        match result {
            Ok(_) => self.metrics_service.record_success(duration_ms),
            Err(AppError::RequestValidation { errors }) => {
                self.metrics_service.record_rejection(errors.len(), duration_ms)
            }
            Err(e) => {
                warn!("Wallet request failed after validation: {}", e);
                self.metrics_service.record_failure(duration_ms)
            }
        }
    }
}
