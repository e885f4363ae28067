//! Use cases - Application business operations

pub mod health_check;
pub mod wallet;

pub use health_check::HealthCheckUseCase;
pub use wallet::WalletUseCase;

use crate::application::services::MetricsService;
use crate::shared::metrics::Metrics;
use std::sync::Arc;

/// Use case for getting metrics
pub struct GetMetricsUseCase {
    metrics_service: Arc<MetricsService>,
}

impl GetMetricsUseCase {
    /// Create a new metrics use case
    pub fn new(metrics_service: Arc<MetricsService>) -> Self {
        Self { metrics_service }
    }

    /// Execute metrics retrieval
    pub fn execute(&self) -> Metrics {
        self.metrics_service.snapshot()
    }
}
