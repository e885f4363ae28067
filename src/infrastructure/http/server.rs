//! HTTP server implementation
//!
//! Wires the validators, wallet service and metrics into the warp routes.
//! Validators are assembled once here and shared by every request.

use crate::{
    application::{
        services::{MetricsService, WalletService},
        use_cases::{GetMetricsUseCase, HealthCheckUseCase, WalletUseCase},
    },
    config::AppConfig,
    domain::wallet::{WalletStore, WalletValidators},
    infrastructure::{adapters::InMemoryWalletStore, http::routes::RouteBuilder},
    shared::error::{AppError, AppResult},
};
use std::sync::Arc;
use tracing::{info, instrument};
use warp::{Filter, Reply};

/// HTTP server for the gateway
pub struct HttpServer {
    config: AppConfig,
    wallet_use_case: Arc<WalletUseCase>,
    metrics_use_case: Arc<GetMetricsUseCase>,
    health_use_case: Arc<HealthCheckUseCase>,
}

impl HttpServer {
    /// Create a new HTTP server backed by the in-memory wallet store
    pub fn new(config: AppConfig) -> AppResult<Self> {
        Self::with_store(config, Arc::new(InMemoryWalletStore::new()))
    }

    /// Create a new HTTP server over any wallet store.
    ///
    /// Fails when a rule set dispatches on a field it does not check.
    pub fn with_store(config: AppConfig, store: Arc<dyn WalletStore>) -> AppResult<Self> {
        // Initialize domain layer
        let validators = WalletValidators::build()?;
        info!(
            add_checks = validators.add.len(),
            remove_checks = validators.remove.len(),
            "Request validators assembled"
        );

        // Initialize application layer
        let wallet_service = Arc::new(WalletService::new(store));
        let metrics_service = Arc::new(MetricsService::new());

        // Initialize use cases
        let wallet_use_case = Arc::new(WalletUseCase::new(
            validators.clone(),
            wallet_service.clone(),
            metrics_service.clone(),
        ));
        let metrics_use_case = Arc::new(GetMetricsUseCase::new(metrics_service));
        let health_use_case = Arc::new(HealthCheckUseCase::new(validators, wallet_service));

        Ok(Self {
            config,
            wallet_use_case,
            metrics_use_case,
            health_use_case,
        })
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Run the HTTP server
    #[instrument(skip(self))]
    pub async fn run(self) -> AppResult<()> {
        let addr = self.config.server_address();
        let addr: std::net::SocketAddr = addr
            .parse()
            .map_err(|e| AppError::Config(format!("Invalid server address: {}", e)))?;

        info!("Starting HTTP server on {}", addr);
        warp::serve(self.routes()).run(addr).await;

        Ok(())
    }

    /// The application routes
    pub fn routes(self) -> impl Filter<Extract = impl Reply, Error = std::convert::Infallible> + Clone {
        RouteBuilder::build_routes(
            self.config,
            self.wallet_use_case,
            self.health_use_case,
            self.metrics_use_case,
        )
    }
}
