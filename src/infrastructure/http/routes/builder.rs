//! Route builder module
//!
//! This module contains the main route builder that orchestrates the creation
//! of all application routes.

use crate::{
    application::use_cases::{GetMetricsUseCase, HealthCheckUseCase, WalletUseCase},
    config::AppConfig,
    infrastructure::http::{
        responses::recover_rejection,
        routes::{HealthRoutes, MetricsRoutes, WalletRoutes},
    },
};
use std::sync::Arc;
use warp::Filter;

/// Route builder that orchestrates the creation of all application routes
pub struct RouteBuilder;

impl RouteBuilder {
    /// Build all application routes
    pub fn build_routes(
        config: AppConfig,
        wallet_use_case: Arc<WalletUseCase>,
        health_use_case: Arc<HealthCheckUseCase>,
        metrics_use_case: Arc<GetMetricsUseCase>,
    ) -> impl Filter<Extract = impl warp::Reply, Error = std::convert::Infallible> + Clone {
        let wallet_routes = WalletRoutes::create_wallet_routes(config.clone(), wallet_use_case);

        let health_route = HealthRoutes::create_health_route(config.clone(), health_use_case);

        let metrics_route = MetricsRoutes::create_metrics_route(config.clone(), metrics_use_case);

        wallet_routes
            .or(health_route)
            .or(metrics_route)
            .recover(recover_rejection(config))
    }
}
