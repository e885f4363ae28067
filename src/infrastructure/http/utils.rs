//! HTTP utilities - Common helper functions
//!
//! This module contains utility functions used across the HTTP infrastructure
//! for client identification and dependency injection into routes.

use crate::application::use_cases::{GetMetricsUseCase, HealthCheckUseCase, WalletUseCase};
use crate::config::AppConfig;
use std::sync::Arc;
use warp::Filter;

/// Client IP as reported by the reverse proxy, if it is a valid address
pub fn extract_client_ip(forwarded_for: Option<String>) -> String {
    forwarded_for
        .as_deref()
        .and_then(|raw| raw.split(',').next())
        .map(str::trim)
        .and_then(|ip| ip.parse::<std::net::IpAddr>().ok())
        .map(|ip| ip.to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

/// Helper function to inject the wallet use case into route
pub fn with_wallet_use_case(
    wallet_use_case: Arc<WalletUseCase>,
) -> impl Filter<Extract = (Arc<WalletUseCase>,), Error = std::convert::Infallible> + Clone {
    warp::any().map(move || wallet_use_case.clone())
}

/// Helper function to inject health use case into route
pub fn with_health_use_case(
    health_use_case: Arc<HealthCheckUseCase>,
) -> impl Filter<Extract = (Arc<HealthCheckUseCase>,), Error = std::convert::Infallible> + Clone {
    warp::any().map(move || health_use_case.clone())
}

/// Helper function to inject metrics use case into route
pub fn with_metrics_use_case(
    metrics_use_case: Arc<GetMetricsUseCase>,
) -> impl Filter<Extract = (Arc<GetMetricsUseCase>,), Error = std::convert::Infallible> + Clone {
    warp::any().map(move || metrics_use_case.clone())
}

/// Helper function to inject configuration into route
pub fn with_config(
    config: AppConfig,
) -> impl Filter<Extract = (AppConfig,), Error = std::convert::Infallible> + Clone {
    warp::any().map(move || config.clone())
}
