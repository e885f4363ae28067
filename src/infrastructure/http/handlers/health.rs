//! Health check handler module
//!
//! This module contains the health check endpoint handler for monitoring system status.

use crate::{
    application::use_cases::HealthCheckUseCase,
    config::AppConfig,
    infrastructure::http::responses::ResponseFormatter,
};
use std::sync::Arc;
use warp::http::StatusCode;
use warp::Reply;

/// Handle health check requests
pub async fn handle_health_request(
    health_use_case: Arc<HealthCheckUseCase>,
    config: AppConfig,
) -> Result<impl Reply, warp::reject::Rejection> {
    let reply = match health_use_case.execute().await {
        Ok(health) => {
            let status = StatusCode::from_u16(health.http_status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            ResponseFormatter::json(&health, status, &config)
        }
        Err(e) => ResponseFormatter::from_app_error(&e, &config),
    };

    Ok(reply)
}
