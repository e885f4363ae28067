//! Metrics handler module

use crate::{
    application::use_cases::GetMetricsUseCase,
    config::AppConfig,
    infrastructure::http::responses::ResponseFormatter,
};
use std::sync::Arc;
use warp::Reply;

/// Handle metrics requests
pub async fn handle_metrics_request(
    metrics_use_case: Arc<GetMetricsUseCase>,
    config: AppConfig,
) -> Result<impl Reply, warp::reject::Rejection> {
    let metrics_data = metrics_use_case.execute();
    Ok(ResponseFormatter::success(&metrics_data, &config))
}
