//! Metrics routes module

use crate::{
    application::use_cases::GetMetricsUseCase,
    config::AppConfig,
    infrastructure::http::{
        handlers::handle_metrics_request,
        utils::{with_config, with_metrics_use_case},
    },
};
use std::sync::Arc;
use warp::Filter;

/// Metrics routes configuration
pub struct MetricsRoutes;

impl MetricsRoutes {
    /// Create the metrics endpoint route; it answers 404 when metrics are disabled
    pub fn create_metrics_route(
        config: AppConfig,
        metrics_use_case: Arc<GetMetricsUseCase>,
    ) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        let enabled = config.metrics.enabled;

        warp::path!("metrics")
            .and(warp::get())
            .and(Self::enabled(enabled))
            .and(with_metrics_use_case(metrics_use_case))
            .and(with_config(config))
            .and_then(handle_metrics_request)
    }

    fn enabled(enabled: bool) -> impl Filter<Extract = (), Error = warp::Rejection> + Clone {
        warp::any()
            .and_then(move || async move {
                if enabled {
                    Ok(())
                } else {
                    Err(warp::reject::not_found())
                }
            })
            .untuple_one()
    }
}
