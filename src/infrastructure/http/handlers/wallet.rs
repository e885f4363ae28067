//! Wallet handlers
//!
//! Bodies arrive as raw JSON values; the use case validates them before any
//! typed decoding happens.

use crate::{
    application::use_cases::WalletUseCase,
    config::AppConfig,
    infrastructure::http::{responses::ResponseFormatter, utils::extract_client_ip},
    shared::{error::AppError, logging::LoggingUtils},
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;
use warp::Reply;

pub const ADD_WALLET_ROUTE: &str = "POST /wallet/add";
pub const REMOVE_WALLET_ROUTE: &str = "DELETE /wallet/remove";
pub const LIST_WALLETS_ROUTE: &str = "GET /wallet";

/// Query string of `GET /wallet`
#[derive(Debug, Default, Deserialize)]
pub struct ListWalletsQuery {
    pub chain: Option<String>,
}

/// Handle `POST /wallet/add`
pub async fn handle_add_wallet(
    body: Value,
    forwarded_for: Option<String>,
    wallet_use_case: Arc<WalletUseCase>,
    config: AppConfig,
) -> Result<impl Reply, warp::reject::Rejection> {
    let context = RequestContext::start(ADD_WALLET_ROUTE, forwarded_for, &config);
    let result = wallet_use_case.add_wallet(&body).await;
    Ok(context.finish(result, &config))
}

/// Handle `DELETE /wallet/remove`
pub async fn handle_remove_wallet(
    body: Value,
    forwarded_for: Option<String>,
    wallet_use_case: Arc<WalletUseCase>,
    config: AppConfig,
) -> Result<impl Reply, warp::reject::Rejection> {
    let context = RequestContext::start(REMOVE_WALLET_ROUTE, forwarded_for, &config);
    let result = wallet_use_case
        .remove_wallet(&body)
        .await
        .map(|()| json!({ "message": "Wallet removed" }));
    Ok(context.finish(result, &config))
}

/// Handle `GET /wallet`
pub async fn handle_list_wallets(
    query: ListWalletsQuery,
    forwarded_for: Option<String>,
    wallet_use_case: Arc<WalletUseCase>,
    config: AppConfig,
) -> Result<impl Reply, warp::reject::Rejection> {
    let context = RequestContext::start(LIST_WALLETS_ROUTE, forwarded_for, &config);
    let result = wallet_use_case.list_wallets(query.chain.as_deref()).await;
    Ok(context.finish(result, &config))
}

/// Per-request id, route and timing used for logging
struct RequestContext {
    request_id: String,
    route: &'static str,
    started: Instant,
}

impl RequestContext {
    fn start(route: &'static str, forwarded_for: Option<String>, config: &AppConfig) -> Self {
        let request_id = LoggingUtils::generate_request_id();
        if config.security.enable_request_logging {
            LoggingUtils::log_request(&request_id, route, &extract_client_ip(forwarded_for));
        }
        Self {
            request_id,
            route,
            started: Instant::now(),
        }
    }

    fn finish<T: serde::Serialize>(
        self,
        result: Result<T, AppError>,
        config: &AppConfig,
    ) -> warp::reply::WithStatus<Box<dyn Reply>> {
        let duration_ms = self.started.elapsed().as_millis() as u64;
        match result {
            Ok(body) => {
                LoggingUtils::log_success(&self.request_id, self.route, duration_ms);
                ResponseFormatter::success(&body, config)
            }
            Err(e @ AppError::RequestValidation { .. }) => {
                LoggingUtils::log_rejected(&self.request_id, self.route, e.violations());
                ResponseFormatter::from_app_error(&e, config)
            }
            Err(e) => {
                LoggingUtils::log_error(&self.request_id, self.route, &e, duration_ms);
                ResponseFormatter::from_app_error(&e, config)
            }
        }
    }
}
