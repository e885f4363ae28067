//! Wallet routes module

use crate::{
    application::use_cases::WalletUseCase,
    config::AppConfig,
    infrastructure::http::{
        handlers::{handle_add_wallet, handle_list_wallets, handle_remove_wallet, ListWalletsQuery},
        utils::{with_config, with_wallet_use_case},
    },
};
use std::sync::Arc;
use warp::Filter;

/// Wallet routes configuration
pub struct WalletRoutes;

impl WalletRoutes {
    /// `POST /wallet/add`
    pub fn create_add_route(
        config: AppConfig,
        wallet_use_case: Arc<WalletUseCase>,
    ) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        warp::path!("wallet" / "add")
            .and(warp::post())
            .and(warp::body::content_length_limit(config.server.max_request_size as u64))
            .and(warp::body::json())
            .and(warp::header::optional::<String>("x-forwarded-for"))
            .and(with_wallet_use_case(wallet_use_case))
            .and(with_config(config))
            .and_then(handle_add_wallet)
    }

    /// `DELETE /wallet/remove`
    pub fn create_remove_route(
        config: AppConfig,
        wallet_use_case: Arc<WalletUseCase>,
    ) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        warp::path!("wallet" / "remove")
            .and(warp::delete())
            .and(warp::body::content_length_limit(config.server.max_request_size as u64))
            .and(warp::body::json())
            .and(warp::header::optional::<String>("x-forwarded-for"))
            .and(with_wallet_use_case(wallet_use_case))
            .and(with_config(config))
            .and_then(handle_remove_wallet)
    }

    /// `GET /wallet[?chain=<name>]`
    pub fn create_list_route(
        config: AppConfig,
        wallet_use_case: Arc<WalletUseCase>,
    ) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        warp::path!("wallet")
            .and(warp::get())
            .and(warp::query::<ListWalletsQuery>())
            .and(warp::header::optional::<String>("x-forwarded-for"))
            .and(with_wallet_use_case(wallet_use_case))
            .and(with_config(config))
            .and_then(handle_list_wallets)
    }

    /// All wallet routes
    pub fn create_wallet_routes(
        config: AppConfig,
        wallet_use_case: Arc<WalletUseCase>,
    ) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        Self::create_add_route(config.clone(), wallet_use_case.clone())
            .or(Self::create_remove_route(config.clone(), wallet_use_case.clone()))
            .or(Self::create_list_route(config, wallet_use_case))
    }
}
