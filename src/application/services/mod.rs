//! Application services - Orchestration of domain logic

pub mod metrics_service;
pub mod wallet_service;

pub use metrics_service::MetricsService;
pub use wallet_service::WalletService;
