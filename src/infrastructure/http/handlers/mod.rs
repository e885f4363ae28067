//! HTTP route handlers module
//!
//! This module contains separate route handlers for different endpoint types,
//! organized by functionality to improve maintainability and testability.

pub mod health;
pub mod metrics;
pub mod wallet;

pub use health::handle_health_request;
pub use metrics::handle_metrics_request;
pub use wallet::{handle_add_wallet, handle_list_wallets, handle_remove_wallet, ListWalletsQuery};
