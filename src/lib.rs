//! Chain Gateway - JSON API gateway for multi-chain wallet operations
//!
//! Every request body is checked by declarative, composable validators before
//! any business logic runs. Validation failures are reported per field, all at
//! once, and map to HTTP 400.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod middleware;
pub mod shared;

#[cfg(test)]
mod tests;

pub use config::AppConfig;
pub use infrastructure::http::HttpServer;
pub use shared::error::{AppError, AppResult};

/// Application result type
pub type Result<T> = std::result::Result<T, AppError>;
