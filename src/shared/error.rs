//! Gateway errors
//!
//! `AppError` carries per-field validation violations, wallet lookups and
//! internal failures, and maps each to an HTTP status and JSON body.

use serde_json::Value;
use thiserror::Error;

use crate::domain::validation::ValidationError;

/// Application error types
#[derive(Error, Debug, Clone)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON serialization error: {0}")]
    Json(String),

    #[error("Validation error: {0}")]
    Validation(String),

    /// One or more request fields failed their shape checks
    #[error("Request validation failed: {}", describe_violations(.errors))]
    RequestValidation { errors: Vec<ValidationError> },

    #[error("Wallet not found: {chain}/{address}")]
    WalletNotFound { chain: String, address: String },

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Request body exceeds limit of {limit} bytes")]
    RequestTooLarge { limit: usize },
}

fn describe_violations(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}

impl AppError {
    /// Build the client-visible JSON body for this error
    pub fn to_json(&self) -> Value {
        match self {
            AppError::RequestValidation { errors } => serde_json::json!({
                "message": "Request validation failed",
                "errors": errors,
            }),
            AppError::Json(msg) => serde_json::json!({
                "message": format!("Malformed JSON body: {}", msg),
                "errors": [],
            }),
            AppError::WalletNotFound { .. } | AppError::RequestTooLarge { .. } => serde_json::json!({
                "message": self.to_string(),
                "errors": [],
            }),
            _ => serde_json::json!({
                "message": "Internal error",
                "errors": [],
            }),
        }
    }

    /// Get HTTP status code for this error
    pub fn http_status_code(&self) -> warp::http::StatusCode {
        match self {
            AppError::RequestValidation { .. } => warp::http::StatusCode::BAD_REQUEST,
            AppError::Json(_) => warp::http::StatusCode::BAD_REQUEST,
            AppError::WalletNotFound { .. } => warp::http::StatusCode::NOT_FOUND,
            AppError::RequestTooLarge { .. } => warp::http::StatusCode::PAYLOAD_TOO_LARGE,
            _ => warp::http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Field-level violations carried by this error, if any
    pub fn violations(&self) -> &[ValidationError] {
        match self {
            AppError::RequestValidation { errors } => errors,
            _ => &[],
        }
    }
}

/// Application result type
pub type AppResult<T> = Result<T, AppError>;

// Implement warp::reject::Reject for AppError
impl warp::reject::Reject for AppError {}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Json(err.to_string())
    }
}
