//! Logging for the gateway
//!
//! Subscriber setup plus request, rejection and failure log lines.
//! Request bodies are never logged: they may carry private keys.

use tracing::{error, info, warn};

use crate::domain::validation::ValidationError;

/// Logging utilities for the application
pub struct LoggingUtils;

impl LoggingUtils {
    /// Initialize logging with the specified configuration
    pub fn initialize(level: &str, format: &str) -> crate::Result<()> {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(level));

        let builder = fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(false)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false);

        let result = match format {
            "compact" => tracing::subscriber::set_global_default(builder.compact().finish()),
            _ => tracing::subscriber::set_global_default(builder.finish()),
        };

        result.map_err(|e| {
            crate::shared::error::AppError::Internal(format!("Failed to initialize logging: {}", e))
        })?;

        Ok(())
    }

    /// Log an incoming request
    pub fn log_request(request_id: &str, route: &str, client_ip: &str) {
        info!(
            request_id = %request_id,
            route = %route,
            client_ip = %client_ip,
            "Processing gateway request"
        );
    }

    /// Log a request rejected by shape validation
    pub fn log_rejected(request_id: &str, route: &str, violations: &[ValidationError]) {
        let fields: Vec<&str> = violations.iter().map(|v| v.field.as_str()).collect();
        warn!(
            request_id = %request_id,
            route = %route,
            violation_count = violations.len(),
            fields = ?fields,
            "Request rejected by validation"
        );
    }

    /// Log a successful response
    pub fn log_success(request_id: &str, route: &str, duration_ms: u64) {
        info!(
            request_id = %request_id,
            route = %route,
            duration_ms = %duration_ms,
            "Request completed successfully"
        );
    }

    /// Log an error response
    pub fn log_error(request_id: &str, route: &str, error: &crate::shared::error::AppError, duration_ms: u64) {
        error!(
            request_id = %request_id,
            route = %route,
            error = %error,
            duration_ms = %duration_ms,
            "Request failed"
        );
    }

    /// Generate a unique request ID
    pub fn generate_request_id() -> String {
        format!("req_{}", uuid::Uuid::new_v4().simple())
    }
}
