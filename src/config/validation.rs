//! Configuration validation module
//!
//! This module provides additional validation logic for configuration
//! beyond the basic validator crate validation.

use crate::config::AppConfig;
use crate::shared::error::AppError;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const LOG_FORMATS: [&str; 2] = ["full", "compact"];

/// Configuration validator for additional validation logic
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the complete configuration
    pub fn validate_config(config: &AppConfig) -> crate::Result<()> {
        Self::validate_logging_config(&config.logging)?;
        Self::validate_server_config(&config.server)?;

        Ok(())
    }

    /// Validate logging configuration
    fn validate_logging_config(logging: &crate::config::app_config::LoggingConfig) -> crate::Result<()> {
        // Plain levels are checked; anything with a directive is left to EnvFilter
        let level = logging.level.to_ascii_lowercase();
        if !level.contains('=') && !level.contains(',') && !LOG_LEVELS.contains(&level.as_str()) {
            return Err(AppError::Validation(format!("Invalid log level: {}", logging.level)));
        }

        if !LOG_FORMATS.contains(&logging.format.as_str()) {
            return Err(AppError::Validation(format!(
                "Invalid log format: {} (expected \"full\" or \"compact\")",
                logging.format
            )));
        }

        Ok(())
    }

    /// Validate server configuration
    fn validate_server_config(server: &crate::config::app_config::ServerConfig) -> crate::Result<()> {
        if server.bind_address.is_unspecified() {
            tracing::warn!("Server binds to all interfaces - wallet routes accept private keys and should not be exposed publicly");
        }

        Ok(())
    }
}
