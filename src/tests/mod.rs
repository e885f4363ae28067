//! Test suite for the gateway
//!
//! - Unit tests composing validators across layers
//! - Integration tests driving the full route tree
//! - Security tests for key handling and hostile input
//! - Fixtures shared by all of the above

pub mod fixtures;
pub mod integration;
pub mod security;

/// Test configuration and utilities
pub mod config {
    use crate::config::AppConfig;
    use std::sync::Once;

    static INIT: Once = Once::new();

    /// Initialize test environment
    pub fn init() {
        INIT.call_once(|| {
            let _ = tracing_subscriber::fmt()
                .with_env_filter("debug")
                .with_test_writer()
                .try_init();
        });
    }

    /// Create test configuration
    pub fn test_config() -> AppConfig {
        let mut config = AppConfig::default();
        config.server.port = 0;
        config.server.bind_address = "127.0.0.1".parse().unwrap();
        config
    }

    /// Test configuration with security headers, request logging and metrics off
    pub fn minimal_test_config() -> AppConfig {
        let mut config = test_config();
        config.security.enable_security_headers = false;
        config.security.enable_request_logging = false;
        config.metrics.enabled = false;
        config
    }
}

/// Test utilities and helpers
pub mod utils {
    use serde_json::Value;

    /// Parse a JSON response body
    pub fn json_body(body: &[u8]) -> Value {
        serde_json::from_slice(body).unwrap()
    }

    /// Assert the 400 validation body shape and return its `(field, message)` pairs
    pub fn assert_validation_body(body: &Value) -> Vec<(String, String)> {
        assert_eq!(body["message"], "Request validation failed");
        body["errors"]
            .as_array()
            .unwrap()
            .iter()
            .map(|e| {
                (
                    e["field"].as_str().unwrap().to_string(),
                    e["message"].as_str().unwrap().to_string(),
                )
            })
            .collect()
    }

    /// Field names reported in a 400 validation body
    pub fn violated_fields(body: &Value) -> Vec<String> {
        assert_validation_body(body).into_iter().map(|(field, _)| field).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_config_initialization() {
        config::init();
        let test_config = config::test_config();
        assert_eq!(test_config.server.port, 0);
        assert!(test_config.security.enable_security_headers);
    }

    #[test]
    fn test_minimal_config() {
        let config = config::minimal_test_config();
        assert!(!config.security.enable_security_headers);
        assert!(!config.metrics.enabled);
    }

    #[test]
    fn test_validation_body_helper() {
        let body = json!({
            "message": "Request validation failed",
            "errors": [{"field": "chain", "message": "bad"}]
        });
        assert_eq!(utils::violated_fields(&body), vec!["chain".to_string()]);
    }
}
