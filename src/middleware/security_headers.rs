//! Security headers for JSON responses

use crate::config::AppConfig;
use serde::Serialize;
use warp::http::header::{HeaderName, HeaderValue};
use warp::Reply;

const SECURITY_HEADERS: [(&str, &str); 5] = [
    ("content-security-policy", "default-src 'none'; frame-ancestors 'none'"),
    ("x-content-type-options", "nosniff"),
    ("x-frame-options", "DENY"),
    ("referrer-policy", "no-referrer"),
    ("cache-control", "no-store"),
];

/// Adds the standard security headers to responses when enabled
#[derive(Debug, Clone)]
pub struct SecurityHeadersMiddleware {
    enabled: bool,
}

impl SecurityHeadersMiddleware {
    pub fn new(config: AppConfig) -> Self {
        Self {
            enabled: config.security.enable_security_headers,
        }
    }

    /// Apply the headers to a built response
    pub fn apply(&self, mut response: warp::reply::Response) -> warp::reply::Response {
        if !self.enabled {
            return response;
        }

        let headers = response.headers_mut();
        for (name, value) in SECURITY_HEADERS {
            headers.insert(HeaderName::from_static(name), HeaderValue::from_static(value));
        }
        response
    }
}

/// Serialize `body` as JSON and attach security headers
pub fn create_json_response_with_security_headers<T: Serialize>(
    body: &T,
    middleware: &SecurityHeadersMiddleware,
) -> Box<dyn Reply> {
    Box::new(middleware.apply(warp::reply::json(body).into_response()))
}
