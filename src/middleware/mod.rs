//! HTTP middleware

pub mod security_headers;

pub use security_headers::SecurityHeadersMiddleware;
