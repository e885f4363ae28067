//! JSON replies for the gateway routes
//!
//! Success bodies, `AppError` bodies and recovered warp rejections all share
//! one shape and carry the security headers.

use crate::{
    config::AppConfig,
    middleware::security_headers::{create_json_response_with_security_headers, SecurityHeadersMiddleware},
    shared::error::AppError,
};
use serde::Serialize;
use serde_json::json;
use std::convert::Infallible;
use warp::http::StatusCode;
use warp::reply::WithStatus;
use warp::{Rejection, Reply};

/// Response formatter for HTTP responses
pub struct ResponseFormatter;

impl ResponseFormatter {
    /// Format a JSON body with the given status and security headers
    pub fn json<T: Serialize>(body: &T, status: StatusCode, config: &AppConfig) -> WithStatus<Box<dyn Reply>> {
        let security_middleware = SecurityHeadersMiddleware::new(config.clone());
        let response = create_json_response_with_security_headers(body, &security_middleware);
        warp::reply::with_status(response, status)
    }

    /// Format a successful response
    pub fn success<T: Serialize>(body: &T, config: &AppConfig) -> WithStatus<Box<dyn Reply>> {
        Self::json(body, StatusCode::OK, config)
    }

    /// Format an application error; validation failures list every violation
    pub fn from_app_error(error: &AppError, config: &AppConfig) -> WithStatus<Box<dyn Reply>> {
        Self::json(&error.to_json(), error.http_status_code(), config)
    }

    /// Format a bare message with status
    pub fn message(message: &str, status: StatusCode, config: &AppConfig) -> WithStatus<Box<dyn Reply>> {
        Self::json(&json!({ "message": message }), status, config)
    }
}

/// Turn warp's own rejections into JSON bodies in the gateway's error shape
pub fn recover_rejection(
    config: AppConfig,
) -> impl Fn(Rejection) -> std::future::Ready<Result<WithStatus<Box<dyn Reply>>, Infallible>> + Clone + Send + Sync {
    move |rejection: Rejection| {
        let reply = if rejection.is_not_found() {
            ResponseFormatter::message("Not found", StatusCode::NOT_FOUND, &config)
        } else if let Some(e) = rejection.find::<warp::filters::body::BodyDeserializeError>() {
            ResponseFormatter::from_app_error(&AppError::Json(e.to_string()), &config)
        } else if rejection.find::<warp::reject::PayloadTooLarge>().is_some() {
            let error = AppError::RequestTooLarge { limit: config.server.max_request_size };
            ResponseFormatter::from_app_error(&error, &config)
        } else if rejection.find::<warp::reject::UnsupportedMediaType>().is_some() {
            ResponseFormatter::message("Expected a JSON body", StatusCode::UNSUPPORTED_MEDIA_TYPE, &config)
        } else if rejection.find::<warp::reject::LengthRequired>().is_some() {
            ResponseFormatter::message("Content-Length required", StatusCode::LENGTH_REQUIRED, &config)
        } else if rejection.find::<warp::reject::InvalidQuery>().is_some() {
            ResponseFormatter::message("Invalid query string", StatusCode::BAD_REQUEST, &config)
        } else if rejection.find::<warp::reject::MethodNotAllowed>().is_some() {
            ResponseFormatter::message("Method not allowed", StatusCode::METHOD_NOT_ALLOWED, &config)
        } else {
            ResponseFormatter::from_app_error(&AppError::Internal(format!("{:?}", rejection)), &config)
        };
        std::future::ready(Ok(reply))
    }
}
