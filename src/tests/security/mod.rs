//! Security tests
//!
//! Key material must never come back out of the gateway, and hostile bodies
//! must be rejected without unbounded work.

use crate::{
    domain::{
        validation::predicates::MAX_BASE58_INPUT_LEN,
        wallet::validators::{INVALID_SOL_PRIVATE_KEY_ERROR, PRIVATE_KEY_FIELD},
    },
    infrastructure::http::server::HttpServer,
    tests::{config, fixtures, utils::{assert_validation_body, json_body}},
};
use serde_json::json;
use warp::http::StatusCode;
use warp::test::request;

#[tokio::test]
async fn accepted_key_is_not_echoed() {
    let routes = HttpServer::new(config::test_config()).unwrap().routes();
    let key = fixtures::sol_key();

    let res = request()
        .method("POST")
        .path("/wallet/add")
        .json(&fixtures::add_body("solana", "mainnet", &key))
        .reply(&routes)
        .await;
    assert_eq!(res.status(), StatusCode::OK);
    assert!(!String::from_utf8_lossy(res.body()).contains(&key));

    let res = request().method("GET").path("/wallet").reply(&routes).await;
    assert!(!String::from_utf8_lossy(res.body()).contains(&key));
}

#[tokio::test]
async fn rejected_key_is_not_echoed() {
    let routes = HttpServer::new(config::test_config()).unwrap().routes();
    let key = "0x".to_string() + &"f".repeat(63);

    let res = request()
        .method("POST")
        .path("/wallet/add")
        .json(&fixtures::add_body("ethereum", "mainnet", &key))
        .reply(&routes)
        .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert!(!String::from_utf8_lossy(res.body()).contains(&key));
}

#[tokio::test]
async fn oversized_base58_key_is_rejected_without_decoding() {
    let routes = HttpServer::new(config::test_config()).unwrap().routes();
    let key = "1".repeat(MAX_BASE58_INPUT_LEN * 40);

    let res = request()
        .method("POST")
        .path("/wallet/add")
        .json(&fixtures::add_body("solana", "mainnet", &key))
        .reply(&routes)
        .await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        assert_validation_body(&json_body(res.body())),
        vec![(PRIVATE_KEY_FIELD.to_string(), INVALID_SOL_PRIVATE_KEY_ERROR.to_string())]
    );
}

#[tokio::test]
async fn body_over_configured_limit_is_refused() {
    let mut config = config::test_config();
    config.server.max_request_size = 1024;
    let routes = HttpServer::new(config).unwrap().routes();

    let res = request()
        .method("POST")
        .path("/wallet/add")
        .json(&json!({"chain": "ethereum", "network": "x".repeat(4096), "privateKey": fixtures::eth_key()}))
        .reply(&routes)
        .await;

    assert_eq!(res.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(json_body(res.body())["message"], "Request body exceeds limit of 1024 bytes");
}

#[tokio::test]
async fn security_headers_on_error_responses() {
    let routes = HttpServer::new(config::test_config()).unwrap().routes();

    let res = request()
        .method("POST")
        .path("/wallet/add")
        .json(&json!({}))
        .reply(&routes)
        .await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(res.headers().get("x-content-type-options").unwrap(), "nosniff");
    assert_eq!(res.headers().get("x-frame-options").unwrap(), "DENY");
}
