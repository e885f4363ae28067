//! Integration tests for the gateway
//!
//! Requests go through the complete route tree built by `HttpServer`,
//! including rejection recovery and security headers.

use crate::{
    domain::wallet::validators::{
        CHAIN_FIELD, INVALID_CHAIN_ERROR, INVALID_NETWORK_ERROR, INVALID_SOL_PRIVATE_KEY_ERROR,
        NETWORK_FIELD, PRIVATE_KEY_FIELD,
    },
    infrastructure::http::server::HttpServer,
    tests::{
        config, fixtures,
        utils::{assert_validation_body, json_body, violated_fields},
    },
};
use serde_json::{json, Value};
use warp::http::StatusCode;
use warp::test::request;
use warp::{Filter, Reply};

fn routes() -> impl Filter<Extract = impl Reply, Error = std::convert::Infallible> + Clone + 'static {
    config::init();
    HttpServer::new(config::test_config()).unwrap().routes()
}

async fn post_add<F>(routes: &F, body: &Value) -> (StatusCode, Value)
where
    F: Filter + 'static,
    F::Extract: Reply + Send,
{
    let res = request().method("POST").path("/wallet/add").json(body).reply(routes).await;
    (res.status(), json_body(res.body()))
}

#[tokio::test]
async fn ethereum_wallet_is_accepted() {
    let routes = routes();
    let (status, body) = post_add(&routes, &fixtures::add_body("ethereum", "mainnet", &fixtures::eth_key())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["chain"], "ethereum");
    assert_eq!(body["network"], "mainnet");
    assert_eq!(body["address"].as_str().unwrap().len(), 40);
}

#[tokio::test]
async fn solana_garbage_key_reports_solana_message() {
    let routes = routes();
    let (status, body) = post_add(&routes, &fixtures::add_body("solana", "mainnet", "notbase58!!")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        assert_validation_body(&body),
        vec![(PRIVATE_KEY_FIELD.to_string(), INVALID_SOL_PRIVATE_KEY_ERROR.to_string())]
    );
}

#[tokio::test]
async fn unknown_chain_reports_chain_only() {
    let routes = routes();
    let (status, body) = post_add(&routes, &fixtures::add_body("unknown", "x", "irrelevant")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        assert_validation_body(&body),
        vec![(CHAIN_FIELD.to_string(), INVALID_CHAIN_ERROR.to_string())]
    );
}

#[tokio::test]
async fn every_violation_is_reported_in_declaration_order() {
    let routes = routes();
    let (status, body) = post_add(&routes, &json!({"chain": "solana", "privateKey": "0xdead"})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(violated_fields(&body), vec![PRIVATE_KEY_FIELD, NETWORK_FIELD]);
    assert_eq!(body["errors"][1]["message"], INVALID_NETWORK_ERROR);
}

#[tokio::test]
async fn non_object_body_is_a_validation_failure() {
    let routes = routes();
    let (status, body) = post_add(&routes, &json!([1, 2, 3])).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(violated_fields(&body), vec![CHAIN_FIELD, NETWORK_FIELD]);
}

#[tokio::test]
async fn malformed_json_is_bad_request_with_json_body() {
    let routes = routes();
    let res = request()
        .method("POST")
        .path("/wallet/add")
        .header("content-type", "application/json")
        .body("{\"chain\": ")
        .reply(&routes)
        .await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = json_body(res.body());
    assert!(body["message"].as_str().unwrap().starts_with("Malformed JSON body"));
}

#[tokio::test]
async fn add_list_remove_round_trip() {
    let routes = routes();
    let (_, added) = post_add(&routes, &fixtures::add_body("ripple", "testnet", &fixtures::ripple_seed())).await;
    let address = added["address"].as_str().unwrap().to_string();

    let res = request().method("GET").path("/wallet?chain=ripple").reply(&routes).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(json_body(res.body()), json!([added]));

    let res = request()
        .method("DELETE")
        .path("/wallet/remove")
        .json(&fixtures::remove_body("ripple", &address))
        .reply(&routes)
        .await;
    assert_eq!(res.status(), StatusCode::OK);

    let res = request().method("GET").path("/wallet").reply(&routes).await;
    assert_eq!(json_body(res.body()), json!([]));

    let res = request()
        .method("DELETE")
        .path("/wallet/remove")
        .json(&fixtures::remove_body("ripple", &address))
        .reply(&routes)
        .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn same_request_gives_same_verdict() {
    let routes = routes();
    let body = json!({"chain": "harmony", "network": false, "privateKey": "zz"});

    let (_, first) = post_add(&routes, &body).await;
    let (_, second) = post_add(&routes, &body).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn unknown_path_is_json_not_found() {
    let routes = routes();
    let res = request().method("GET").path("/nope").reply(&routes).await;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(res.body())["message"], "Not found");
}

#[tokio::test]
async fn metrics_count_rejections_and_violations() {
    let routes = routes();
    post_add(&routes, &json!({})).await;
    post_add(&routes, &fixtures::add_body("polygon", "mainnet", &fixtures::eth_key())).await;

    let res = request().method("GET").path("/metrics").reply(&routes).await;
    let metrics = json_body(res.body());
    assert_eq!(metrics["total_requests"], 2);
    assert_eq!(metrics["rejected_requests"], 1);
    assert_eq!(metrics["field_violations"], 2);
    assert_eq!(metrics["successful_requests"], 1);
}

#[tokio::test]
async fn health_reports_components() {
    let routes = routes();
    let res = request().method("GET").path("/health").reply(&routes).await;

    assert_eq!(res.status(), StatusCode::OK);
    let body = json_body(res.body());
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["components"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn minimal_config_hides_metrics_and_headers() {
    let routes = HttpServer::new(config::minimal_test_config()).unwrap().routes();

    let res = request().method("GET").path("/metrics").reply(&routes).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = request().method("GET").path("/health").reply(&routes).await;
    assert!(!res.headers().contains_key("content-security-policy"));
}
