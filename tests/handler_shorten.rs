mod common;

use axum::{Router, routing::post};
use axum_test::TestServer;
use hash_shortener::api::handlers::shorten_handler;
use hash_shortener::domain::repositories::RedirectionStore;
use hash_shortener::infrastructure::persistence::InMemoryStore;
use serde_json::json;
use std::sync::Arc;

fn server() -> (TestServer, Arc<InMemoryStore>) {
    let (state, store) = common::create_test_state();
    let app = Router::new()
        .route("/short", post(shorten_handler))
        .with_state(state);

    (TestServer::new(app).unwrap(), store)
}

#[tokio::test]
async fn test_shorten_success() {
    let (server, store) = server();

    let response = server
        .post("/short")
        .json(&json!({ "url": "https://www.example.com/page" }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["url"], "http://localhost:8080/246f633");

    let record = store.get("246f633").unwrap();
    assert_eq!(record.original_url, "https://www.example.com/page");
    assert_eq!(record.hits, 0);
}

#[tokio::test]
async fn test_shorten_same_url_twice_gives_new_hash() {
    let (server, store) = server();

    let first = server
        .post("/short")
        .json(&json!({ "url": "https://example.com" }))
        .await;
    let second = server
        .post("/short")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    assert_eq!(
        first.json::<serde_json::Value>()["url"],
        "http://localhost:8080/4a89bbe"
    );
    assert_eq!(
        second.json::<serde_json::Value>()["url"],
        "http://localhost:8080/614fb00"
    );
    assert_eq!(store.len(), 2);
}

#[tokio::test]
async fn test_shorten_empty_url() {
    let (server, store) = server();

    let response = server.post("/short").json(&json!({ "url": "" })).await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_shorten_invalid_url() {
    let (server, store) = server();

    let response = server
        .post("/short")
        .json(&json!({ "url": "not a url" }))
        .await;

    response.assert_status_bad_request();
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_shorten_missing_field() {
    let (server, _store) = server();

    let response = server
        .post("/short")
        .json(&json!({ "link": "https://example.com" }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["message"], "Invalid JSON body");
}

#[tokio::test]
async fn test_shorten_malformed_body() {
    let (server, _store) = server();

    let response = server
        .post("/short")
        .content_type("application/json")
        .text("{\"url\": ")
        .await;

    response.assert_status_bad_request();
}
