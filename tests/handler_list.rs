mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use hash_shortener::api::handlers::list_handler;

#[tokio::test]
async fn test_list_empty() {
    let (state, _store) = common::create_test_state();
    let app = Router::new()
        .route("/list", get(list_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/list").await;

    response.assert_status_ok();
    response.assert_json(&serde_json::json!([]));
}

#[tokio::test]
async fn test_list_returns_all_entries() {
    let (state, store) = common::create_test_state();
    let app = Router::new()
        .route("/list", get(list_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    common::create_visited_link(&store, "246f633", "https://www.example.com/page", 1);
    common::create_test_link(&store, "e0e5822", "https://rust-lang.org");

    let response = server.get("/list").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let mut items = json.as_array().unwrap().clone();
    items.sort_by_key(|item| item["hash"].as_str().unwrap().to_string());

    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["hash"], "246f633");
    assert_eq!(items[0]["original_url"], "https://www.example.com/page");
    assert_eq!(items[0]["hits"], 1);
    assert_eq!(items[1]["hash"], "e0e5822");
    assert_eq!(items[1]["hits"], 0);
}
