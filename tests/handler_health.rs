mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use hash_shortener::api::handlers::health_handler;

#[tokio::test]
async fn test_health_check() {
    let (state, store) = common::create_test_state();
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    common::create_test_link(&store, "246f633", "https://www.example.com/page");

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(json["checks"]["store"]["status"], "ok");
    assert_eq!(json["checks"]["store"]["message"], "Entries: 1");
}
