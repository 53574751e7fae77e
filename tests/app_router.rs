mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use hash_shortener::domain::repositories::RedirectionStore;
use hash_shortener::routes::app_router;
use tower::ServiceExt;

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_shorten_redirect_list_flow() {
    let (state, store) = common::create_test_state();
    let app = app_router(state);

    let response = app
        .clone()
        .oneshot(
            Request::post("/short")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"url":"https://www.example.com/page"}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        body_json(response).await["url"],
        "http://localhost:8080/246f633"
    );

    let response = app
        .clone()
        .oneshot(Request::get("/246f633").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(
        response.headers()[header::LOCATION],
        "https://www.example.com/page"
    );

    let response = app
        .oneshot(Request::get("/list").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json[0]["hash"], "246f633");
    assert_eq!(json[0]["hits"], 1);
    assert_eq!(store.get("246f633").unwrap().hits, 1);
}

#[tokio::test]
async fn test_static_routes_take_precedence_over_hash() {
    let (state, store) = common::create_test_state();
    let app = app_router(state);

    let response = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "healthy");
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_trailing_slash_is_trimmed() {
    let (state, store) = common::create_test_state();
    common::create_test_link(&store, "e0e5822", "https://rust-lang.org");
    let app = app_router(state);

    let response = app
        .oneshot(Request::get("/e0e5822/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(response.headers()[header::LOCATION], "https://rust-lang.org");
}

#[tokio::test]
async fn test_unknown_hash_returns_error_envelope() {
    let (state, _store) = common::create_test_state();
    let app = app_router(state);

    let response = app
        .oneshot(Request::get("/0000000").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "not_found");
    assert_eq!(json["error"]["details"]["hash"], "0000000");
}
