mod common;

use axum::http::StatusCode;
use axum::{
    Router,
    routing::{get, post},
};
use axum_test::TestServer;
use serde_json::json;
use shortlink::api::handlers::{create_handler, redirect_handler};
use sqlx::PgPool;

#[sqlx::test]
async fn test_create_returns_short_link(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool);
    let app = Router::new()
        .route("/create", post(create_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server
        .post("/create")
        .json(&json!({
            "long_url": "https://example.com"
        }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["short_link"], "6laZE");
}

#[sqlx::test]
async fn test_create_same_url_twice_yields_distinct_aliases(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool);
    let app = Router::new()
        .route("/create", post(create_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response1 = server
        .post("/create")
        .json(&json!({ "long_url": "https://example.com" }))
        .await;
    let response2 = server
        .post("/create")
        .json(&json!({ "long_url": "https://example.com" }))
        .await;

    response1.assert_status(StatusCode::CREATED);
    response2.assert_status(StatusCode::CREATED);

    let alias1 = response1.json::<serde_json::Value>()["short_link"]
        .as_str()
        .unwrap()
        .to_string();
    let alias2 = response2.json::<serde_json::Value>()["short_link"]
        .as_str()
        .unwrap()
        .to_string();
    assert_ne!(alias1, alias2);
}

#[sqlx::test]
async fn test_create_invalid_url(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool);
    let app = Router::new()
        .route("/create", post(create_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server
        .post("/create")
        .json(&json!({ "long_url": "not-a-valid-url" }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

#[sqlx::test]
async fn test_create_missing_field(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool);
    let app = Router::new()
        .route("/create", post(create_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.post("/create").json(&json!({})).await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[sqlx::test]
async fn test_created_link_redirects(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool);
    let app = Router::new()
        .route("/create", post(create_handler))
        .route("/{alias}", get(redirect_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let created = server
        .post("/create")
        .json(&json!({ "long_url": "https://example.com/landing" }))
        .await;
    created.assert_status(StatusCode::CREATED);

    let alias = created.json::<serde_json::Value>()["short_link"]
        .as_str()
        .unwrap()
        .to_string();

    let response = server.get(&format!("/{alias}")).await;

    assert_eq!(response.status_code(), 307);
    assert_eq!(response.header("location"), "https://example.com/landing");
}
