mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use shortlink::api::handlers::stats_handler;
use shortlink::utils::base62;
use sqlx::PgPool;

#[sqlx::test]
async fn test_stats_success(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool.clone());
    let app = Router::new()
        .route("/stats/{alias}", get(stats_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let id = common::create_test_link(&pool, "https://example.com").await;
    let alias = base62::encode(id as u64);

    sqlx::query("UPDATE links SET access_count = 7 WHERE id = $1")
        .bind(id)
        .execute(&pool)
        .await
        .unwrap();

    let response = server.get(&format!("/stats/{alias}")).await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["long_url"], "https://example.com");
    assert_eq!(json["short_link"], alias.as_str());
    assert_eq!(json["access_count"], 7);
}

#[sqlx::test]
async fn test_stats_fresh_link_has_zero_count(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool.clone());
    let app = Router::new()
        .route("/stats/{alias}", get(stats_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let id = common::create_test_link(&pool, "https://example.com/fresh").await;
    let alias = base62::encode(id as u64);

    let response = server.get(&format!("/stats/{alias}")).await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["access_count"], 0);
}

#[sqlx::test]
async fn test_stats_not_found(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool);
    let app = Router::new()
        .route("/stats/{alias}", get(stats_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();
    let response = server.get("/stats/zzzzzz").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
    assert_eq!(json["error"]["message"], "Short link not found");
}

#[sqlx::test]
async fn test_stats_malformed_alias(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool);
    let app = Router::new()
        .route("/stats/{alias}", get(stats_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();
    let response = server.get("/stats/no-such-alias").await;

    response.assert_status_not_found();
}

#[sqlx::test]
async fn test_stats_does_not_record_access(pool: PgPool) {
    let (state, mut rx) = common::create_test_state(pool.clone());
    let app = Router::new()
        .route("/stats/{alias}", get(stats_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let id = common::create_test_link(&pool, "https://example.com").await;
    let alias = base62::encode(id as u64);

    let response = server.get(&format!("/stats/{alias}")).await;

    response.assert_status_ok();
    assert!(rx.try_recv().is_err());
    assert_eq!(common::access_count(&pool, id).await, 0);
}
