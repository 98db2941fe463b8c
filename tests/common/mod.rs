#![allow(dead_code)]

use shortlink::domain::access_event::AccessEvent;
use shortlink::infrastructure::cache::NullCache;
use shortlink::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;
use tokio::sync::mpsc;

pub fn create_test_state(pool: PgPool) -> (AppState, mpsc::Receiver<AccessEvent>) {
    let (tx, rx) = mpsc::channel(100);
    let state = AppState::new(Arc::new(pool), tx, Arc::new(NullCache));
    (state, rx)
}

pub async fn create_test_link(pool: &PgPool, url: &str) -> i64 {
    sqlx::query_scalar::<_, i64>("INSERT INTO links (long_url) VALUES ($1) RETURNING id")
        .bind(url)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn access_count(pool: &PgPool, id: i64) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT access_count FROM links WHERE id = $1")
        .bind(id)
        .fetch_one(pool)
        .await
        .unwrap()
}
