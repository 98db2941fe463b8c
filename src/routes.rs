//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /create`         - Create a short link
//! - `GET  /health`         - Health check: DB, cache, access queue
//! - `GET  /stats/{alias}`  - Access statistics for a link
//! - `GET  /{alias}`        - Short link redirect
//!
//! Static segments win over the `/{alias}` capture, so `/create`, `/health`,
//! and `/stats/...` are never shadowed by an alias lookup.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::{create_handler, health_handler, redirect_handler, stats_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::{get, post};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/create", post(create_handler))
        .route("/health", get(health_handler))
        .route("/stats/{alias}", get(stats_handler))
        .route("/{alias}", get(redirect_handler))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
