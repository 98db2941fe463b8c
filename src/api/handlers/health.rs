//! Health endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// `GET /health`
///
/// Probes the store with a `SELECT 1`, the access-event queue, and the
/// cache backend. Responds 200 with `"status": "healthy"` when all three
/// pass, 503 with `"status": "degraded"` otherwise; per-component results
/// are in the body either way.
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let database = check_database(&state).await;
    let access_queue = check_access_queue(&state);
    let cache = check_cache(&state).await;

    let all_healthy = database.is_ok() && access_queue.is_ok() && cache.is_ok();

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            database,
            access_queue,
            cache,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

async fn check_database(state: &AppState) -> CheckStatus {
    match sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(state.db.as_ref())
        .await
    {
        Ok(_) => CheckStatus::ok("Connected"),
        Err(e) => CheckStatus::error(format!("Database error: {}", e)),
    }
}

/// The queue only closes when the counting worker has died.
fn check_access_queue(state: &AppState) -> CheckStatus {
    if state.access_sender.is_closed() {
        CheckStatus::error("Access queue is closed")
    } else {
        CheckStatus::ok(format!("Capacity: {}", state.access_sender.capacity()))
    }
}

async fn check_cache(state: &AppState) -> CheckStatus {
    if state.cache.health_check().await {
        CheckStatus::ok("Cache backend healthy")
    } else {
        CheckStatus::error("Cache backend unhealthy")
    }
}
