//! Handler for link statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::LinkStatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Retrieves statistics for a specific short link.
///
/// # Endpoint
///
/// `GET /stats/{alias}`
///
/// Reads straight from the store so the count includes every increment
/// applied so far. Requesting stats does not count as an access.
///
/// # Response
///
/// ```json
/// {
///   "long_url": "https://example.com",
///   "short_link": "6laZE",
///   "access_count": 42
/// }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if the alias doesn't exist or doesn't decode.
pub async fn stats_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<LinkStatsResponse>, AppError> {
    let link = state.link_service.get_link_stats(&alias).await?;

    Ok(Json(link.into()))
}
