//! Handler for link creation endpoint.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::create::{CreateLinkRequest, CreateLinkResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for a long URL.
///
/// # Endpoint
///
/// `POST /create`
///
/// # Request Body
///
/// ```json
/// { "long_url": "https://example.com/some/long/path" }
/// ```
///
/// # Response
///
/// `201 Created` with the issued alias:
///
/// ```json
/// { "short_link": "6laZE" }
/// ```
///
/// Shortening the same URL twice issues two different aliases; there is no
/// deduplication.
///
/// # Errors
///
/// Returns 422 Unprocessable Entity if the URL fails validation.
pub async fn create_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateLinkRequest>,
) -> Result<(StatusCode, Json<CreateLinkResponse>), AppError> {
    payload.validate()?;

    let link = state
        .link_service
        .create_short_link(payload.long_url)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateLinkResponse {
            short_link: link.alias(),
        }),
    ))
}
