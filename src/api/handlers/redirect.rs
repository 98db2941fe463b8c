//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect},
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short alias to its original URL.
///
/// # Endpoint
///
/// `GET /{alias}`
///
/// Resolution (cache lookup, store fallback, access counting) lives in
/// [`crate::application::services::LinkService::resolve`]; this handler only
/// translates the outcome into a `307 Temporary Redirect`.
///
/// # Errors
///
/// Returns 404 Not Found if the alias doesn't exist or doesn't decode.
pub async fn redirect_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let long_url = state.link_service.resolve(&alias).await?;

    Ok(Redirect::temporary(&long_url))
}
