//! DTOs for link creation endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to create a short link.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLinkRequest {
    /// The original URL to shorten (must be a valid absolute URL).
    #[validate(url(message = "Invalid URL format"))]
    pub long_url: String,
}

/// Response carrying the freshly issued alias.
#[derive(Debug, Serialize)]
pub struct CreateLinkResponse {
    pub short_link: String,
}
