//! DTO for the URL shortening endpoint.

use serde::Deserialize;
use validator::Validate;

/// Request to shorten a target URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The destination URL (must be a valid absolute HTTP/HTTPS URL).
    #[validate(url(message = "Invalid URL format"))]
    pub target_url: String,
}
