//! Handler for the URL shortening endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::redirect_info::RedirectInfo;
use crate::api::dto::shorten::ShortenRequest;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a shortened URL for a target URL.
///
/// # Endpoint
///
/// `POST /url`
///
/// # Request Body
///
/// ```json
/// { "target_url": "https://example.com/some/long/path" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "target_url": "https://example.com/some/long/path",
///   "key": "AbC12xYz",
///   "url": "https://sho.rt/AbC12xYz",
///   "admin_url": "https://sho.rt/admin/Zz9yX21a",
///   "is_active": true,
///   "clicks": 0
/// }
/// ```
///
/// The `admin_url` embeds the secret key and is returned only here and on
/// the admin-info endpoint.
///
/// # Errors
///
/// Returns 400 Bad Request if the target URL is not a valid absolute
/// HTTP(S) URL.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<RedirectInfo>, AppError> {
    payload.validate()?;

    let record = state
        .redirect_service
        .create_redirect(&payload.target_url)
        .await?;

    Ok(Json(RedirectInfo::from_record(&record, &state.base_url)))
}
