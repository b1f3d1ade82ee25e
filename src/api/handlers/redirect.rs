//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect},
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short key to its target URL.
///
/// # Endpoint
///
/// `GET /{key}`
///
/// Resolution atomically increments the record's click counter; concurrent
/// requests for the same key never lose a count.
///
/// # Errors
///
/// Returns 404 Not Found if the key doesn't exist or the link has been
/// deactivated. The two cases are deliberately indistinguishable so a
/// disabled link cannot be probed.
pub async fn redirect_handler(
    Path(key): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let record = state.redirect_service.resolve_for_redirect(&key).await?;

    debug!(key = %record.key, clicks = record.clicks, "redirecting");

    Ok(Redirect::temporary(&record.target_url))
}
