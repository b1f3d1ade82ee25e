//! Handlers for secret-key-gated link administration.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::redirect_info::{DeactivateResponse, RedirectInfo};
use crate::error::AppError;
use crate::state::AppState;

/// Returns administration info for the link owning this secret key.
///
/// # Endpoint
///
/// `GET /admin/{secret_key}`
///
/// Works for deactivated links too: disabling a link does not revoke the
/// rightful secret holder's access to its info.
///
/// # Errors
///
/// Returns 404 Not Found if no record matches the secret key.
pub async fn admin_info_handler(
    Path(secret_key): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<RedirectInfo>, AppError> {
    let record = state.redirect_service.get_admin_info(&secret_key).await?;

    Ok(Json(RedirectInfo::from_record(&record, &state.base_url)))
}

/// Deactivates the link owning this secret key.
///
/// # Endpoint
///
/// `POST /admin/{secret_key}`
///
/// Deactivation is logical and terminal: the record stays in the store with
/// `is_active = false` and the public key stops resolving. Repeating the
/// call is idempotent.
///
/// # Errors
///
/// Returns 404 Not Found if no record matches the secret key.
pub async fn deactivate_handler(
    Path(secret_key): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<DeactivateResponse>, AppError> {
    let record = state.redirect_service.deactivate(&secret_key).await?;

    Ok(Json(DeactivateResponse {
        detail: format!(
            "Successfully deactivated shortened URL for '{}'",
            record.target_url
        ),
    }))
}
