//! Read-only projection of a redirect record for external responses.

use serde::Serialize;

use crate::domain::entities::RedirectRecord;

/// Response view of a redirect record.
///
/// Built from a record copy plus the configured base URL; the stored entity
/// is never mutated to format a response. Returned by the create endpoint
/// and the admin-info endpoint, the only two places the admin URL (and so
/// the secret key) leaves the service.
#[derive(Debug, Serialize)]
pub struct RedirectInfo {
    pub target_url: String,
    pub key: String,
    /// Full public short URL: `{base_url}/{key}`.
    pub url: String,
    /// Full administration URL: `{base_url}/admin/{secret_key}`.
    pub admin_url: String,
    pub is_active: bool,
    pub clicks: i64,
}

impl RedirectInfo {
    /// Builds the projection from a record and the service base URL.
    pub fn from_record(record: &RedirectRecord, base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');

        Self {
            target_url: record.target_url.clone(),
            key: record.key.clone(),
            url: format!("{base}/{}", record.key),
            admin_url: format!("{base}/admin/{}", record.secret_key),
            is_active: record.is_active,
            clicks: record.clicks,
        }
    }
}

/// Response for the deactivation endpoint.
#[derive(Debug, Serialize)]
pub struct DeactivateResponse {
    pub detail: String,
}
