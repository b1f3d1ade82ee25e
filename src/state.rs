//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::RedirectService;
use crate::infrastructure::persistence::PgRedirectRepository;

/// State shared across all request handlers.
///
/// `base_url` comes from the configuration loaded at startup; handlers use
/// it to build the public and admin URLs returned to clients.
#[derive(Clone)]
pub struct AppState {
    pub redirect_service: Arc<RedirectService<PgRedirectRepository>>,
    pub base_url: String,
}
