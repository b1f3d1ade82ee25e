//! Router configuration.
//!
//! # Route Structure
//!
//! - `POST /url`                 - Create a short URL
//! - `GET  /{key}`               - Short link redirect
//! - `GET  /admin/{secret_key}`  - Administration info for a link
//! - `POST /admin/{secret_key}`  - Deactivate a link
//! - `GET  /health`              - Health check
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::{
    admin_info_handler, deactivate_handler, health_handler, redirect_handler, shorten_handler,
};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::{get, post};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/url", post(shorten_handler))
        .route("/health", get(health_handler))
        .route(
            "/admin/{secret_key}",
            get(admin_info_handler).post(deactivate_handler),
        )
        .route("/{key}", get(redirect_handler))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
