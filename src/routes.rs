//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `/api/*`       - REST API for link management (never redirects)
//! - any other path - Redirect on the last path segment
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::redirect_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}

/// Routes and tracing without path normalization.
pub fn router(state: AppState) -> Router {
    Router::new()
        .nest("/api", api::routes::api_routes())
        .fallback(redirect_handler)
        .with_state(state)
        .layer(tracing::layer())
}
