//! API route configuration.

use crate::api::handlers::{
    api_not_found_handler, create_link_handler, delete_link_handler, get_link_handler,
    health_handler, list_links_handler, method_not_allowed_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// All API routes, mounted under `/api`.
///
/// # Endpoints
///
/// - `GET    /health`        - Service health and link count
/// - `GET    /links`         - List all links
/// - `POST   /links`         - Create a link
/// - `GET    /links/{slug}`  - Fetch a link with its statistics
/// - `DELETE /links/{slug}`  - Delete a link
///
/// Unknown paths answer 404 and wrong methods answer 405, both with the
/// JSON error envelope. No `/api` path ever redirects.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_handler))
        .route("/links", get(list_links_handler).post(create_link_handler))
        .route(
            "/links/{slug}",
            get(get_link_handler).delete(delete_link_handler),
        )
        .fallback(api_not_found_handler)
        .method_not_allowed_fallback(method_not_allowed_handler)
}
