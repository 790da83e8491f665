//! Handlers for link management endpoints (list, create, fetch, delete).

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::info;
use validator::Validate;

use crate::api::dto::links::{CreateLinkRequest, LinkIdResponse, LinkListResponse, LinkResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Lists every registered link.
///
/// # Endpoint
///
/// `GET /api/links`
///
/// # Response
///
/// ```json
/// { "links": [ { "slug": "abc123", "target": "...", "hits": 0, "histogram": {} } ] }
/// ```
///
/// Links are returned in no particular order.
pub async fn list_links_handler(State(state): State<AppState>) -> Json<LinkListResponse> {
    let links = state
        .registry
        .all_links()
        .into_iter()
        .map(LinkResponse::from)
        .collect();

    Json(LinkListResponse { links })
}

/// Registers a new link.
///
/// # Endpoint
///
/// `POST /api/links`
///
/// # Request Body
///
/// ```json
/// {
///   "target": "https://example.com",
///   "slug": "my-link"   // optional, generated when absent or empty
/// }
/// ```
///
/// # Response
///
/// ```json
/// { "link": "my-link" }
/// ```
///
/// # Errors
///
/// - 400 Bad Request if validation fails
/// - 409 Conflict if the requested slug is taken
/// - 500 Internal Server Error if no free slug could be generated
pub async fn create_link_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateLinkRequest>,
) -> Result<Json<LinkIdResponse>, AppError> {
    payload.validate()?;

    let slug = state
        .registry
        .create_link(&payload.target, payload.slug.as_deref())?;

    info!(slug = %slug, "Link created");

    Ok(Json(LinkIdResponse { link: slug }))
}

/// Returns a link with its hit statistics.
///
/// # Endpoint
///
/// `GET /api/links/{slug}`
///
/// # Errors
///
/// Returns 404 Not Found if the slug is not registered.
pub async fn get_link_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<LinkResponse>, AppError> {
    let link = state.registry.get_link(&slug)?;

    Ok(Json(link.into()))
}

/// Deletes a link.
///
/// # Endpoint
///
/// `DELETE /api/links/{slug}`
///
/// Always answers 204 No Content; deleting an unknown slug is not an error.
pub async fn delete_link_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
) -> StatusCode {
    if state.registry.delete_link(&slug) {
        info!(slug = %slug, "Link deleted");
    }

    StatusCode::NO_CONTENT
}
