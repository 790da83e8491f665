//! Handler for short URL redirect.

use axum::{
    extract::State,
    http::{HeaderValue, Method, Uri},
    response::Redirect,
};
use serde_json::json;
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects any path whose last segment is a registered slug.
///
/// # Endpoint
///
/// `GET /{anything}/{slug}` (router fallback)
///
/// # Request Flow
///
/// 1. Reject non-GET methods with 405
/// 2. Take the last non-empty path segment as the slug
/// 3. Resolve the target and check it is a valid `Location` value
/// 4. Count the visit
/// 5. Return 307 Temporary Redirect
///
/// # Errors
///
/// Returns 404 Not Found if the slug doesn't exist.
/// Returns 500 Internal Server Error, without counting a visit, if the stored
/// target cannot be sent as a header.
pub async fn redirect_handler(
    method: Method,
    uri: Uri,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    if method != Method::GET {
        return Err(AppError::method_not_allowed(
            "Only GET requests allowed",
            json!({ "method": method.as_str() }),
        ));
    }

    let slug = slug_from_path(uri.path());
    debug!(slug, "Visit");

    let target = state.registry.get_target(slug)?;
    if HeaderValue::from_str(&target).is_err() {
        return Err(AppError::internal(
            "Stored target is not a valid redirect location",
            json!({ "slug": slug }),
        ));
    }

    state.registry.register_hit(slug);

    Ok(Redirect::temporary(&target))
}

/// Last non-empty segment of `path`, or an empty string for the root.
fn slug_from_path(path: &str) -> &str {
    path.trim_end_matches('/').rsplit('/').next().unwrap_or_default()
}
