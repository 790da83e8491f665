//! Fallback handlers for the `/api` router.

use axum::http::{Method, Uri};
use serde_json::json;

use crate::error::AppError;

/// Answers unknown `/api` paths with a JSON 404 instead of trying a redirect.
pub async fn api_not_found_handler(uri: Uri) -> AppError {
    AppError::not_found("No such API endpoint", json!({ "path": uri.path() }))
}

/// Answers a known `/api` path called with the wrong method.
pub async fn method_not_allowed_handler(method: Method, uri: Uri) -> AppError {
    AppError::method_not_allowed(
        "Method not allowed on this endpoint",
        json!({ "method": method.as_str(), "path": uri.path() }),
    )
}
