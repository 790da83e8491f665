//! Error types for the link registry and the HTTP API.
//!
//! [`RegistryError`] is returned by [`crate::application::LinkRegistry`];
//! [`AppError`] is the API-facing error rendered as a JSON envelope:
//!
//! ```json
//! { "error": { "code": "not_found", "message": "...", "details": {} } }
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;
use validator::ValidationErrors;

use crate::domain::GeneratorError;

/// Errors produced by registry operations.
///
/// `delete_link` and `register_hit` never fail, so every variant comes from
/// a lookup or a creation.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("no link with slug {slug} found")]
    NotFound { slug: String },

    #[error("slug {slug} is already taken")]
    SlugTaken { slug: String },

    #[error("could not generate a unique slug in {attempts} attempts")]
    GenerationExhausted { attempts: usize },

    #[error("error generating slug: {0}")]
    GeneratorFailure(#[from] GeneratorError),
}

/// Serialized error payload.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// API error mapped onto an HTTP status.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },

    #[error("{message}")]
    NotFound { message: String, details: Value },

    #[error("{message}")]
    Conflict { message: String, details: Value },

    #[error("{message}")]
    MethodNotAllowed { message: String, details: Value },

    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }

    pub fn method_not_allowed(message: impl Into<String>, details: Value) -> Self {
        Self::MethodNotAllowed {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Converts into the serializable payload, consuming the error.
    pub fn to_error_info(self) -> ErrorInfo {
        let (code, message, details) = match self {
            AppError::Validation { message, details } => ("validation_error", message, details),
            AppError::NotFound { message, details } => ("not_found", message, details),
            AppError::Conflict { message, details } => ("conflict", message, details),
            AppError::MethodNotAllowed { message, details } => {
                ("method_not_allowed", message, details)
            }
            AppError::Internal { message, details } => ("internal_error", message, details),
        };

        ErrorInfo {
            code,
            message,
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<RegistryError> for AppError {
    fn from(e: RegistryError) -> Self {
        let message = e.to_string();
        match e {
            RegistryError::NotFound { slug } => {
                AppError::not_found(message, json!({ "slug": slug }))
            }
            RegistryError::SlugTaken { slug } => {
                AppError::conflict(message, json!({ "slug": slug }))
            }
            RegistryError::GenerationExhausted { attempts } => AppError::internal(
                "Failed to generate unique slug",
                json!({ "reason": message, "attempts": attempts }),
            ),
            RegistryError::GeneratorFailure(_) => AppError::internal(
                "Failed to generate slug",
                json!({ "reason": message }),
            ),
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(e: ValidationErrors) -> Self {
        let details = serde_json::to_value(e.field_errors()).unwrap_or_else(|_| json!({}));
        AppError::bad_request("Validation failed", details)
    }
}
