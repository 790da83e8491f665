//! DTOs for link management endpoints.

use crate::domain::entities::LinkRecord;
use axum::http::HeaderValue;
use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::LazyLock;
use validator::{Validate, ValidationError};

/// Characters allowed in a caller-chosen slug, so it stays a single path segment.
static SLUG_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]*$").unwrap());

/// Request to register a new link.
///
/// An absent or empty `slug` asks the registry to generate one.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct CreateLinkRequest {
    /// Destination URL, stored verbatim.
    #[validate(length(min = 1, message = "Target must not be empty"))]
    #[validate(url(message = "Invalid URL format"))]
    #[validate(custom(function = "validate_redirect_target"))]
    pub target: String,

    /// Optional custom slug.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 64))]
    #[validate(regex(
        path = *SLUG_REGEX,
        message = "Slug may only contain letters, digits, '-' and '_'"
    ))]
    pub slug: Option<String>,
}

/// Rejects targets that cannot be sent back as a `Location` header.
///
/// URL parsing silently drops tabs and newlines, so the raw string is checked too.
fn validate_redirect_target(target: &str) -> Result<(), ValidationError> {
    if HeaderValue::from_str(target).is_err() {
        let mut err = ValidationError::new("invalid_redirect_target");
        err.message = Some("Target must not contain control characters".into());
        return Err(err);
    }

    Ok(())
}

/// Response carrying the slug of a newly created link.
#[derive(Debug, Serialize, Deserialize)]
pub struct LinkIdResponse {
    pub link: String,
}

/// Full link record with daily hit histogram.
///
/// ```json
/// {
///   "slug": "Zx9_aQ",
///   "target": "https://example.com",
///   "hits": 3,
///   "histogram": { "2024-05-01": 1, "2024-05-02": 2 }
/// }
/// ```
#[derive(Debug, Serialize, Deserialize)]
pub struct LinkResponse {
    pub slug: String,
    pub target: String,
    pub hits: u64,
    pub histogram: BTreeMap<NaiveDate, u64>,
}

impl From<LinkRecord> for LinkResponse {
    fn from(link: LinkRecord) -> Self {
        Self {
            slug: link.slug,
            target: link.target,
            hits: link.hits,
            histogram: link.histogram,
        }
    }
}

/// All registered links.
#[derive(Debug, Serialize, Deserialize)]
pub struct LinkListResponse {
    pub links: Vec<LinkResponse>,
}
