//! Slug generation capability.

use thiserror::Error;

/// Failure of the underlying randomness source.
#[derive(Debug, Error)]
#[error("slug entropy source failed: {0}")]
pub struct GeneratorError(pub String);

/// Produces candidate slugs for new links.
///
/// Generators know nothing about which slugs are taken; uniqueness is
/// enforced by [`crate::application::LinkRegistry`], which calls
/// [`SlugGenerator::random`] repeatedly on collision.
///
/// # Implementations
///
/// - [`crate::utils::random_slug::RandomSlugGenerator`] - OS entropy, URL-safe base64
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait SlugGenerator: Send + Sync {
    /// Returns one candidate slug.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError`] only when the entropy source fails.
    fn random(&self) -> Result<String, GeneratorError>;
}
