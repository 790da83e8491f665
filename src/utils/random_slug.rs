//! Default slug generator backed by the operating system's entropy source.

use crate::domain::{GeneratorError, SlugGenerator};
use base64::Engine as _;

/// Number of random bytes drawn per candidate (a 128-bit identifier).
const ID_BYTES: usize = 16;

/// Characters produced by URL-safe base64 for [`ID_BYTES`] without padding.
pub const MAX_SLUG_LENGTH: usize = 22;

/// Shortest slug length the generator will accept.
pub const MIN_SLUG_LENGTH: usize = 4;

/// Default slug length.
pub const DEFAULT_SLUG_LENGTH: usize = 6;

/// Generates slugs by truncating a random 128-bit id encoded as URL-safe base64.
///
/// Output only contains `A-Z`, `a-z`, `0-9`, `-` and `_`, so every slug is a
/// valid URL path segment.
#[derive(Debug, Clone, Copy)]
pub struct RandomSlugGenerator {
    length: usize,
}

impl RandomSlugGenerator {
    /// Creates a generator producing slugs of `length` characters.
    ///
    /// `length` is clamped to `MIN_SLUG_LENGTH..=MAX_SLUG_LENGTH`.
    pub fn new(length: usize) -> Self {
        Self {
            length: length.clamp(MIN_SLUG_LENGTH, MAX_SLUG_LENGTH),
        }
    }

    /// Length of the slugs this generator produces.
    pub fn length(&self) -> usize {
        self.length
    }
}

impl Default for RandomSlugGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_SLUG_LENGTH)
    }
}

impl SlugGenerator for RandomSlugGenerator {
    fn random(&self) -> Result<String, GeneratorError> {
        let mut buffer = [0u8; ID_BYTES];

        getrandom::fill(&mut buffer).map_err(|e| GeneratorError(e.to_string()))?;

        let mut slug = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer);
        slug.truncate(self.length);

        Ok(slug)
    }
}
