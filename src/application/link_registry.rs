//! In-memory link registry.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};
use tracing::{debug, error, warn};

use crate::domain::SlugGenerator;
use crate::domain::entities::LinkRecord;
use crate::error::RegistryError;
use crate::utils::random_slug::RandomSlugGenerator;

/// Generator calls allowed per slug-less creation before giving up.
pub const MAX_GENERATION_ATTEMPTS: usize = 5;

/// Volatile slug → record table shared by all request handlers.
///
/// All operations go through one reader-writer lock over the whole key space.
/// Lookups take it shared; [`create_link`](Self::create_link),
/// [`delete_link`](Self::delete_link) and [`register_hit`](Self::register_hit)
/// take it exclusively, so generate-and-check for a new slug and the paired
/// counter/histogram increments are each atomic.
///
/// Records never leave the table by reference; reads return clones.
pub struct LinkRegistry {
    links: RwLock<HashMap<String, LinkRecord>>,
    generator: Arc<dyn SlugGenerator>,
}

impl LinkRegistry {
    /// Creates an empty registry using `generator` for slug-less creations.
    pub fn new(generator: Arc<dyn SlugGenerator>) -> Self {
        Self {
            links: RwLock::new(HashMap::new()),
            generator,
        }
    }

    /// Registers `target` under `slug`, or under a generated slug when `slug`
    /// is `None` or empty.
    ///
    /// The target is stored verbatim.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::SlugTaken`] if an explicit slug is already registered
    /// - [`RegistryError::GenerationExhausted`] if every generated candidate collided
    /// - [`RegistryError::GeneratorFailure`] if the generator itself failed
    pub fn create_link(&self, target: &str, slug: Option<&str>) -> Result<String, RegistryError> {
        let mut links = self.write();

        let slug = match slug.filter(|s| !s.is_empty()) {
            Some(custom) => {
                if links.contains_key(custom) {
                    debug!(slug = custom, "Explicit slug already taken");
                    return Err(RegistryError::SlugTaken {
                        slug: custom.to_string(),
                    });
                }
                custom.to_string()
            }
            None => self.generate_unique_slug(&links)?,
        };

        links.insert(
            slug.clone(),
            LinkRecord::new(slug.clone(), target.to_string()),
        );
        debug!(slug = %slug, url = target, "Link created");

        Ok(slug)
    }

    /// Returns a snapshot of the record registered under `slug`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] if the slug is not registered.
    pub fn get_link(&self, slug: &str) -> Result<LinkRecord, RegistryError> {
        self.read()
            .get(slug)
            .cloned()
            .ok_or_else(|| RegistryError::NotFound {
                slug: slug.to_string(),
            })
    }

    /// Removes the record registered under `slug`.
    ///
    /// Deleting an unknown slug is not an error. Returns whether a record was removed.
    pub fn delete_link(&self, slug: &str) -> bool {
        let removed = self.write().remove(slug).is_some();
        debug!(slug, removed, "Link deleted");
        removed
    }

    /// Snapshot of every registered record, in no particular order.
    pub fn all_links(&self) -> Vec<LinkRecord> {
        self.read().values().cloned().collect()
    }

    /// Returns the target URL for `slug` without counting a visit.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] if the slug is not registered.
    pub fn get_target(&self, slug: &str) -> Result<String, RegistryError> {
        self.read()
            .get(slug)
            .map(|link| link.target.clone())
            .ok_or_else(|| RegistryError::NotFound {
                slug: slug.to_string(),
            })
    }

    /// Counts one visit on `slug` in today's UTC bucket.
    ///
    /// Unknown slugs are ignored.
    pub fn register_hit(&self, slug: &str) {
        self.register_hit_at(slug, Utc::now());
    }

    /// Counts one visit on `slug` in the UTC bucket of `at`.
    ///
    /// Unknown slugs are ignored.
    pub fn register_hit_at(&self, slug: &str, at: DateTime<Utc>) {
        if let Some(link) = self.write().get_mut(slug) {
            link.record_hit(at.date_naive());
        }
    }

    /// Number of registered links.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Returns true if no links are registered.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Draws candidates until one is free or the attempt budget runs out.
    ///
    /// Must be called with the write lock held.
    fn generate_unique_slug(
        &self,
        links: &HashMap<String, LinkRecord>,
    ) -> Result<String, RegistryError> {
        for attempt in 1..=MAX_GENERATION_ATTEMPTS {
            let candidate = self.generator.random().inspect_err(|e| {
                error!(error = %e, "Slug generator failed");
            })?;

            if !links.contains_key(&candidate) {
                return Ok(candidate);
            }

            debug!(slug = %candidate, attempt, "Generated slug collided");
        }

        warn!(
            attempts = MAX_GENERATION_ATTEMPTS,
            "Could not generate a unique slug"
        );
        Err(RegistryError::GenerationExhausted {
            attempts: MAX_GENERATION_ATTEMPTS,
        })
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, LinkRecord>> {
        self.links.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, LinkRecord>> {
        self.links.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for LinkRegistry {
    fn default() -> Self {
        Self::new(Arc::new(RandomSlugGenerator::default()))
    }
}
