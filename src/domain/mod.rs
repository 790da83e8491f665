//! Domain layer containing the link entity and the slug generation contract.
//!
//! - [`entities`] - Core data structures
//! - [`slug_generator`] - Pluggable source of candidate slugs

pub mod entities;
pub mod slug_generator;

pub use slug_generator::{GeneratorError, SlugGenerator};

#[cfg(test)]
pub use slug_generator::MockSlugGenerator;
