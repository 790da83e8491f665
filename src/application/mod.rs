//! Application layer: the link registry consumed by HTTP handlers.
//!
//! - [`link_registry::LinkRegistry`] - Slug table with collision retry and hit tracking

pub mod link_registry;

pub use link_registry::{LinkRegistry, MAX_GENERATION_ATTEMPTS};
