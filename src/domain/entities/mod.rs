//! Core domain entities.
//!
//! Entities are plain data structures; the locking and uniqueness rules that
//! govern them live in [`crate::application::LinkRegistry`].
//!
//! - [`LinkRecord`] - A registered slug, its target and daily hit histogram

pub mod link;

pub use link::LinkRecord;
