//! Utility implementations used by the application wiring.
//!
//! - [`random_slug`] - Default entropy-backed slug generator

pub mod random_slug;
