//! # lnk
//!
//! A small URL shortening service that keeps every link in memory.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The link record and the slug generator contract
//! - **Application Layer** ([`application`]) - [`LinkRegistry`], the locked slug table
//! - **API Layer** ([`api`]) - REST handlers, DTOs and middleware
//! - **Utilities** ([`utils`]) - The default random slug generator
//! - **Client** ([`client`]) - Async HTTP client for a running service
//!
//! ## Features
//!
//! - Custom or generated slugs with bounded collision retry
//! - Per-link hit counters bucketed by UTC day
//! - 307 redirects on any path whose last segment is a slug
//!
//! Nothing is persisted; restarting the process forgets every link.
//!
//! ## Quick Start
//!
//! ```bash
//! export LISTEN="0.0.0.0:8000"
//! cargo run
//!
//! curl -XPOST localhost:8000/api/links -d '{"target": "https://example.com"}' \
//!     -H 'content-type: application/json'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod client;
pub mod domain;
pub mod error;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use application::LinkRegistry;
pub use error::{AppError, RegistryError};
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::{LinkRegistry, MAX_GENERATION_ATTEMPTS};
    pub use crate::domain::entities::LinkRecord;
    pub use crate::domain::{GeneratorError, SlugGenerator};
    pub use crate::error::{AppError, RegistryError};
    pub use crate::state::AppState;
    pub use crate::utils::random_slug::RandomSlugGenerator;
}
