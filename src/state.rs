//! Shared state injected into every handler.

use std::sync::Arc;

use crate::application::LinkRegistry;

/// Application state cloned into each request.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<LinkRegistry>,
}

impl AppState {
    /// Creates state around an existing registry.
    pub fn new(registry: Arc<LinkRegistry>) -> Self {
        Self { registry }
    }
}
