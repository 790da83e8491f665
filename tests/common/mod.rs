#![allow(dead_code)]

use axum_test::TestServer;
use lnk::prelude::*;
use std::sync::Arc;

/// Generator that always proposes the same slug.
pub struct FixedSlugGenerator(pub &'static str);

impl SlugGenerator for FixedSlugGenerator {
    fn random(&self) -> Result<String, GeneratorError> {
        Ok(self.0.to_string())
    }
}

pub fn create_test_state() -> AppState {
    AppState::new(Arc::new(LinkRegistry::default()))
}

pub fn create_test_state_with(generator: impl SlugGenerator + 'static) -> AppState {
    AppState::new(Arc::new(LinkRegistry::new(Arc::new(generator))))
}

pub fn create_test_server(state: AppState) -> TestServer {
    TestServer::new(lnk::routes::router(state)).unwrap()
}

pub fn create_test_link(state: &AppState, slug: &str, target: &str) {
    state.registry.create_link(target, Some(slug)).unwrap();
}

/// Serves the full application on a random local port and returns its base URL.
///
/// The server task lives until the test runtime shuts down.
pub async fn spawn_live_server(state: AppState) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(lnk::server::serve(listener, state, std::future::pending()));

    format!("http://{addr}")
}
