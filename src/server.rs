//! HTTP server initialization and runtime setup.

use crate::application::LinkRegistry;
use crate::config::Config;
use crate::routes::app_router;
use crate::state::AppState;
use crate::utils::random_slug::RandomSlugGenerator;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Runs the HTTP server with the given configuration.
///
/// Builds an empty registry with the default slug generator, binds the
/// listener and serves until Ctrl+C is received.
///
/// # Errors
///
/// Returns an error if:
/// - The listen address is invalid
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let generator = RandomSlugGenerator::new(config.slug_length);
    let registry = Arc::new(LinkRegistry::new(Arc::new(generator)));
    tracing::info!("Link registry ready (slug length {})", generator.length());

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    serve(listener, AppState::new(registry), shutdown_signal()).await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Serves the full application router on an already bound listener.
///
/// Returns once `shutdown` resolves and in-flight requests have finished.
///
/// # Errors
///
/// Returns an error if the server fails while accepting connections.
pub async fn serve(
    listener: TcpListener,
    state: AppState,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<()> {
    let app = app_router(state);

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
