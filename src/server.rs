//! HTTP server initialization and runtime setup.
//!
//! Wires the record store, code allocator and URL service together and runs
//! the Axum server until a shutdown signal arrives.

use crate::application::services::{CodeAllocator, UrlService};
use crate::config::Config;
use crate::domain::repositories::RecordStore;
use crate::infrastructure::persistence::MemoryRecordStore;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Builds the application state for `config` on top of `store`.
pub fn build_state(config: &Config, store: Arc<dyn RecordStore>) -> AppState {
    let allocator = CodeAllocator::new(config.code_length, config.code_max_attempts);
    let url_service = UrlService::new(
        store,
        allocator,
        config.base_url.clone(),
        config.default_expiration.clone(),
    );

    AppState::new(Arc::new(url_service))
}

/// Runs the HTTP server with the given configuration.
///
/// Records are kept in a [`MemoryRecordStore`] and vanish when the process
/// exits.
///
/// # Errors
///
/// Returns an error if:
/// - The listen address is invalid
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store: Arc<dyn RecordStore> = Arc::new(MemoryRecordStore::new());
    tracing::info!("Record store ready (in-memory)");

    let state = build_state(&config, store);
    let app = app_router(state, &config.cors_allowed_origins);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    wait_for_signal(tokio::signal::ctrl_c()).await;
}

/// Resolves once `signal` fires. If the signal handler could not be installed
/// this never resolves, so the server keeps running until the process is killed.
async fn wait_for_signal<F>(signal: F)
where
    F: Future<Output = std::io::Result<()>>,
{
    if let Err(e) = signal.await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal, graceful shutdown disabled");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
