//! HTTP server initialization and runtime setup.
//!
//! Handles storage selection, service wiring and the Axum server lifecycle.

use crate::config::{Config, StorageBackend};
use crate::domain::repositories::RegistryStorage;
use crate::infrastructure::persistence::{JsonFileStorage, MemoryStorage};
use crate::infrastructure::user_agent::WootheeClassifier;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Builds the storage backend selected by configuration.
pub fn build_storage(config: &Config) -> Arc<dyn RegistryStorage> {
    match config.storage_backend {
        StorageBackend::File => Arc::new(JsonFileStorage::new(&config.data_file)),
        StorageBackend::Memory => Arc::new(MemoryStorage::new()),
    }
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Registry storage (JSON file or in-memory)
/// - User-agent classifier
/// - Axum HTTP server with graceful shutdown on Ctrl+C
///
/// # Errors
///
/// Returns an error if:
/// - The existing registry document cannot be loaded
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let storage = build_storage(&config);

    let registry = storage
        .load()
        .await
        .context("Failed to load link registry")?;
    tracing::info!(
        backend = storage.backend_name(),
        links = registry.len(),
        clicks = registry.total_clicks(),
        "Registry loaded"
    );

    let state = AppState::new(
        storage,
        Arc::new(WootheeClassifier::new()),
        config.base_url.clone(),
    );

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
