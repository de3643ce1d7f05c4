mod config;
mod dashboard;
mod errors;
mod intake;
mod models;
mod routes;
mod state;
mod storage;
mod view;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, StorageBackend};
use crate::routes::build_router;
use crate::state::AppState;
use crate::storage::{ApplicationStore, JsonFileStore, MemoryStore};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting intake v{}", env!("CARGO_PKG_VERSION"));

    let store: Arc<dyn ApplicationStore> = match config.storage_backend {
        StorageBackend::File => Arc::new(JsonFileStore::new(
            &config.storage_dir,
            &config.storage_key,
        )),
        StorageBackend::Memory => Arc::new(MemoryStore::new()),
    };
    let state = AppState::new(store, config.clone());
    info!(
        "Application collection stored at {}",
        state.applications.describe()
    );

    let app = build_router(state).layer(TraceLayer::new_for_http());

    let addr = SocketAddr::new(config.bind_addr, config.port);
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app).await?;

    Ok(())
}
