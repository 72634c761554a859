//! HTTP server initialization and runtime setup.
//!
//! Handles store selection, state wiring, and Axum server lifecycle.

use crate::config::Config;
use crate::domain::repositories::LinkStore;
use crate::infrastructure::store::{MemoryStore, RedisStore};
use crate::routes::app_router;
use crate::state::{AppState, OriginPolicy};

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Link store (Redis, or in-memory when Redis is not configured)
/// - Application state
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Redis is configured but unreachable
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store = build_store(&config).await?;

    let policy = OriginPolicy {
        behind_proxy: config.behind_proxy,
        allowed_origins: config.allowed_origins.clone(),
    };
    let state = AppState::new(store, config.key_max_attempts, policy);

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Picks the store backend.
///
/// A configured but unreachable Redis is fatal: silently falling back to
/// memory would hand out links that vanish on restart.
async fn build_store(config: &Config) -> Result<Arc<dyn LinkStore>> {
    match &config.redis_url {
        Some(redis_url) => {
            let store = RedisStore::connect(redis_url, config.redis_store_options())
                .await
                .context("Failed to connect to Redis store")?;
            tracing::info!("Store enabled (Redis)");
            Ok(Arc::new(store))
        }
        None => Ok(Arc::new(MemoryStore::new())),
    }
}

/// Resolves on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining connections");
}
