//! HTTP server initialization and runtime setup.
//!
//! Handles store selection, provider setup, and Axum server lifecycle.

use crate::api::middleware::rate_limit;
use crate::application::services::GifService;
use crate::config::{Config, StoreBackend};
use crate::domain::repositories::{GifStore, ImageProvider};
use crate::infrastructure::provider::CataasProvider;
use crate::infrastructure::store::{MemoryGifStore, NullGifStore, RedisGifStore};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use url::Url;

/// Builds the store selected by configuration.
///
/// Returns the store and whether it keeps state (statistics are shown only
/// then). A failed Redis connection degrades to [`NullGifStore`].
pub async fn build_store(config: &Config) -> (Arc<dyn GifStore>, bool) {
    if let (StoreBackend::Redis, Some(redis_url)) = (config.store_backend, &config.redis_url) {
        match RedisGifStore::connect(redis_url, &config.redis_key_prefix).await {
            Ok(redis) => {
                tracing::info!("Cache enabled (Redis)");
                let store: Arc<dyn GifStore> = Arc::new(redis);
                return (store, true);
            }
            Err(e) => {
                tracing::warn!("Failed to connect to Redis: {}. Using NullGifStore.", e);
            }
        }
    } else if config.store_backend == StoreBackend::Memory {
        tracing::info!("Cache enabled (in-memory)");
        let store: Arc<dyn GifStore> = Arc::new(MemoryGifStore::new());
        return (store, true);
    } else {
        tracing::info!("Cache disabled (NullGifStore)");
    }

    let store: Arc<dyn GifStore> = Arc::new(NullGifStore::new());
    (store, false)
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Recent-GIF store (Redis, in-memory or none)
/// - Cataas image provider client
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - The provider URL or client is invalid
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let (store, stats_enabled) = build_store(&config).await;

    let provider_url = Url::parse(&config.provider_url).context("Invalid GIF_PROVIDER_URL")?;
    let provider: Arc<dyn ImageProvider> =
        Arc::new(CataasProvider::new(provider_url, config.provider_timeout())?);

    let gif_service = Arc::new(GifService::new(store, provider));
    let state = AppState::new(gif_service, stats_enabled);

    let limiter = rate_limit::layer(config.rate_limit_per_second, config.rate_limit_burst)?;
    let app = app_router(state, limiter);

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

/// Resolves on Ctrl-C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl-C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
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

    tracing::info!("Shutdown signal received");
}
