//! Cache-backed GIF delivery service.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::entities::{Counter, GifDelivery, GifSource, GifStats, RECENT_GIFS_BOUND};
use crate::domain::repositories::{GifStore, ImageProvider};
use crate::error::AppError;

/// Service deciding, per page view, whether to reuse a recent GIF or fetch a
/// new one.
///
/// Each served URL is pushed back into the recent list so it can be reused by
/// a later request. Store calls are independent round trips; concurrent
/// requests may briefly push the list past its bound.
pub struct GifService {
    store: Arc<dyn GifStore>,
    provider: Arc<dyn ImageProvider>,
}

impl GifService {
    /// Creates a new GIF service.
    pub fn new(store: Arc<dyn GifStore>, provider: Arc<dyn ImageProvider>) -> Self {
        Self { store, provider }
    }

    /// Selects a GIF for the current request and records it.
    ///
    /// # Flow
    ///
    /// 1. Pop the tail of the recent list
    /// 2. On a non-empty entry, serve it from cache; otherwise ask the provider
    /// 3. Push the served URL to the head and trim to [`RECENT_GIFS_BOUND`]
    /// 4. Increment the counter matching the source
    /// 5. Read both counters and the list length
    ///
    /// # Errors
    ///
    /// Returns [`AppError::BadGateway`] if the provider fails.
    /// Returns [`AppError::ServiceUnavailable`] if any store call fails.
    pub async fn deliver(&self) -> Result<GifDelivery, AppError> {
        let (gif_url, source) = match self.store.pop_recent().await? {
            Some(cached) if !cached.is_empty() => {
                debug!("Cache HIT: {}", cached);
                (cached, GifSource::Cache)
            }
            _ => {
                debug!("Cache MISS, calling image provider");
                let fresh = self.provider.fetch_gif_url().await.inspect_err(|_| {
                    metrics::counter!("gif_provider_failures_total").increment(1);
                })?;
                (fresh, GifSource::Api)
            }
        };

        self.store.push_recent(&gif_url).await?;
        self.store.trim_recent(RECENT_GIFS_BOUND).await?;
        self.store.increment(source.counter()).await?;

        metrics::counter!("gif_served_total", "source" => source.label()).increment(1);

        let stats = self.stats().await?;
        info!(source = %source, url = %gif_url, "Serving GIF");

        Ok(GifDelivery {
            gif_url,
            source,
            stats,
        })
    }

    /// Reads the counters and the recent list length without modifying them.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::ServiceUnavailable`] if the store is unreachable.
    pub async fn stats(&self) -> Result<GifStats, AppError> {
        let cache_hits = self.store.counter(Counter::CacheHits).await?;
        let api_calls = self.store.counter(Counter::ApiCalls).await?;
        let cached_count = self.store.recent_len().await?;

        Ok(GifStats::new(cache_hits, api_calls, cached_count))
    }

    /// Checks whether the store is reachable.
    pub async fn store_healthy(&self) -> bool {
        self.store.health_check().await
    }
}
