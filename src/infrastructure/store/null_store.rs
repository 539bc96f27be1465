//! No-op store used when no cache backend is configured.

use async_trait::async_trait;
use tracing::debug;

use crate::domain::entities::Counter;
use crate::domain::repositories::{GifStore, StoreResult};

/// A store that keeps nothing.
///
/// Every request becomes a provider call and statistics stay at zero. The
/// page renders without the statistics panel when this store is active.
///
/// # Use Cases
///
/// - Running without Redis
/// - Fallback when the Redis connection fails at startup
pub struct NullGifStore;

impl NullGifStore {
    /// Creates a new NullGifStore instance.
    pub fn new() -> Self {
        debug!("Using NullGifStore (caching disabled)");
        Self
    }
}

impl Default for NullGifStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GifStore for NullGifStore {
    async fn pop_recent(&self) -> StoreResult<Option<String>> {
        Ok(None)
    }

    async fn push_recent(&self, _gif_url: &str) -> StoreResult<()> {
        Ok(())
    }

    async fn trim_recent(&self, _bound: usize) -> StoreResult<()> {
        Ok(())
    }

    async fn recent_len(&self) -> StoreResult<usize> {
        Ok(0)
    }

    async fn recent(&self) -> StoreResult<Vec<String>> {
        Ok(Vec::new())
    }

    async fn clear_recent(&self) -> StoreResult<()> {
        Ok(())
    }

    async fn counter(&self, _counter: Counter) -> StoreResult<u64> {
        Ok(0)
    }

    async fn increment(&self, _counter: Counter) -> StoreResult<u64> {
        Ok(0)
    }

    async fn health_check(&self) -> bool {
        true
    }
}
