//! In-process store implementation.

use std::collections::{HashMap, VecDeque};

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use crate::domain::entities::Counter;
use crate::domain::repositories::{GifStore, StoreResult};

#[derive(Default)]
struct Inner {
    /// Front is the head (most recent push).
    recent: VecDeque<String>,
    counters: HashMap<Counter, u64>,
}

/// A store kept in process memory.
///
/// Mirrors the Redis list semantics (push head, pop tail) so it behaves like
/// [`super::RedisGifStore`] for a single process. Data is lost on restart.
#[derive(Default)]
pub struct MemoryGifStore {
    inner: Mutex<Inner>,
}

impl MemoryGifStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        debug!("Using MemoryGifStore");
        Self::default()
    }

    /// Creates a store whose recent list holds `entries`, head first.
    pub fn with_recent(entries: Vec<String>) -> Self {
        Self {
            inner: Mutex::new(Inner {
                recent: entries.into(),
                counters: HashMap::new(),
            }),
        }
    }
}

#[async_trait]
impl GifStore for MemoryGifStore {
    async fn pop_recent(&self) -> StoreResult<Option<String>> {
        Ok(self.inner.lock().await.recent.pop_back())
    }

    async fn push_recent(&self, gif_url: &str) -> StoreResult<()> {
        self.inner.lock().await.recent.push_front(gif_url.to_string());
        Ok(())
    }

    async fn trim_recent(&self, bound: usize) -> StoreResult<()> {
        self.inner.lock().await.recent.truncate(bound);
        Ok(())
    }

    async fn recent_len(&self) -> StoreResult<usize> {
        Ok(self.inner.lock().await.recent.len())
    }

    async fn recent(&self) -> StoreResult<Vec<String>> {
        Ok(self.inner.lock().await.recent.iter().cloned().collect())
    }

    async fn clear_recent(&self) -> StoreResult<()> {
        self.inner.lock().await.recent.clear();
        Ok(())
    }

    async fn counter(&self, counter: Counter) -> StoreResult<u64> {
        Ok(self
            .inner
            .lock()
            .await
            .counters
            .get(&counter)
            .copied()
            .unwrap_or(0))
    }

    async fn increment(&self, counter: Counter) -> StoreResult<u64> {
        let mut inner = self.inner.lock().await;
        let value = inner.counters.entry(counter).or_insert(0);
        *value += 1;
        Ok(*value)
    }

    async fn health_check(&self) -> bool {
        true
    }
}
