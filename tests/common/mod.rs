#![allow(dead_code)]

use async_trait::async_trait;
use cat_gif::application::services::GifService;
use cat_gif::domain::entities::Counter;
use cat_gif::domain::repositories::{
    GifStore, ImageProvider, ProviderError, StoreError, StoreResult,
};
use cat_gif::state::AppState;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Provider returning `https://cataas.test/gif/{n}` with an increasing `n`.
#[derive(Default)]
pub struct StubProvider {
    calls: AtomicUsize,
}

impl StubProvider {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ImageProvider for StubProvider {
    async fn fetch_gif_url(&self) -> Result<String, ProviderError> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(format!("https://cataas.test/gif/{}", n))
    }
}

/// Provider that is always unreachable.
pub struct DownProvider;

#[async_trait]
impl ImageProvider for DownProvider {
    async fn fetch_gif_url(&self) -> Result<String, ProviderError> {
        Err(ProviderError::Unreachable("dns error: cataas.com not found".to_string()))
    }
}

/// Store whose every call fails as if Redis were down.
pub struct DownStore;

fn refused<T>() -> StoreResult<T> {
    Err(StoreError::Connection("Connection refused (os error 111)".to_string()))
}

#[async_trait]
impl GifStore for DownStore {
    async fn pop_recent(&self) -> StoreResult<Option<String>> {
        refused()
    }
    async fn push_recent(&self, _gif_url: &str) -> StoreResult<()> {
        refused()
    }
    async fn trim_recent(&self, _bound: usize) -> StoreResult<()> {
        refused()
    }
    async fn recent_len(&self) -> StoreResult<usize> {
        refused()
    }
    async fn recent(&self) -> StoreResult<Vec<String>> {
        refused()
    }
    async fn clear_recent(&self) -> StoreResult<()> {
        refused()
    }
    async fn counter(&self, _counter: Counter) -> StoreResult<u64> {
        refused()
    }
    async fn increment(&self, _counter: Counter) -> StoreResult<u64> {
        refused()
    }
    async fn health_check(&self) -> bool {
        false
    }
}

pub fn create_test_state(
    store: Arc<dyn GifStore>,
    provider: Arc<dyn ImageProvider>,
    stats_enabled: bool,
) -> AppState {
    let gif_service = Arc::new(GifService::new(store, provider));
    AppState::new(gif_service, stats_enabled)
}
