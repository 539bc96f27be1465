//! Store trait for the recent-GIF list and its counters.

use crate::domain::entities::Counter;
use async_trait::async_trait;

/// Errors raised by a [`GifStore`] backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store connection error: {0}")]
    Connection(String),

    #[error("Store operation error: {0}")]
    Operation(String),

    /// The store returned data that breaks the text/integer contract.
    #[error("Malformed store data: {0}")]
    Malformed(String),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Shared store holding recently served GIF URLs and the hit/miss counters.
///
/// Every method is a separate round trip; no atomicity is implied across calls.
/// Entries are UTF-8 text.
///
/// # Implementations
///
/// - [`crate::infrastructure::store::RedisGifStore`] - Redis list and integer keys
/// - [`crate::infrastructure::store::MemoryGifStore`] - In-process store
/// - [`crate::infrastructure::store::NullGifStore`] - No store configured
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GifStore: Send + Sync {
    /// Pops the oldest end (tail) of the recent list.
    ///
    /// Returns `Ok(None)` when the list is empty.
    async fn pop_recent(&self) -> StoreResult<Option<String>>;

    /// Pushes a URL onto the head of the recent list.
    async fn push_recent(&self, gif_url: &str) -> StoreResult<()>;

    /// Truncates the recent list to its `bound` most recently pushed entries.
    async fn trim_recent(&self, bound: usize) -> StoreResult<()>;

    /// Returns the current length of the recent list.
    async fn recent_len(&self) -> StoreResult<usize>;

    /// Returns every entry, most recently pushed first.
    async fn recent(&self) -> StoreResult<Vec<String>>;

    /// Removes the recent list. Counters are left untouched.
    async fn clear_recent(&self) -> StoreResult<()>;

    /// Reads a counter. A missing counter reads as zero.
    async fn counter(&self, counter: Counter) -> StoreResult<u64>;

    /// Increments a counter and returns its new value.
    async fn increment(&self, counter: Counter) -> StoreResult<u64>;

    /// Checks if the store backend is reachable.
    async fn health_check(&self) -> bool;
}
