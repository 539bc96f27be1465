//! Store backends for the recent-GIF list and counters.
//!
//! Implements [`crate::domain::repositories::GifStore`]:
//! - [`RedisGifStore`] - Production Redis-backed store
//! - [`MemoryGifStore`] - In-process store for single-instance runs and tests
//! - [`NullGifStore`] - No-op store when caching is disabled

mod memory_store;
mod null_store;
mod redis_store;

pub use memory_store::MemoryGifStore;
pub use null_store::NullGifStore;
pub use redis_store::{RECENT_GIFS_KEY, RedisGifStore};
