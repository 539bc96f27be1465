//! GIF delivery entities.

use std::fmt;

/// Maximum number of recent GIF URLs retained in the store.
pub const RECENT_GIFS_BOUND: usize = 10;

/// Where a served GIF URL came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GifSource {
    /// Popped from the recent-GIF list.
    Cache,
    /// Freshly fetched from the image provider.
    Api,
}

impl GifSource {
    /// Display label shown on the page.
    pub fn label(&self) -> &'static str {
        match self {
            GifSource::Cache => "Cache",
            GifSource::Api => "API",
        }
    }

    /// The counter incremented when a GIF is served from this source.
    pub fn counter(&self) -> Counter {
        match self {
            GifSource::Cache => Counter::CacheHits,
            GifSource::Api => Counter::ApiCalls,
        }
    }
}

impl fmt::Display for GifSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Persistent counters kept next to the recent-GIF list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Counter {
    CacheHits,
    ApiCalls,
}

impl Counter {
    /// Store key holding the counter value.
    pub fn key(&self) -> &'static str {
        match self {
            Counter::CacheHits => "cache_hits",
            Counter::ApiCalls => "api_calls",
        }
    }
}

/// Snapshot of store statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GifStats {
    pub cache_hits: u64,
    pub api_calls: u64,
    pub cached_count: usize,
    pub capacity: usize,
}

impl GifStats {
    pub fn new(cache_hits: u64, api_calls: u64, cached_count: usize) -> Self {
        Self {
            cache_hits,
            api_calls,
            cached_count,
            capacity: RECENT_GIFS_BOUND,
        }
    }

    /// Total number of GIFs served so far.
    pub fn total_served(&self) -> u64 {
        self.cache_hits + self.api_calls
    }
}

/// Result of a single page view: the GIF to show and the store statistics
/// observed right after recording it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GifDelivery {
    pub gif_url: String,
    pub source: GifSource,
    pub stats: GifStats,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_labels() {
        assert_eq!(GifSource::Cache.label(), "Cache");
        assert_eq!(GifSource::Api.to_string(), "API");
    }

    #[test]
    fn test_source_counter_mapping() {
        assert_eq!(GifSource::Cache.counter(), Counter::CacheHits);
        assert_eq!(GifSource::Api.counter().key(), "api_calls");
    }

    #[test]
    fn test_stats_capacity_is_bound() {
        let stats = GifStats::new(3, 4, 7);
        assert_eq!(stats.capacity, RECENT_GIFS_BOUND);
        assert_eq!(stats.total_served(), 7);
    }
}
