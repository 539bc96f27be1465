//! DTOs for the GIF statistics endpoint.

use serde::Serialize;

use crate::domain::entities::GifStats;

/// Counters and recent-list size as exposed over JSON.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub cache_hits: u64,
    pub api_calls: u64,
    pub cached_count: usize,
    pub capacity: usize,
    pub stats_enabled: bool,
}

impl StatsResponse {
    pub fn new(stats: GifStats, stats_enabled: bool) -> Self {
        Self {
            cache_hits: stats.cache_hits,
            api_calls: stats.api_calls,
            cached_count: stats.cached_count,
            capacity: stats.capacity,
            stats_enabled,
        }
    }
}
