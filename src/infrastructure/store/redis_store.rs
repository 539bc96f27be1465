//! Redis-backed store implementation.

use async_trait::async_trait;
use redis::{AsyncCommands, Client, RedisError, aio::ConnectionManager};
use tracing::{debug, info};

use crate::domain::entities::Counter;
use crate::domain::repositories::{GifStore, StoreError, StoreResult};

/// Redis key of the recent-GIF list.
pub const RECENT_GIFS_KEY: &str = "recent_gifs";

/// Redis store for the recent-GIF list and counters.
///
/// Uses `ConnectionManager` for connection reuse and automatic reconnects.
/// Unlike a read-through cache, errors propagate: the page cannot be rendered
/// without the store once it is configured.
pub struct RedisGifStore {
    client: ConnectionManager,
    key_prefix: String,
}

impl RedisGifStore {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Arguments
    ///
    /// - `redis_url` - Redis connection string (e.g., `"redis://localhost:6379/0"`)
    /// - `key_prefix` - Namespace prepended to every key (may be empty)
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Connection`] if the URL is invalid, the connection
    /// cannot be established, or the PING fails.
    pub async fn connect(redis_url: &str, key_prefix: &str) -> StoreResult<Self> {
        info!("Connecting to Redis");

        let client = Client::open(redis_url).map_err(|e| {
            StoreError::Connection(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = ConnectionManager::new(client)
            .await
            .map_err(|e| StoreError::Connection(format!("Failed to connect to Redis: {}", e)))?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| StoreError::Connection(format!("Redis PING failed: {}", e)))?;

        info!("✓ Connected to Redis");

        Ok(Self {
            client: manager,
            key_prefix: key_prefix.to_string(),
        })
    }

    /// Constructs the full Redis key with namespace prefix.
    fn build_key(&self, key: &str) -> String {
        format!("{}{}", self.key_prefix, key)
    }

    fn recent_key(&self) -> String {
        self.build_key(RECENT_GIFS_KEY)
    }
}

/// Maps a Redis error onto the store error kinds.
fn map_redis_error(op: &str, e: RedisError) -> StoreError {
    if e.is_connection_dropped() || e.is_connection_refusal() || e.is_timeout() {
        StoreError::Connection(format!("{}: {}", op, e))
    } else {
        StoreError::Operation(format!("{}: {}", op, e))
    }
}

/// Decodes a stored entry. Entries must be UTF-8 text.
fn decode_entry(raw: Vec<u8>) -> StoreResult<String> {
    String::from_utf8(raw)
        .map_err(|e| StoreError::Malformed(format!("recent entry is not UTF-8: {}", e)))
}

/// Decodes a stored counter. A missing key reads as zero.
fn decode_counter(key: &str, raw: Option<String>) -> StoreResult<u64> {
    match raw {
        None => Ok(0),
        Some(value) => value.trim().parse().map_err(|_| {
            StoreError::Malformed(format!("counter {} holds non-integer {:?}", key, value))
        }),
    }
}

/// Last index kept by `LTRIM` for a list bounded to `bound` entries, or
/// `None` when the list must be emptied.
fn ltrim_stop(bound: usize) -> StoreResult<Option<isize>> {
    if bound == 0 {
        return Ok(None);
    }

    isize::try_from(bound)
        .map(|bound| Some(bound - 1))
        .map_err(|_| StoreError::Operation(format!("list bound {} is out of range", bound)))
}

#[async_trait]
impl GifStore for RedisGifStore {
    async fn pop_recent(&self) -> StoreResult<Option<String>> {
        let mut conn = self.client.clone();
        let popped: Option<Vec<u8>> = conn
            .rpop(self.recent_key(), None)
            .await
            .map_err(|e| map_redis_error("RPOP", e))?;

        let popped = popped.map(decode_entry).transpose()?;
        debug!("RPOP {} -> {:?}", RECENT_GIFS_KEY, popped);
        Ok(popped)
    }

    async fn push_recent(&self, gif_url: &str) -> StoreResult<()> {
        let mut conn = self.client.clone();
        conn.lpush::<_, _, ()>(self.recent_key(), gif_url)
            .await
            .map_err(|e| map_redis_error("LPUSH", e))
    }

    async fn trim_recent(&self, bound: usize) -> StoreResult<()> {
        // LTRIM 0 -1 keeps everything, so a zero bound needs an explicit delete.
        let Some(stop) = ltrim_stop(bound)? else {
            return self.clear_recent().await;
        };

        let mut conn = self.client.clone();
        conn.ltrim::<_, ()>(self.recent_key(), 0, stop)
            .await
            .map_err(|e| map_redis_error("LTRIM", e))
    }

    async fn recent_len(&self) -> StoreResult<usize> {
        let mut conn = self.client.clone();
        conn.llen(self.recent_key())
            .await
            .map_err(|e| map_redis_error("LLEN", e))
    }

    async fn recent(&self) -> StoreResult<Vec<String>> {
        let mut conn = self.client.clone();
        let raw: Vec<Vec<u8>> = conn
            .lrange(self.recent_key(), 0, -1)
            .await
            .map_err(|e| map_redis_error("LRANGE", e))?;

        raw.into_iter().map(decode_entry).collect()
    }

    async fn clear_recent(&self) -> StoreResult<()> {
        let mut conn = self.client.clone();
        conn.del::<_, ()>(self.recent_key())
            .await
            .map_err(|e| map_redis_error("DEL", e))
    }

    async fn counter(&self, counter: Counter) -> StoreResult<u64> {
        let mut conn = self.client.clone();
        let key = self.build_key(counter.key());
        let value: Option<String> = conn
            .get(&key)
            .await
            .map_err(|e| map_redis_error("GET", e))?;

        decode_counter(&key, value)
    }

    async fn increment(&self, counter: Counter) -> StoreResult<u64> {
        let mut conn = self.client.clone();
        conn.incr(self.build_key(counter.key()), 1u64)
            .await
            .map_err(|e| map_redis_error("INCR", e))
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_entry_accepts_utf8() {
        let url = decode_entry(b"https://cataas.com/cat/gif".to_vec()).unwrap();
        assert_eq!(url, "https://cataas.com/cat/gif");
    }

    #[test]
    fn test_decode_entry_rejects_invalid_utf8() {
        let err = decode_entry(vec![0xff, 0xfe, 0x00]).unwrap_err();
        assert!(matches!(err, StoreError::Malformed(_)));
    }

    #[test]
    fn test_decode_counter_missing_is_zero() {
        assert_eq!(decode_counter("cache_hits", None).unwrap(), 0);
    }

    #[test]
    fn test_decode_counter_parses_integer() {
        assert_eq!(
            decode_counter("api_calls", Some("42".to_string())).unwrap(),
            42
        );
    }

    #[test]
    fn test_ltrim_stop_keeps_bound_entries() {
        assert_eq!(ltrim_stop(10).unwrap(), Some(9));
        assert_eq!(ltrim_stop(1).unwrap(), Some(0));
    }

    #[test]
    fn test_ltrim_stop_zero_bound_empties_list() {
        assert_eq!(ltrim_stop(0).unwrap(), None);
    }

    #[test]
    fn test_ltrim_stop_rejects_oversized_bound() {
        let err = ltrim_stop(usize::MAX).unwrap_err();
        assert!(matches!(err, StoreError::Operation(_)));
    }

    #[test]
    fn test_decode_counter_rejects_garbage() {
        let err = decode_counter("api_calls", Some("many".to_string())).unwrap_err();
        assert!(matches!(err, StoreError::Malformed(_)));
    }
}
