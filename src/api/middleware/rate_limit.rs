//! Per-IP rate limiting using a token bucket.

use anyhow::{Result, anyhow};
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

/// Rate limiting layer keyed by client IP.
pub type RateLimitLayer =
    GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

/// Creates a rate limiter for the page and API.
///
/// Each reload of the page costs one provider call on a cache miss, so the
/// limiter also bounds how fast a single client can drain the image provider.
///
/// # Limits
///
/// - **Rate**: one token every `per_second` seconds (`RATE_LIMIT_PER_SECOND`)
/// - **Burst**: `burst` requests (`RATE_LIMIT_BURST`)
///
/// Requests exceeding the limit receive `429 Too Many Requests`. The client IP
/// is taken from the socket peer address, so the router must be served with
/// `into_make_service_with_connect_info::<SocketAddr>()`.
///
/// # Errors
///
/// Returns an error if either value is zero.
pub fn layer(per_second: u64, burst: u32) -> Result<RateLimitLayer> {
    let governor_conf = GovernorConfigBuilder::default()
        .per_second(per_second)
        .burst_size(burst)
        .finish()
        .ok_or_else(|| anyhow!("Invalid rate limit: {}/s, burst {}", per_second, burst))?;

    Ok(GovernorLayer::new(Arc::new(governor_conf)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_accepts_positive_values() {
        assert!(layer(2, 100).is_ok());
    }

    #[test]
    fn test_layer_rejects_zero_burst() {
        assert!(layer(2, 0).is_err());
    }
}
