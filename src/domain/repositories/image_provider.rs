//! Trait for the external image provider.

use async_trait::async_trait;

/// Errors raised when fetching a fresh GIF URL.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("Image provider unreachable: {0}")]
    Unreachable(String),

    #[error("Image provider timed out")]
    Timeout,

    #[error("Image provider returned status {0}")]
    Status(u16),
}

/// Source of fresh GIF URLs.
///
/// One call, one resolved image URL. Implementations must not retry.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImageProvider: Send + Sync {
    /// Requests a random GIF and returns its resolved URL.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] if the provider cannot be reached, times out,
    /// or answers with a non-success status.
    async fn fetch_gif_url(&self) -> Result<String, ProviderError>;
}
