//! Cataas ("Cat as a Service") image provider.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};
use url::Url;

use crate::domain::repositories::{ImageProvider, ProviderError};

/// Default endpoint returning a random cat GIF.
pub const DEFAULT_CATAAS_GIF_URL: &str = "https://cataas.com/cat/gif";

/// Fetches random GIF URLs from Cataas.
///
/// Issues a single GET per call and reports the final URL after redirects.
/// The response body is never read.
pub struct CataasProvider {
    client: Client,
    endpoint: Url,
}

impl CataasProvider {
    /// Creates a provider for `endpoint` with a per-request `timeout`.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Unreachable`] if the HTTP client cannot be built.
    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .map_err(|e| ProviderError::Unreachable(format!("Failed to build client: {}", e)))?;

        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl ImageProvider for CataasProvider {
    async fn fetch_gif_url(&self) -> Result<String, ProviderError> {
        let response = self
            .client
            .get(self.endpoint.clone())
            .send()
            .await
            .map_err(|e| {
                warn!("Image provider request to {} failed: {}", self.endpoint, e);
                if e.is_timeout() {
                    ProviderError::Timeout
                } else {
                    ProviderError::Unreachable(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Image provider {} returned {}", self.endpoint, status);
            return Err(ProviderError::Status(status.as_u16()));
        }

        let resolved = response.url().to_string();
        debug!("Image provider resolved {}", resolved);
        Ok(resolved)
    }
}
