//! Passthrough proxy to the Mutalyzer normalization API
//!
//! Requests are forwarded as-is: the upstream status and body are returned
//! unchanged, with a fixed `Cache-Control` header added. There is no retry,
//! no response caching and no rate limiting.

use std::time::Duration;

use reqwest::Client;

use crate::service::{config::MutalyzerConfig, types::ServiceError};

/// Response relayed from the upstream API
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    /// Upstream HTTP status
    pub status: u16,
    /// Upstream `Content-Type`, if any
    pub content_type: Option<String>,
    /// Raw upstream body
    pub body: Vec<u8>,
}

/// Mutalyzer proxy client
#[derive(Debug, Clone)]
pub struct MutalyzerProxy {
    client: Client,
    /// Base URL without a trailing slash
    base_url: String,
    /// Value of the `Cache-Control` header added to relayed responses
    cache_control: String,
}

impl MutalyzerProxy {
    /// Create a new proxy from configuration
    pub fn new(config: &MutalyzerConfig) -> Result<Self, ServiceError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(concat!("ferro-aa/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ServiceError::ConfigError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            cache_control: format!("public, max-age={}", config.cache_max_age_seconds),
        })
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `Cache-Control` value for relayed responses
    pub fn cache_control(&self) -> &str {
        &self.cache_control
    }

    /// Upstream URL for a description; the description is percent-encoded
    /// as a single path segment.
    pub fn normalize_url(&self, description: &str) -> String {
        format!(
            "{}/api/normalize/{}",
            self.base_url,
            urlencoding::encode(description)
        )
    }

    /// Forward a normalize request and relay whatever comes back.
    ///
    /// Only transport failures are errors; any HTTP status from upstream,
    /// including 4xx/5xx, is relayed as a successful [`UpstreamResponse`].
    pub async fn normalize(&self, description: &str) -> Result<UpstreamResponse, ServiceError> {
        let url = self.normalize_url(description);
        tracing::debug!("Forwarding to {}", url);

        let response = self.client.get(&url).send().await.map_err(map_send_error)?;
        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response
            .bytes()
            .await
            .map_err(map_send_error)?
            .to_vec();

        if status >= 500 {
            tracing::warn!("Mutalyzer returned HTTP {} for {}", status, description);
        }

        Ok(UpstreamResponse {
            status,
            content_type,
            body,
        })
    }

    /// Check that the upstream answers at all; returns its HTTP status.
    pub async fn probe(&self) -> Result<u16, ServiceError> {
        let response = self
            .client
            .get(&self.base_url)
            .send()
            .await
            .map_err(map_send_error)?;
        Ok(response.status().as_u16())
    }
}

fn map_send_error(err: reqwest::Error) -> ServiceError {
    if err.is_timeout() {
        ServiceError::Timeout
    } else {
        ServiceError::Upstream(format!("Mutalyzer request failed: {}", err))
    }
}
