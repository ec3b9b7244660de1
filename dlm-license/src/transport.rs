//! HTTP transport used to reach the license server.

use crate::config::LicenseServerConfig;
use crate::error::{LicenseError, LicenseResult};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Status and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

/// Issues a single GET request. Implementations must not retry.
///
/// Any failure to complete the exchange is reported as
/// [`LicenseError::Transport`]; non-200 statuses are returned as responses.
#[async_trait]
pub trait LicenseTransport: Send + Sync {
    async fn get(&self, url: &str, query: &[(&str, &str)]) -> LicenseResult<TransportResponse>;
}

/// reqwest-backed transport.
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Builds a client with the configured timeout and user agent.
    pub fn new(config: &LicenseServerConfig) -> LicenseResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| LicenseError::Config(format!("failed to create HTTP client: {e}")))?;
        Ok(Self { client })
    }

    /// Wraps an existing client.
    #[must_use]
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl LicenseTransport for HttpTransport {
    async fn get(&self, url: &str, query: &[(&str, &str)]) -> LicenseResult<TransportResponse> {
        debug!("GET {url}");

        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| LicenseError::transport(format!("request failed: {e}")))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| LicenseError::transport(format!("failed to read body: {e}")))?;

        debug!("license server answered HTTP {status} ({} bytes)", body.len());
        Ok(TransportResponse { status, body })
    }
}
