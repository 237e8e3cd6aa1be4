//! OctoFit REST API Client
//!
//! HTTP client for the OctoFit collection endpoints. One GET per call, no
//! query parameters, no extra headers, no retries; failure taxonomy is
//! captured in [`FetchError`] so the fetch lifecycle can surface it as a
//! display message.

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

use crate::endpoint::{EndpointResolver, Resource};
use crate::normalize::normalize;
use crate::record::ResourceRecord;

/// Configuration for the API client.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// Request timeout in milliseconds
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

fn default_request_timeout_ms() -> u64 {
    5000
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            request_timeout_ms: default_request_timeout_ms(),
        }
    }
}

/// Client for the OctoFit collection API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    resolver: EndpointResolver,
}

impl ApiClient {
    /// Create a new client with the given resolver and configuration.
    pub fn new(resolver: EndpointResolver, config: ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_millis(config.request_timeout_ms))
            .build()
            .expect("Failed to create HTTP client");

        Self { client, resolver }
    }

    pub fn resolver(&self) -> &EndpointResolver {
        &self.resolver
    }

    /// Fetch and normalize one collection.
    ///
    /// Any 2xx response with a valid JSON body succeeds, even when the
    /// payload shape is unexpected (the normalizer degrades that to an
    /// empty collection). Everything else is a [`FetchError`].
    pub async fn fetch_collection(
        &self,
        resource: Resource,
    ) -> Result<Vec<ResourceRecord>, FetchError> {
        let url = self.resolver.url(resource);
        tracing::debug!(%resource, %url, "fetching collection");

        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout
            } else {
                FetchError::Transport(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http(status.as_u16()));
        }

        let payload: serde_json::Value = response
            .json()
            .await
            .map_err(|e| FetchError::InvalidBody(e.to_string()))?;

        Ok(normalize(payload))
    }
}

/// Errors that can occur when fetching a collection.
///
/// The `Display` form is what the dashboard shows in its error banner, so
/// the HTTP variant keeps the numeric status code visible.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP {0}")]
    Http(u16),

    #[error("request timed out")]
    Timeout,

    #[error("network error: {0}")]
    Transport(String),

    #[error("invalid JSON in response body: {0}")]
    InvalidBody(String),
}
