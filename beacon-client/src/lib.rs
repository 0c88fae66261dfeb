//! Beacon HTTP Client
//!
//! A type-safe HTTP client for reading jobs, builds, build resources and
//! pipelines from the CI API server (the ATC).
//!
//! Consumers depend on the [`DataClient`] trait rather than on [`AtcClient`]
//! directly, so pages can be assembled against stub data in tests. A
//! [`ClientFactory`] builds one client per incoming request, carrying that
//! request's credentials.
//!
//! # Example
//!
//! ```no_run
//! use beacon_client::{AtcClient, DataClient};
//!
//! # async fn example() -> beacon_client::Result<()> {
//! let client = AtcClient::new("http://localhost:8081");
//!
//! if let Some(job) = client.job("main", "unit").await? {
//!     println!("Job {} is paused: {}", job.name, job.paused);
//! }
//! # Ok(())
//! # }
//! ```

mod builds;
mod data;
pub mod error;
mod factory;
mod jobs;
mod pipelines;

// Re-export commonly used types
pub use data::DataClient;
pub use error::{ClientError, Result};
pub use factory::{AtcClientFactory, ClientFactory};

use reqwest::{Client, StatusCode, Url, header::AUTHORIZATION};
use serde::de::DeserializeOwned;

/// HTTP client for the ATC read API
///
/// Endpoints are grouped by resource:
/// - Jobs and their build history
/// - Builds and build resources
/// - Pipelines
#[derive(Debug, Clone)]
pub struct AtcClient {
    /// Base URL of the API server (e.g., "http://localhost:8081")
    base_url: String,
    /// HTTP client instance
    client: Client,
    /// Value sent as the `Authorization` header, if any
    authorization: Option<String>,
}

impl AtcClient {
    /// Create a new ATC client
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the API server (e.g., "http://localhost:8081")
    ///
    /// # Example
    /// ```
    /// use beacon_client::AtcClient;
    ///
    /// let client = AtcClient::new("http://localhost:8081");
    /// ```
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Create a new ATC client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    /// Cloning a `reqwest::Client` shares its connection pool.
    ///
    /// # Example
    /// ```
    /// use beacon_client::AtcClient;
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(10))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = AtcClient::with_client("http://localhost:8081", http_client);
    /// ```
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            authorization: None,
        }
    }

    /// Send the given `Authorization` header value with every request
    pub fn with_authorization(mut self, authorization: impl Into<String>) -> Self {
        self.authorization = Some(authorization.into());
        self
    }

    /// Get the base URL of the API server
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build an endpoint URL from path segments
    ///
    /// Segments are percent-encoded, so names containing `/` or spaces
    /// cannot escape their position in the path.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = Url::parse(&self.base_url).map_err(|e| {
            ClientError::InvalidRequest(format!("Invalid base URL {}: {}", self.base_url, e))
        })?;

        url.path_segments_mut()
            .map_err(|_| {
                ClientError::InvalidRequest(format!(
                    "Base URL cannot have a path: {}",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }

    /// Issue a GET request, attaching credentials when present
    async fn get(&self, url: Url) -> Result<reqwest::Response> {
        tracing::debug!("GET {}", url);

        let mut request = self.client.get(url);
        if let Some(authorization) = &self.authorization {
            request = request.header(AUTHORIZATION, authorization);
        }

        Ok(request.send().await?)
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle an API response and deserialize JSON
    ///
    /// This method checks the status code and returns an appropriate error if
    /// the request failed, or deserializes the response body if successful.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }

    /// Handle an API response where 404 means the resource does not exist
    ///
    /// Absence is reported as `Ok(None)` rather than as an error.
    async fn handle_optional_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<Option<T>> {
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        self.handle_response(response).await.map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = AtcClient::new("http://localhost:8081");
        assert_eq!(client.base_url(), "http://localhost:8081");
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = AtcClient::new("http://localhost:8081/");
        assert_eq!(client.base_url(), "http://localhost:8081");
    }

    #[test]
    fn test_client_with_custom_client() {
        let http_client = Client::new();
        let client = AtcClient::with_client("http://localhost:8081", http_client);
        assert_eq!(client.base_url(), "http://localhost:8081");
    }

    #[test]
    fn test_endpoint_joins_segments() {
        let client = AtcClient::new("http://localhost:8081");
        let url = client
            .endpoint(&["api", "v1", "pipelines", "main"])
            .unwrap();
        assert_eq!(url.as_str(), "http://localhost:8081/api/v1/pipelines/main");
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let client = AtcClient::new("http://localhost:8081/ci/");
        let url = client.endpoint(&["api", "v1"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8081/ci/api/v1");
    }

    #[test]
    fn test_endpoint_encodes_segments() {
        let client = AtcClient::new("http://localhost:8081");
        let url = client
            .endpoint(&["api", "v1", "pipelines", "a/b c"])
            .unwrap();
        assert_eq!(url.as_str(), "http://localhost:8081/api/v1/pipelines/a%2Fb%20c");
    }

    #[test]
    fn test_endpoint_rejects_invalid_base() {
        let client = AtcClient::new("not a url");
        let result = client.endpoint(&["api"]);
        assert!(matches!(result, Err(ClientError::InvalidRequest(_))));
    }
}
