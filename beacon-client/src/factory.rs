//! Per-request client construction

use std::sync::Arc;

use reqwest::Client;

use crate::AtcClient;
use crate::data::DataClient;

/// Builds a data client for one incoming request
///
/// Requests are answered with the caller's own credentials, so each request
/// gets a client carrying its `Authorization` header.
pub trait ClientFactory: Send + Sync {
    fn build(&self, authorization: Option<&str>) -> Arc<dyn DataClient>;
}

/// Factory producing [`AtcClient`]s that share one connection pool
#[derive(Debug, Clone)]
pub struct AtcClientFactory {
    base_url: String,
    client: Client,
}

impl AtcClientFactory {
    /// # Arguments
    /// * `base_url` - The base URL of the API server
    /// * `client` - A configured reqwest Client, shared by all built clients
    pub fn new(base_url: impl Into<String>, client: Client) -> Self {
        Self {
            base_url: base_url.into(),
            client,
        }
    }

    /// Build a concrete client, for callers that need the inherent API
    pub fn atc_client(&self, authorization: Option<&str>) -> AtcClient {
        let client = AtcClient::with_client(self.base_url.clone(), self.client.clone());
        match authorization {
            Some(authorization) => client.with_authorization(authorization),
            None => client,
        }
    }
}

impl ClientFactory for AtcClientFactory {
    fn build(&self, authorization: Option<&str>) -> Arc<dyn DataClient> {
        Arc::new(self.atc_client(authorization))
    }
}
