//! Web server configuration
//!
//! Settings for the listening socket, the upstream CI API and the request
//! and client timeouts.

use std::time::Duration;

/// Web server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Address to bind the HTTP listener to (e.g., "0.0.0.0:8080")
    pub bind_addr: String,

    /// Base URL of the CI API server (e.g., "http://localhost:8081")
    pub atc_url: String,

    /// Maximum time spent answering one page request
    ///
    /// Outstanding upstream fetches are dropped when it elapses.
    pub request_timeout: Duration,

    /// Maximum time for a single call to the CI API
    pub client_timeout: Duration,
}

impl Config {
    /// Creates a new configuration with defaults
    pub fn new(bind_addr: String, atc_url: String) -> Self {
        Self {
            bind_addr,
            atc_url,
            request_timeout: Duration::from_secs(30),
            client_timeout: Duration::from_secs(10),
        }
    }

    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - BEACON_BIND_ADDR (optional, default: 0.0.0.0:8080)
    /// - ATC_URL (optional, default: http://localhost:8081)
    /// - REQUEST_TIMEOUT (optional, seconds, default: 30)
    /// - CLIENT_TIMEOUT (optional, seconds, default: 10)
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = Self::default();

        let bind_addr = std::env::var("BEACON_BIND_ADDR").unwrap_or(defaults.bind_addr);
        let atc_url = std::env::var("ATC_URL").unwrap_or(defaults.atc_url);

        let request_timeout = seconds_from_env("REQUEST_TIMEOUT")?
            .unwrap_or(defaults.request_timeout);
        let client_timeout = seconds_from_env("CLIENT_TIMEOUT")?
            .unwrap_or(defaults.client_timeout);

        Ok(Self {
            bind_addr,
            atc_url,
            request_timeout,
            client_timeout,
        })
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.bind_addr.is_empty() {
            anyhow::bail!("bind_addr cannot be empty");
        }

        if self.atc_url.is_empty() {
            anyhow::bail!("atc_url cannot be empty");
        }

        if !self.atc_url.starts_with("http://") && !self.atc_url.starts_with("https://") {
            anyhow::bail!("atc_url must start with http:// or https://");
        }

        if self.request_timeout.is_zero() {
            anyhow::bail!("request_timeout must be greater than 0");
        }

        if self.client_timeout.is_zero() {
            anyhow::bail!("client_timeout must be greater than 0");
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(
            "0.0.0.0:8080".to_string(),
            "http://localhost:8081".to_string(),
        )
    }
}

/// Reads a whole number of seconds from an environment variable
///
/// An unset variable is `None`; a set but unparsable one is an error.
fn seconds_from_env(name: &str) -> anyhow::Result<Option<Duration>> {
    match std::env::var(name) {
        Ok(value) => value
            .trim()
            .parse::<u64>()
            .map(|secs| Some(Duration::from_secs(secs)))
            .map_err(|_| {
                anyhow::anyhow!(
                    "{} must be a whole number of seconds, got {:?}",
                    name,
                    value
                )
            }),
        Err(_) => Ok(None),
    }
}
