use crate::error::{Result, WowError};
use reqwest::blocking::{Client, ClientBuilder};
use std::time::Duration;

/// Create the HTTP client used for API requests from the given configuration
pub fn create_api_client(config: &Config) -> Result<Client> {
    ClientBuilder::new()
        .timeout(config.timeout)
        .connect_timeout(config.connect_timeout)
        .user_agent(config.user_agent.as_str())
        .build()
        .map_err(WowError::ClientBuild)
}

/// Transport configuration for the API client
#[derive(Debug, Clone)]
pub struct Config {
    /// URL scheme (http or https)
    pub scheme: String,
    /// Host override; when unset the region's host is used
    pub host: Option<String>,
    /// Total timeout for one request, including reading the body
    pub timeout: Duration,
    /// Timeout for establishing the connection
    pub connect_timeout: Duration,
    /// Value of the User-Agent header
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            scheme: "http".to_string(),
            host: None,
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            user_agent: concat!("wowapi/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl Config {
    /// Create a new configuration with the given scheme
    pub fn new(scheme: String) -> Self {
        Config {
            scheme,
            ..Config::default()
        }
    }

    /// Send requests to `host` instead of the region's host
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Set the total request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the connect timeout
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Set the User-Agent header value
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Get the base URL for API requests against `region_host`
    pub fn base_url(&self, region_host: &str) -> String {
        let host = self.host.as_deref().unwrap_or(region_host);
        format!("{}://{}", self.scheme, host)
    }
}
