//! HTTP client builder tuned for the authorization call.

use std::time::Duration;

use crate::error::Error;

/// Path of the authorization endpoint, relative to the configured base URL.
pub const AUTHORIZE_PATH: &str = "/api/oauth/authorize";

/// HTTP client configuration.
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Base URL of the platform hosting the authorization endpoint.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
    /// User agent string.
    pub user_agent: String,
}

impl HttpClientConfig {
    /// Create a configuration pointing at the given base URL.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            ..Self::default()
        }
    }
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            timeout: Duration::from_secs(30),
            user_agent: format!("consent-flow/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Builder for the HTTP client used by the approve flow.
///
/// The resulting client never follows redirects: the authorization endpoint's
/// redirect-bearing response is inspected by the controller, not executed by
/// the transport.
pub struct HttpClientBuilder {
    config: HttpClientConfig,
}

impl HttpClientBuilder {
    /// Create a new client builder with default configuration.
    pub fn new() -> Self {
        Self {
            config: HttpClientConfig::default(),
        }
    }

    /// Create a client builder from an existing configuration.
    pub fn with_config(config: HttpClientConfig) -> Self {
        Self { config }
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the user agent string.
    pub fn with_user_agent(mut self, user_agent: String) -> Self {
        self.config.user_agent = user_agent;
        self
    }

    /// Build the configured HTTP client.
    pub fn build(self) -> Result<reqwest::Client, Error> {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(self.config.timeout)
            .user_agent(self.config.user_agent)
            .redirect(reqwest::redirect::Policy::none())
            .build()?;

        Ok(client)
    }
}

impl Default for HttpClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
