//! Client configuration.

use crate::credentials::CAMUNDA_OPERATE_BASE_URL;
use crate::env::EnvProvider;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default regional Operate endpoint.
pub const DEFAULT_BASE_URL: &str = "https://bru-2.operate.camunda.io";

/// REST API version segment.
pub const API_VERSION: &str = "v1";

/// Default `user-agent`, identifying this client and its version.
pub fn default_user_agent() -> String {
    format!("operate-client-rust/{}", env!("CARGO_PKG_VERSION"))
}

/// Configuration for an Operate [`Client`](crate::Client).
///
/// # Example
///
/// ```
/// use operate_client::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::new()
///     .with_base_url("https://syd-1.operate.camunda.io")
///     .with_user_agent("my-dashboard/2.1")
///     .with_timeout(Duration::from_secs(10));
///
/// assert_eq!(config.timeout(), Some(Duration::from_secs(10)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Operate base URL, without the cluster id.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Value sent in the `user-agent` header.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Transport timeout. `None` leaves the transport default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<Duration>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl ClientConfig {
    /// Create a configuration with defaults.
    pub fn new() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            timeout: None,
        }
    }

    /// Defaults, with the base URL taken from `CAMUNDA_OPERATE_BASE_URL` if set.
    pub fn from_env(env: &dyn EnvProvider) -> Self {
        let config = Self::new();
        match env.non_empty(CAMUNDA_OPERATE_BASE_URL) {
            Some(url) => config.with_base_url(url),
            None => config,
        }
    }

    /// Set the base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the `user-agent` header value.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set a transport timeout for every request.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// The configured transport timeout.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}
