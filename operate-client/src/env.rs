//! Environment variable provider for credential discovery.
//!
//! Production code reads the process environment; tests supply an isolated
//! map so they never touch global state.

use std::collections::HashMap;

/// Provider trait for environment variable lookups.
pub trait EnvProvider: Send + Sync {
    /// Get an environment variable.
    fn var(&self, key: &str) -> Option<String>;

    /// Get a variable, treating blank values as unset.
    fn non_empty(&self, key: &str) -> Option<String> {
        self.var(key)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }
}

/// Environment provider backed by the real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealEnv;

impl RealEnv {
    /// Create a new real environment provider.
    pub fn new() -> Self {
        Self
    }
}

impl EnvProvider for RealEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// In-memory environment for tests.
///
/// # Example
///
/// ```
/// use operate_client::{EnvProvider, MockEnv};
///
/// let env = MockEnv::new()
///     .with_var("ZEEBE_CLIENT_ID", "my-client")
///     .with_var("ZEEBE_CLIENT_SECRET", "  ");
///
/// assert_eq!(env.var("ZEEBE_CLIENT_ID"), Some("my-client".to_string()));
/// assert_eq!(env.non_empty("ZEEBE_CLIENT_SECRET"), None);
/// assert_eq!(env.var("MISSING"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockEnv {
    vars: HashMap<String, String>,
}

impl MockEnv {
    /// Create a new empty mock environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable to the mock environment.
    #[must_use]
    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    /// Create a mock environment from key-value pairs.
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        let vars = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self { vars }
    }
}

impl EnvProvider for MockEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}
