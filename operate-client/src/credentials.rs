//! Connection credentials and where they come from.

use crate::env::{EnvProvider, RealEnv};
use thiserror::Error;

/// Address of the Zeebe gateway; its host doubles as the OAuth audience.
pub const ZEEBE_ADDRESS: &str = "ZEEBE_ADDRESS";
/// OAuth client id.
pub const ZEEBE_CLIENT_ID: &str = "ZEEBE_CLIENT_ID";
/// OAuth client secret.
pub const ZEEBE_CLIENT_SECRET: &str = "ZEEBE_CLIENT_SECRET";
/// Token endpoint of the authorization server.
pub const ZEEBE_AUTHORIZATION_SERVER_URL: &str = "ZEEBE_AUTHORIZATION_SERVER_URL";
/// Optional override of the Operate base URL.
pub const CAMUNDA_OPERATE_BASE_URL: &str = "CAMUNDA_OPERATE_BASE_URL";

/// Errors reported when credentials cannot be assembled.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CredentialsError {
    /// One or more required settings are absent.
    #[error("Operate API client credentials are incomplete, missing: {}", .missing.join(", "))]
    Incomplete {
        /// Names of the missing settings.
        missing: Vec<String>,
    },

    /// The audience does not start with a cluster id.
    #[error("cannot derive cluster id from audience {0:?}")]
    InvalidAudience(String),
}

/// Credentials needed to reach a SaaS cluster.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Zeebe gateway address, e.g. `abc123.bru-2.zeebe.camunda.io:443`.
    pub zeebe_address: String,
    /// OAuth client id.
    pub client_id: String,
    /// OAuth client secret.
    pub client_secret: String,
    /// OAuth token endpoint.
    pub auth_server_url: String,
    /// Operate base URL, if configured explicitly.
    pub operate_base_url: Option<String>,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("zeebe_address", &self.zeebe_address)
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("auth_server_url", &self.auth_server_url)
            .field("operate_base_url", &self.operate_base_url)
            .finish()
    }
}

impl Credentials {
    /// The gateway host without its port.
    pub fn audience(&self) -> &str {
        match self.zeebe_address.rsplit_once(':') {
            Some((host, port)) if port.chars().all(|c| c.is_ascii_digit()) => host,
            _ => &self.zeebe_address,
        }
    }

    /// Cluster id: the leading dot-segment of the audience.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialsError::InvalidAudience`] if that segment is empty.
    pub fn cluster_id(&self) -> Result<&str, CredentialsError> {
        let audience = self.audience();
        match audience.split('.').next() {
            Some(id) if !id.trim().is_empty() => Ok(id),
            _ => Err(CredentialsError::InvalidAudience(audience.to_string())),
        }
    }
}

/// A source of connection credentials.
pub trait CredentialSource: Send + Sync {
    /// Load the credentials, failing if any required value is missing.
    fn load(&self) -> Result<Credentials, CredentialsError>;
}

impl CredentialSource for Credentials {
    fn load(&self) -> Result<Credentials, CredentialsError> {
        Ok(self.clone())
    }
}

/// Credentials read from environment variables.
pub struct EnvCredentials<E: EnvProvider = RealEnv> {
    env: E,
}

impl EnvCredentials<RealEnv> {
    /// Read from the process environment.
    pub fn new() -> Self {
        Self { env: RealEnv }
    }
}

impl Default for EnvCredentials<RealEnv> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: EnvProvider> EnvCredentials<E> {
    /// Read from a custom environment provider.
    pub fn with_env(env: E) -> Self {
        Self { env }
    }
}

impl<E: EnvProvider> CredentialSource for EnvCredentials<E> {
    fn load(&self) -> Result<Credentials, CredentialsError> {
        let mut missing = Vec::new();
        let mut required = |key: &str| {
            let value = self.env.non_empty(key);
            if value.is_none() {
                missing.push(key.to_string());
            }
            value.unwrap_or_default()
        };

        let zeebe_address = required(ZEEBE_ADDRESS);
        let client_id = required(ZEEBE_CLIENT_ID);
        let client_secret = required(ZEEBE_CLIENT_SECRET);
        let auth_server_url = required(ZEEBE_AUTHORIZATION_SERVER_URL);

        if !missing.is_empty() {
            return Err(CredentialsError::Incomplete { missing });
        }

        Ok(Credentials {
            zeebe_address,
            client_id,
            client_secret,
            auth_server_url,
            operate_base_url: self.env.non_empty(CAMUNDA_OPERATE_BASE_URL),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::MockEnv;

    fn full_env() -> MockEnv {
        MockEnv::from_pairs(&[
            (ZEEBE_ADDRESS, "7a0d9b2c-11aa.bru-2.zeebe.camunda.io:443"),
            (ZEEBE_CLIENT_ID, "client"),
            (ZEEBE_CLIENT_SECRET, "secret"),
            (
                ZEEBE_AUTHORIZATION_SERVER_URL,
                "https://login.cloud.camunda.io/oauth/token",
            ),
        ])
    }

    #[test]
    fn loads_complete_environment() {
        let creds = EnvCredentials::with_env(full_env()).load().unwrap();
        assert_eq!(creds.client_id, "client");
        assert_eq!(creds.audience(), "7a0d9b2c-11aa.bru-2.zeebe.camunda.io");
        assert_eq!(creds.cluster_id().unwrap(), "7a0d9b2c-11aa");
        assert!(creds.operate_base_url.is_none());
    }

    #[test]
    fn reports_every_missing_variable() {
        let env = MockEnv::new()
            .with_var(ZEEBE_CLIENT_ID, "client")
            .with_var(ZEEBE_CLIENT_SECRET, "   ");
        let err = EnvCredentials::with_env(env).load().unwrap_err();
        assert_eq!(
            err,
            CredentialsError::Incomplete {
                missing: vec![
                    ZEEBE_ADDRESS.to_string(),
                    ZEEBE_CLIENT_SECRET.to_string(),
                    ZEEBE_AUTHORIZATION_SERVER_URL.to_string(),
                ]
            }
        );
        assert!(err.to_string().contains("ZEEBE_ADDRESS"));
    }

    #[test]
    fn picks_up_operate_base_url() {
        let env = full_env().with_var(CAMUNDA_OPERATE_BASE_URL, "https://syd-1.operate.camunda.io");
        let creds = EnvCredentials::with_env(env).load().unwrap();
        assert_eq!(
            creds.operate_base_url.as_deref(),
            Some("https://syd-1.operate.camunda.io")
        );
    }

    #[test]
    fn address_without_port() {
        let creds = Credentials {
            zeebe_address: "abc.zeebe.example.com".into(),
            client_id: "c".into(),
            client_secret: "s".into(),
            auth_server_url: "https://auth".into(),
            operate_base_url: None,
        };
        assert_eq!(creds.audience(), "abc.zeebe.example.com");
        assert_eq!(creds.cluster_id().unwrap(), "abc");
    }

    #[test]
    fn empty_cluster_segment_is_rejected() {
        let creds = Credentials {
            zeebe_address: ".zeebe.example.com:443".into(),
            client_id: "c".into(),
            client_secret: "s".into(),
            auth_server_url: "https://auth".into(),
            operate_base_url: None,
        };
        assert!(matches!(
            creds.cluster_id(),
            Err(CredentialsError::InvalidAudience(_))
        ));
    }

    #[test]
    fn debug_redacts_secret() {
        let creds = EnvCredentials::with_env(full_env()).load().unwrap();
        let debug = format!("{:?}", creds);
        assert!(!debug.contains("\"secret\""));
        assert!(debug.contains("<redacted>"));
    }
}
