//! OAuth2 client-credentials token provider.

use crate::auth::{AuthError, TokenFuture, TokenProvider};
use crate::credentials::Credentials;
use chrono::{DateTime, Duration, Utc};
use parking_lot::RwLock;
use reqwest::Client as HttpClient;
use reqwest::header::USER_AGENT;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Tokens are refreshed this long before they expire.
const EXPIRY_MARGIN_SECS: i64 = 60;

/// Request body for a client-credentials grant.
#[derive(Debug, Serialize)]
struct TokenRequest<'a> {
    client_id: &'a str,
    client_secret: &'a str,
    audience: &'a str,
    grant_type: &'static str,
}

/// Token endpoint response.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: Option<i64>,
}

#[derive(Debug, Clone)]
struct CachedToken {
    access_token: String,
    expires_at: Option<DateTime<Utc>>,
}

impl CachedToken {
    fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        self.expires_at
            .is_some_and(|at| now + Duration::seconds(EXPIRY_MARGIN_SECS) < at)
    }
}

/// Map a well-known audience name to the value the authorization server expects.
///
/// Unknown names are passed through unchanged.
pub fn audience_url(audience: &str) -> &str {
    match audience {
        "OPERATE" => "operate.camunda.io",
        "ZEEBE" => "zeebe.camunda.io",
        "TASKLIST" => "tasklist.camunda.io",
        "OPTIMIZE" => "optimize.camunda.io",
        other => other,
    }
}

/// Token provider that performs the OAuth2 client-credentials flow.
///
/// Tokens are cached per audience until shortly before they expire.
/// Tokens without an `expires_in` are never reused.
pub struct OAuthProvider {
    http: HttpClient,
    token_url: String,
    client_id: String,
    client_secret: String,
    user_agent: String,
    cache: RwLock<HashMap<String, CachedToken>>,
}

impl std::fmt::Debug for OAuthProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OAuthProvider")
            .field("token_url", &self.token_url)
            .field("client_id", &self.client_id)
            .finish_non_exhaustive()
    }
}

impl OAuthProvider {
    /// Create a provider for the given token endpoint and client.
    pub fn new(
        token_url: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        user_agent: impl Into<String>,
    ) -> Self {
        Self {
            http: HttpClient::new(),
            token_url: token_url.into(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            user_agent: user_agent.into(),
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Create a provider from loaded credentials.
    pub fn from_credentials(credentials: &Credentials, user_agent: impl Into<String>) -> Self {
        Self::new(
            &credentials.auth_server_url,
            &credentials.client_id,
            &credentials.client_secret,
            user_agent,
        )
    }

    /// Use a custom HTTP client for token requests.
    #[must_use]
    pub fn with_http_client(mut self, http: HttpClient) -> Self {
        self.http = http;
        self
    }

    /// Drop all cached tokens.
    pub fn clear_cache(&self) {
        self.cache.write().clear();
    }

    fn cached(&self, audience: &str) -> Option<String> {
        let cache = self.cache.read();
        cache
            .get(audience)
            .filter(|t| t.is_fresh(Utc::now()))
            .map(|t| t.access_token.clone())
    }

    async fn fetch(&self, audience: &str) -> Result<String, AuthError> {
        if let Some(token) = self.cached(audience) {
            tracing::debug!(audience, "reusing cached token");
            return Ok(token);
        }

        tracing::debug!(audience, url = %self.token_url, "requesting token");
        let body = TokenRequest {
            client_id: &self.client_id,
            client_secret: &self.client_secret,
            audience: audience_url(audience),
            grant_type: "client_credentials",
        };

        let response = self
            .http
            .post(&self.token_url)
            .header(USER_AGENT, self.user_agent.as_str())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            tracing::warn!(audience, status = status.as_u16(), "token request rejected");
            return Err(AuthError::Rejected {
                status: status.as_u16(),
                body: text,
            });
        }

        let parsed: TokenResponse = serde_json::from_str(&text)
            .map_err(|e| AuthError::InvalidResponse(e.to_string()))?;
        if parsed.access_token.is_empty() {
            return Err(AuthError::InvalidResponse("empty access_token".to_string()));
        }

        let cached = CachedToken {
            access_token: parsed.access_token,
            expires_at: parsed
                .expires_in
                .map(|secs| Utc::now() + Duration::seconds(secs)),
        };
        let token = cached.access_token.clone();
        self.cache.write().insert(audience.to_string(), cached);

        Ok(token)
    }
}

impl TokenProvider for OAuthProvider {
    fn token<'a>(&'a self, audience: &'a str) -> TokenFuture<'a> {
        Box::pin(self.fetch(audience))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_audiences_are_mapped() {
        assert_eq!(audience_url("OPERATE"), "operate.camunda.io");
        assert_eq!(audience_url("ZEEBE"), "zeebe.camunda.io");
        assert_eq!(audience_url("custom.example.com"), "custom.example.com");
    }

    #[test]
    fn freshness_respects_margin() {
        let now = Utc::now();
        let token = |secs: i64| CachedToken {
            access_token: "t".into(),
            expires_at: Some(now + Duration::seconds(secs)),
        };
        assert!(token(3600).is_fresh(now));
        assert!(!token(30).is_fresh(now));
        assert!(!token(-5).is_fresh(now));

        let no_expiry = CachedToken {
            access_token: "t".into(),
            expires_at: None,
        };
        assert!(!no_expiry.is_fresh(now));
    }

    #[test]
    fn debug_hides_secret() {
        let provider = OAuthProvider::new("https://auth/token", "id", "s3cr3t", "ua");
        assert!(!format!("{:?}", provider).contains("s3cr3t"));
    }
}
