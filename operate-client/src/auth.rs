//! Bearer token acquisition.
//!
//! The client asks a [`TokenProvider`] for a token before every request.
//! Caching, refresh and the OAuth exchange itself are the provider's concern;
//! see [`OAuthProvider`](crate::OAuthProvider) for the default implementation.

use std::future::Future;
use std::pin::Pin;
use thiserror::Error;

/// Audience name under which Operate tokens are requested.
pub const OPERATE_AUDIENCE: &str = "OPERATE";

/// Errors that can occur while obtaining a token.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The token request could not be sent.
    #[error("token request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The authorization server rejected the request.
    #[error("authorization server returned status {status}: {body}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// The authorization server answered without a usable token.
    #[error("invalid token response: {0}")]
    InvalidResponse(String),

    /// Failure reported by a custom provider.
    #[error("{0}")]
    Provider(String),
}

/// A boxed future resolving to a bearer token.
pub type TokenFuture<'a> = Pin<Box<dyn Future<Output = Result<String, AuthError>> + Send + 'a>>;

/// A source of bearer tokens, keyed by audience.
pub trait TokenProvider: Send + Sync {
    /// Get a token valid for `audience`.
    fn token<'a>(&'a self, audience: &'a str) -> TokenFuture<'a>;
}

/// A provider that always hands out the same token.
///
/// Useful when the token is obtained out of band, e.g. from a CLI login.
#[derive(Clone)]
pub struct StaticToken {
    token: String,
}

impl StaticToken {
    /// Wrap a pre-issued token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl std::fmt::Debug for StaticToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticToken").finish_non_exhaustive()
    }
}

impl TokenProvider for StaticToken {
    fn token<'a>(&'a self, _audience: &'a str) -> TokenFuture<'a> {
        let token = self.token.clone();
        Box::pin(async move { Ok::<_, AuthError>(token) })
    }
}
