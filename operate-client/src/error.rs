//! Error types for the Operate client.

use crate::auth::AuthError;
use crate::credentials::CredentialsError;
use thiserror::Error;

/// Errors that can occur when using the Operate client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Credentials were missing or incomplete when the client was built.
    #[error("Configuration error: {0}")]
    Configuration(#[from] CredentialsError),

    /// Invalid base URL provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The token provider could not supply a bearer token.
    #[error("Authentication failed: {0}")]
    Authentication(#[from] AuthError),

    /// HTTP request failed at the transport level.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server returned a non-2xx response.
    #[error("API error (status {status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// Failed to deserialize response.
    #[error("Failed to deserialize response: {0}")]
    Deserialize(#[from] serde_json::Error),

    /// Response parsed but does not match the request.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl ClientError {
    /// HTTP status code, if the server answered with a non-2xx response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True for a 404 response, e.g. a lookup of a key that does not exist.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// True for any 4xx response.
    pub fn is_client_error(&self) -> bool {
        matches!(self.status(), Some(400..=499))
    }

    /// True for any 5xx response.
    pub fn is_server_error(&self) -> bool {
        matches!(self.status(), Some(500..=599))
    }

    /// Human-readable message of an API error.
    ///
    /// Operate answers errors with a JSON document carrying a `message`
    /// field; if the body is not such a document it is returned as-is.
    pub fn message(&self) -> Option<String> {
        let Self::Api { body, .. } = self else {
            return None;
        };

        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|json| {
                json["message"]
                    .as_str()
                    .or_else(|| json["error"].as_str())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| body.clone());

        Some(message)
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn api(status: u16, body: &str) -> ClientError {
        ClientError::Api {
            status,
            body: body.to_string(),
        }
    }

    #[test]
    fn status_classification() {
        assert!(api(404, "").is_not_found());
        assert!(api(404, "").is_client_error());
        assert!(!api(404, "").is_server_error());
        assert!(api(400, "").is_client_error());
        assert!(api(503, "").is_server_error());
        assert!(!api(503, "").is_not_found());
        assert_eq!(ClientError::InvalidUrl("x".into()).status(), None);
    }

    #[test]
    fn message_from_json_body() {
        let err = api(
            404,
            r#"{"status":404,"message":"No process instances found for key 1","instance":"abc","type":"Requested resource not found"}"#,
        );
        assert_eq!(
            err.message().as_deref(),
            Some("No process instances found for key 1")
        );
    }

    #[test]
    fn message_falls_back_to_raw_body() {
        let err = api(502, "Bad Gateway");
        assert_eq!(err.message().as_deref(), Some("Bad Gateway"));
        assert_eq!(ClientError::InvalidResponse("x".into()).message(), None);
    }
}
