//! Core Operate client implementation.

use crate::auth::{OPERATE_AUDIENCE, TokenProvider};
use crate::config::{API_VERSION, ClientConfig, DEFAULT_BASE_URL};
use crate::credentials::{CredentialSource, EnvCredentials};
use crate::env::{EnvProvider, RealEnv};
use crate::error::{ClientError, Result};
use crate::oauth::OAuthProvider;
use crate::query::{Key, Query, Resource, SearchResults};
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::{Client as HttpClient, Method, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// What the caller is prepared to read back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Accept {
    /// JSON documents.
    Json,
    /// Anything; used for the BPMN XML export.
    Any,
}

impl Accept {
    fn as_str(self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Any => "*/*",
        }
    }
}

/// A client for the Operate REST API.
///
/// The client holds only immutable configuration and is cheap to clone;
/// concurrent calls need no coordination. A fresh token is requested from
/// the [`TokenProvider`] for every call.
///
/// # Example
///
/// ```no_run
/// use operate_client::{Client, ClientConfig, Credentials, StaticToken};
/// use std::sync::Arc;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let credentials = Credentials {
///     zeebe_address: "abc123.bru-2.zeebe.camunda.io:443".into(),
///     client_id: "my-client".into(),
///     client_secret: "my-secret".into(),
///     auth_server_url: "https://login.cloud.camunda.io/oauth/token".into(),
///     operate_base_url: None,
/// };
///
/// let client = Client::new(
///     ClientConfig::new(),
///     &credentials,
///     Arc::new(StaticToken::new("pre-issued-token")),
/// )?;
///
/// let definitions = client.search_process_definitions(None).await?;
/// println!("{} definitions deployed", definitions.total);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Client {
    /// Request prefix: `{base_url}/{cluster_id}/v1`.
    prefix: String,
    /// Value of the `user-agent` header.
    user_agent: String,
    /// HTTP client.
    http: HttpClient,
    /// Source of bearer tokens.
    tokens: Arc<dyn TokenProvider>,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("prefix", &self.prefix)
            .field("user_agent", &self.user_agent)
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Create a new Operate client.
    ///
    /// Credentials are loaded once, here; the cluster id is the leading
    /// dot-segment of the Zeebe audience. When `config` still carries
    /// [`DEFAULT_BASE_URL`], the credentials' `operate_base_url` is used
    /// instead. No network I/O takes place.
    ///
    /// # Arguments
    ///
    /// * `config` - Base URL, user agent and transport options
    /// * `credentials` - Source of the cluster identity
    /// * `tokens` - Bearer token provider, consulted on every call
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Configuration`] if the credentials are incomplete,
    /// [`ClientError::InvalidUrl`] if the base URL is not http(s), or
    /// [`ClientError::Http`] if the HTTP client cannot be created.
    pub fn new(
        config: ClientConfig,
        credentials: &dyn CredentialSource,
        tokens: Arc<dyn TokenProvider>,
    ) -> Result<Self> {
        let credentials = credentials.load()?;

        // An explicitly configured base URL wins over the credentials' one.
        let base_url = match &credentials.operate_base_url {
            Some(url) if config.base_url == DEFAULT_BASE_URL => url.as_str(),
            _ => config.base_url.as_str(),
        };
        let base_url = base_url.trim_end_matches('/');

        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ClientError::InvalidUrl(format!(
                "URL must start with http:// or https://, got: {}",
                base_url
            )));
        }

        let cluster_id = credentials.cluster_id()?;
        let prefix = format!("{}/{}/{}", base_url, cluster_id, API_VERSION);

        let mut builder = HttpClient::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        tracing::debug!(%prefix, "created Operate client");

        Ok(Self {
            prefix,
            user_agent: config.user_agent,
            http,
            tokens,
        })
    }

    /// Create a client from the process environment.
    ///
    /// Reads `ZEEBE_ADDRESS`, `ZEEBE_CLIENT_ID`, `ZEEBE_CLIENT_SECRET`,
    /// `ZEEBE_AUTHORIZATION_SERVER_URL` and, optionally,
    /// `CAMUNDA_OPERATE_BASE_URL`, and authenticates with an [`OAuthProvider`].
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Configuration`] if a required variable is unset.
    pub fn from_env() -> Result<Self> {
        Self::from_env_provider(&RealEnv)
    }

    /// Like [`Client::from_env`], reading from a custom environment provider.
    ///
    /// # Errors
    ///
    /// See [`Client::from_env`].
    pub fn from_env_provider<E: EnvProvider + Clone>(env: &E) -> Result<Self> {
        let source = EnvCredentials::with_env(env.clone());
        let credentials = source.load()?;
        let config = ClientConfig::from_env(env);
        let tokens = OAuthProvider::from_credentials(&credentials, &config.user_agent);

        Self::new(config, &credentials, Arc::new(tokens))
    }

    /// The request prefix, `{base_url}/{cluster_id}/v1`.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Build a full URL from a path.
    fn url(&self, path: &str) -> String {
        let path = path.strip_prefix('/').unwrap_or(path);
        format!("{}/{}", self.prefix, path)
    }

    /// Start a request with a freshly fetched bearer token.
    async fn request(&self, method: Method, path: &str, accept: Accept) -> Result<RequestBuilder> {
        let token = self.tokens.token(OPERATE_AUDIENCE).await?;
        let url = self.url(path);

        tracing::debug!(%method, %url, "sending Operate request");

        Ok(self
            .http
            .request(method, url)
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, format!("Bearer {}", token))
            .header(USER_AGENT, self.user_agent.as_str())
            .header(ACCEPT, accept.as_str()))
    }

    /// Execute a GET request.
    pub(crate) async fn get(&self, path: &str, accept: Accept) -> Result<Response> {
        let request = self.request(Method::GET, path, accept).await?;
        request.send().await.map_err(ClientError::Http)
    }

    /// Execute a POST request with a JSON body.
    pub(crate) async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        let request = self.request(Method::POST, path, Accept::Json).await?;
        request.json(body).send().await.map_err(ClientError::Http)
    }

    /// Execute a DELETE request.
    pub(crate) async fn delete(&self, path: &str) -> Result<Response> {
        let request = self.request(Method::DELETE, path, Accept::Json).await?;
        request.send().await.map_err(ClientError::Http)
    }

    /// Turn a non-2xx response into [`ClientError::Api`].
    async fn check_status(&self, response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        // The status is the error; an unreadable body is reported as empty.
        let body = response.text().await.unwrap_or_default();
        tracing::warn!(
            status = status.as_u16(),
            prefix = %self.prefix,
            "Operate returned an error response"
        );

        Err(ClientError::Api {
            status: status.as_u16(),
            body,
        })
    }

    /// Handle a response and deserialize JSON.
    pub(crate) async fn handle_response<T: DeserializeOwned>(&self, response: Response) -> Result<T> {
        let response = self.check_status(response).await?;
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(ClientError::Deserialize)
    }

    /// Handle a response whose body is returned as text, unparsed.
    pub(crate) async fn handle_text_response(&self, response: Response) -> Result<String> {
        let response = self.check_status(response).await?;
        Ok(response.text().await?)
    }

    /// `POST {resource}/search`.
    pub(crate) async fn search<T: Resource>(&self, query: &Query<T>) -> Result<SearchResults<T>> {
        let path = format!("{}/search", T::PATH);
        let response = self.post(&path, query).await?;
        self.handle_response(response).await
    }

    /// `GET {resource}/{key}`, checking the returned key.
    pub(crate) async fn fetch<T: Resource>(&self, key: Key) -> Result<T> {
        let path = format!("{}/{}", T::PATH, key);
        let response = self.get(&path, Accept::Json).await?;
        let entity: T = self.handle_response(response).await?;

        if entity.key() != key {
            return Err(ClientError::InvalidResponse(format!(
                "requested {} {} but received key {}",
                T::PATH,
                key,
                entity.key()
            )));
        }

        Ok(entity)
    }
}
