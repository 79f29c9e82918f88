//! Type-safe Rust client for the Camunda Operate REST API.
//!
//! Operate is the monitoring side of a Camunda 8 cluster. This crate exposes
//! its search and lookup endpoints with typed requests and responses.
//!
//! # Features
//!
//! - Process definitions (search, get, BPMN XML export)
//! - Process instances (search, get, delete)
//! - Incidents, flow node instances and variables (search, get)
//! - Typed filters and sort fields per resource
//! - OAuth2 client-credentials authentication, or any custom [`TokenProvider`]
//!
//! # Example
//!
//! ```no_run
//! use operate_client::{Client, ProcessInstance, ProcessInstanceFilter, Query};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Reads ZEEBE_ADDRESS, ZEEBE_CLIENT_ID, ZEEBE_CLIENT_SECRET and
//! // ZEEBE_AUTHORIZATION_SERVER_URL from the environment.
//! let client = Client::from_env()?;
//!
//! let query = Query::<ProcessInstance>::new()
//!     .filter(ProcessInstanceFilter {
//!         state: Some("ACTIVE".into()),
//!         ..Default::default()
//!     })
//!     .size(50);
//!
//! let instances = client.search_process_instances(Some(&query)).await?;
//! for instance in &instances.items {
//!     println!("{} ({})", instance.key, instance.bpmn_process_id);
//! }
//!
//! // Next page
//! let next = query.after(&instances);
//! let more = client.search_process_instances(Some(&next)).await?;
//! println!("{} more", more.items.len());
//! # Ok(())
//! # }
//! ```
//!
//! # Required queries
//!
//! Definition, instance and incident search accept `None` for "everything".
//! Flow node and variable search always need an explicit query:
//!
//! ```compile_fail
//! # use operate_client::Client;
//! # async fn example(client: Client) {
//! let _ = client.search_flownode_instances(None).await;
//! # }
//! ```
//!
//! ```compile_fail
//! # use operate_client::Client;
//! # async fn example(client: Client) {
//! let _ = client.search_variables(None).await;
//! # }
//! ```
//!
//! # Error Handling
//!
//! All operations return `Result<T, ClientError>`:
//!
//! ```no_run
//! # use operate_client::{Client, ClientError};
//! # async fn example(client: Client) -> Result<(), ClientError> {
//! match client.get_process_instance(2251799819847322).await {
//!     Ok(instance) => println!("State: {}", instance.state),
//!     Err(e) if e.is_not_found() => println!("No such instance"),
//!     Err(e) => println!("Error: {}", e),
//! }
//! # Ok(())
//! # }
//! ```

mod auth;
mod client;
mod config;
mod credentials;
mod env;
mod error;
mod flownodes;
mod incidents;
mod oauth;
mod process_definitions;
mod process_instances;
mod query;
mod types;
mod variables;

pub use auth::{AuthError, OPERATE_AUDIENCE, StaticToken, TokenFuture, TokenProvider};
pub use client::Client;
pub use config::{API_VERSION, ClientConfig, DEFAULT_BASE_URL, default_user_agent};
pub use credentials::{
    CAMUNDA_OPERATE_BASE_URL, CredentialSource, Credentials, CredentialsError, EnvCredentials,
    ZEEBE_ADDRESS, ZEEBE_AUTHORIZATION_SERVER_URL, ZEEBE_CLIENT_ID, ZEEBE_CLIENT_SECRET,
};
pub use env::{EnvProvider, MockEnv, RealEnv};
pub use error::{ClientError, Result};
pub use oauth::{OAuthProvider, audience_url};
pub use query::{Key, Query, Resource, SearchResults, Sort, SortOrder, SortValue};
pub use types::{
    ChangeStatus, FlownodeInstance, FlownodeInstanceField, FlownodeInstanceFilter, Incident,
    IncidentField, IncidentFilter, ProcessDefinition, ProcessDefinitionField,
    ProcessDefinitionFilter, ProcessInstance, ProcessInstanceField, ProcessInstanceFilter,
    Variable, VariableField, VariableFilter,
};
