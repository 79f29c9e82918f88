//! Incident operations.

use crate::client::Client;
use crate::error::Result;
use crate::query::{Key, Query, SearchResults};
use crate::types::Incident;

impl Client {
    /// Search incidents.
    ///
    /// `None` sends an empty query.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use operate_client::{Client, Incident, IncidentField, IncidentFilter, Query, SortOrder};
    /// # async fn example(client: Client) -> Result<(), Box<dyn std::error::Error>> {
    /// let query = Query::<Incident>::new()
    ///     .filter(IncidentFilter {
    ///         state: Some("ACTIVE".into()),
    ///         ..Default::default()
    ///     })
    ///     .sort(IncidentField::CreationTime, SortOrder::Asc);
    /// let incidents = client.search_incidents(Some(&query)).await?;
    /// for incident in incidents.items {
    ///     println!("{}: {}", incident.kind, incident.message);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn search_incidents(
        &self,
        query: Option<&Query<Incident>>,
    ) -> Result<SearchResults<Incident>> {
        match query {
            Some(query) => self.search(query).await,
            None => self.search(&Query::new()).await,
        }
    }

    /// Get an incident by key.
    ///
    /// # Errors
    ///
    /// Returns a 404 [`ClientError::Api`](crate::ClientError::Api) if the
    /// incident does not exist.
    pub async fn get_incident(&self, key: Key) -> Result<Incident> {
        self.fetch(key).await
    }
}
