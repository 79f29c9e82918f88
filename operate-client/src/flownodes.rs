//! Flow node instance operations.

use crate::client::Client;
use crate::error::Result;
use crate::query::{Key, Query, SearchResults};
use crate::types::FlownodeInstance;

impl Client {
    /// Search flow node instances.
    ///
    /// Unlike definition, instance and incident search, a query is required.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use operate_client::{Client, FlownodeInstance, FlownodeInstanceFilter, Query};
    /// # async fn example(client: Client) -> Result<(), Box<dyn std::error::Error>> {
    /// let query = Query::<FlownodeInstance>::new().filter(FlownodeInstanceFilter {
    ///     process_instance_key: Some(2251799819847322),
    ///     ..Default::default()
    /// });
    /// let nodes = client.search_flownode_instances(&query).await?;
    /// for node in nodes.items {
    ///     println!("{} {}", node.kind, node.state);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn search_flownode_instances(
        &self,
        query: &Query<FlownodeInstance>,
    ) -> Result<SearchResults<FlownodeInstance>> {
        self.search(query).await
    }

    /// Get a flow node instance by key.
    ///
    /// # Errors
    ///
    /// Returns a 404 [`ClientError::Api`](crate::ClientError::Api) if the
    /// flow node instance does not exist.
    pub async fn get_flownode_instance(&self, key: Key) -> Result<FlownodeInstance> {
        self.fetch(key).await
    }
}
