//! Process instance operations.

use crate::client::Client;
use crate::error::Result;
use crate::query::{Key, Query, SearchResults};
use crate::types::{ChangeStatus, ProcessInstance};

impl Client {
    /// Search process instances.
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
    /// # use operate_client::{Client, ProcessInstance, ProcessInstanceFilter, Query};
    /// # async fn example(client: Client) -> Result<(), Box<dyn std::error::Error>> {
    /// let query = Query::<ProcessInstance>::new()
    ///     .filter(ProcessInstanceFilter {
    ///         state: Some("ACTIVE".into()),
    ///         ..Default::default()
    ///     })
    ///     .size(50);
    /// let instances = client.search_process_instances(Some(&query)).await?;
    /// println!("Found {} instances", instances.total);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn search_process_instances(
        &self,
        query: Option<&Query<ProcessInstance>>,
    ) -> Result<SearchResults<ProcessInstance>> {
        match query {
            Some(query) => self.search(query).await,
            None => self.search(&Query::new()).await,
        }
    }

    /// Get a process instance by key.
    ///
    /// # Errors
    ///
    /// Returns a 404 [`ClientError::Api`](crate::ClientError::Api) if the
    /// instance does not exist.
    pub async fn get_process_instance(&self, key: Key) -> Result<ProcessInstance> {
        self.fetch(key).await
    }

    /// Delete a finished process instance and its dependent data.
    ///
    /// # Errors
    ///
    /// Returns an error if the instance does not exist, is still running,
    /// or the request fails.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use operate_client::Client;
    /// # async fn example(client: Client) -> Result<(), Box<dyn std::error::Error>> {
    /// let status = client.delete_process_instance(2251799819847322).await?;
    /// println!("{} ({} deleted)", status.message, status.deleted);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn delete_process_instance(&self, key: Key) -> Result<ChangeStatus> {
        let path = format!("process-instances/{}", key);
        let response = self.delete(&path).await?;
        self.handle_response(response).await
    }
}
