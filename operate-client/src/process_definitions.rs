//! Process definition operations.

use crate::client::{Accept, Client};
use crate::error::Result;
use crate::query::{Key, Query, SearchResults};
use crate::types::ProcessDefinition;

impl Client {
    /// Search process definitions.
    ///
    /// `None` sends an empty query, matching every definition with the
    /// server's default page size.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use operate_client::{Client, ProcessDefinition, ProcessDefinitionField, Query, SortOrder};
    /// # async fn example(client: Client) -> Result<(), Box<dyn std::error::Error>> {
    /// let query = Query::<ProcessDefinition>::new()
    ///     .size(50)
    ///     .sort(ProcessDefinitionField::BpmnProcessId, SortOrder::Asc);
    /// let definitions = client.search_process_definitions(Some(&query)).await?;
    /// for definition in definitions.items {
    ///     println!("{} v{}", definition.bpmn_process_id, definition.version);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn search_process_definitions(
        &self,
        query: Option<&Query<ProcessDefinition>>,
    ) -> Result<SearchResults<ProcessDefinition>> {
        match query {
            Some(query) => self.search(query).await,
            None => self.search(&Query::new()).await,
        }
    }

    /// Get a process definition by key.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Api`](crate::ClientError::Api) with status 404 if
    /// no definition has this key.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use operate_client::Client;
    /// # async fn example(client: Client) -> Result<(), Box<dyn std::error::Error>> {
    /// let definition = client.get_process_definition(2251799817140074).await?;
    /// println!("{}", definition.name);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_process_definition(&self, key: Key) -> Result<ProcessDefinition> {
        self.fetch(key).await
    }

    /// Get the BPMN XML of a process definition.
    ///
    /// The body is returned verbatim; it is never parsed as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the definition does not exist or the request fails.
    pub async fn get_process_definition_xml(&self, key: Key) -> Result<String> {
        let path = format!("process-definitions/{}/xml", key);
        let response = self.get(&path, Accept::Any).await?;
        self.handle_text_response(response).await
    }
}
