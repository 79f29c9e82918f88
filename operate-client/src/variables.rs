//! Variable operations.

use crate::client::Client;
use crate::error::Result;
use crate::query::{Key, Query, SearchResults};
use crate::types::Variable;

impl Client {
    /// Search variables. A query is required.
    ///
    /// Values in the results are truncated when large; fetch a variable by
    /// key to get the complete value.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    pub async fn search_variables(&self, query: &Query<Variable>) -> Result<SearchResults<Variable>> {
        self.search(query).await
    }

    /// Get a variable by key, with its untruncated value.
    ///
    /// # Errors
    ///
    /// Returns a 404 [`ClientError::Api`](crate::ClientError::Api) if the
    /// variable does not exist.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use operate_client::Client;
    /// # async fn example(client: Client) -> Result<(), Box<dyn std::error::Error>> {
    /// let variable = client.get_variable(2251799819847330).await?;
    /// let value: serde_json::Value = serde_json::from_str(&variable.value)?;
    /// println!("{} = {}", variable.name, value);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_variable(&self, key: Key) -> Result<Variable> {
        self.fetch(key).await
    }
}
