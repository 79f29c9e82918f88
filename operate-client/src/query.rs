//! Search request and response envelopes shared by all resources.

use serde::de::{DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Entity keys are 64-bit; they exceed the 32-bit range in practice.
pub type Key = i64;

/// A searchable Operate resource.
///
/// Ties an entity to its exact-match filter, its sortable fields and
/// the REST path segment it lives under.
pub trait Resource: DeserializeOwned + Clone + fmt::Debug + Send + 'static {
    /// Partial record of the entity: same fields, all optional.
    type Filter: Serialize + Default + Clone + fmt::Debug + PartialEq + Send + Sync;
    /// Field names usable in a sort clause.
    type Field: Serialize + Copy + fmt::Debug + PartialEq + Send + Sync;

    /// Path segment below the API prefix, e.g. `process-instances`.
    const PATH: &'static str;

    /// The entity's key.
    fn key(&self) -> Key;
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortOrder {
    /// Ascending.
    Asc,
    /// Descending.
    Desc,
}

/// A single sort clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Sort<F> {
    /// Field to sort on.
    pub field: F,
    /// Direction.
    pub order: SortOrder,
}

/// One element of a pagination cursor.
///
/// Cursor values come from [`SearchResults::sort_values`] and are only ever
/// echoed back in [`Query::search_after`]. Integers are kept as `i64` so keys
/// survive the round trip exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SortValue {
    /// Integer value (keys, counters).
    Integer(i64),
    /// Non-integer number.
    Float(f64),
    /// Text value.
    Text(String),
    /// Boolean value.
    Bool(bool),
    /// JSON `null`.
    Null,
}

/// Search request for resource `T`.
///
/// Every part is optional; an empty query serializes to `{}` and matches
/// everything with the server's default page size.
///
/// # Example
///
/// ```
/// use operate_client::{ProcessInstance, ProcessInstanceField, ProcessInstanceFilter, Query, SortOrder};
///
/// let query = Query::<ProcessInstance>::new()
///     .filter(ProcessInstanceFilter {
///         process_version: Some(1),
///         ..Default::default()
///     })
///     .size(50)
///     .sort(ProcessInstanceField::BpmnProcessId, SortOrder::Asc);
///
/// assert_eq!(
///     serde_json::to_value(&query).unwrap(),
///     serde_json::json!({
///         "filter": { "processVersion": 1 },
///         "size": 50,
///         "sort": [{ "field": "bpmnProcessId", "order": "ASC" }]
///     })
/// );
/// ```
#[derive(Serialize)]
#[serde(rename_all = "camelCase", bound = "")]
pub struct Query<T: Resource> {
    /// Exact-match constraints.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<T::Filter>,
    /// Page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    /// Single sort clause; the API accepts exactly one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<[Sort<T::Field>; 1]>,
    /// Cursor from a previous page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_after: Option<Vec<SortValue>>,
}

impl<T: Resource> Query<T> {
    /// An empty query.
    pub fn new() -> Self {
        Self {
            filter: None,
            size: None,
            sort: None,
            search_after: None,
        }
    }

    /// Set the filter.
    #[must_use]
    pub fn filter(mut self, filter: T::Filter) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Set the page size.
    #[must_use]
    pub fn size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    /// Set the sort clause, replacing any previous one.
    #[must_use]
    pub fn sort(mut self, field: T::Field, order: SortOrder) -> Self {
        self.sort = Some([Sort { field, order }]);
        self
    }

    /// Continue after the given cursor.
    #[must_use]
    pub fn search_after(mut self, cursor: Vec<SortValue>) -> Self {
        self.search_after = Some(cursor);
        self
    }

    /// Continue after the last item of `results`.
    ///
    /// Leaves the query unchanged when the page carried no cursor.
    #[must_use]
    pub fn after(self, results: &SearchResults<T>) -> Self {
        if results.sort_values.is_empty() {
            self
        } else {
            self.search_after(results.sort_values.clone())
        }
    }
}

impl<T: Resource> Default for Query<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Resource> Clone for Query<T> {
    fn clone(&self) -> Self {
        Self {
            filter: self.filter.clone(),
            size: self.size,
            sort: self.sort,
            search_after: self.search_after.clone(),
        }
    }
}

impl<T: Resource> fmt::Debug for Query<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Query")
            .field("filter", &self.filter)
            .field("size", &self.size)
            .field("sort", &self.sort)
            .field("search_after", &self.search_after)
            .finish()
    }
}

impl<T: Resource> PartialEq for Query<T> {
    fn eq(&self, other: &Self) -> bool {
        self.filter == other.filter
            && self.size == other.size
            && self.sort == other.sort
            && self.search_after == other.search_after
    }
}

/// One page of search results.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults<T> {
    /// Matching entities, in sort order.
    pub items: Vec<T>,
    /// Cursor of the last item; pass to [`Query::search_after`] for the next page.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub sort_values: Vec<SortValue>,
    /// Total number of matches, independent of page size.
    pub total: i64,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<SortValue>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<SortValue>>::deserialize(deserializer)?.unwrap_or_default())
}
