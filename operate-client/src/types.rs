//! Operate resource types.
//!
//! Each entity comes with a `*Filter` (the same fields, all optional, used for
//! exact-match search constraints) and a `*Field` enum naming the fields a
//! search can sort on. Timestamps are kept as the server's text
//! (`yyyy-MM-dd'T'HH:mm:ss.SSSZZ`).

use crate::query::{Key, Resource};
use serde::{Deserialize, Serialize};

/// A deployed BPMN process definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessDefinition {
    /// Unique key.
    pub key: Key,
    /// Process name.
    pub name: String,
    /// Deployment version.
    pub version: i32,
    /// BPMN process id.
    pub bpmn_process_id: String,
}

/// Filter for [`ProcessDefinition`] searches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessDefinitionFilter {
    /// Exact key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<Key>,
    /// Exact name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Deployment version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<i32>,
    /// BPMN process id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bpmn_process_id: Option<String>,
}

/// Sortable [`ProcessDefinition`] fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ProcessDefinitionField {
    Key,
    Name,
    Version,
    BpmnProcessId,
}

impl Resource for ProcessDefinition {
    type Filter = ProcessDefinitionFilter;
    type Field = ProcessDefinitionField;
    const PATH: &'static str = "process-definitions";

    fn key(&self) -> Key {
        self.key
    }
}

/// A running or finished process instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessInstance {
    /// Unique key.
    pub key: Key,
    /// Version of the definition this instance runs.
    pub process_version: i32,
    /// BPMN process id.
    pub bpmn_process_id: String,
    /// Key of the parent instance, for called processes.
    #[serde(default)]
    pub parent_key: Option<Key>,
    /// Start timestamp.
    pub start_date: String,
    /// End timestamp; absent while the instance is running.
    #[serde(default)]
    pub end_date: Option<String>,
    /// Instance state, e.g. `ACTIVE`, `COMPLETED`, `CANCELED`.
    pub state: String,
    /// Key of the process definition.
    pub process_definition_key: Key,
}

/// Filter for [`ProcessInstance`] searches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessInstanceFilter {
    /// Exact key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<Key>,
    /// Version of the process definition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process_version: Option<i32>,
    /// BPMN process id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bpmn_process_id: Option<String>,
    /// Key of the parent process instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_key: Option<Key>,
    /// Start timestamp, in the server's format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    /// End timestamp, in the server's format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    /// State, e.g. `ACTIVE`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Key of the process definition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process_definition_key: Option<Key>,
}

/// Sortable [`ProcessInstance`] fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ProcessInstanceField {
    Key,
    ProcessVersion,
    BpmnProcessId,
    ParentKey,
    StartDate,
    EndDate,
    State,
    ProcessDefinitionKey,
}

impl Resource for ProcessInstance {
    type Filter = ProcessInstanceFilter;
    type Field = ProcessInstanceField;
    const PATH: &'static str = "process-instances";

    fn key(&self) -> Key {
        self.key
    }
}

/// An incident raised while executing a process instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Incident {
    /// Unique key.
    pub key: Key,
    /// Key of the process definition.
    pub process_definition_key: Key,
    /// Key of the affected process instance.
    pub process_instance_key: Key,
    /// Incident type, e.g. `JOB_NO_RETRIES`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Error message.
    pub message: String,
    /// Creation timestamp.
    pub creation_time: String,
    /// Incident state, e.g. `ACTIVE`, `RESOLVED`.
    pub state: String,
}

/// Filter for [`Incident`] searches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IncidentFilter {
    /// Exact key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<Key>,
    /// Key of the process definition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process_definition_key: Option<Key>,
    /// Key of the process instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process_instance_key: Option<Key>,
    /// Type, sent as `type`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Exact error message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Creation timestamp, in the server's format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<String>,
    /// State, e.g. `ACTIVE`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

/// Sortable [`Incident`] fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum IncidentField {
    Key,
    ProcessDefinitionKey,
    ProcessInstanceKey,
    #[serde(rename = "type")]
    Kind,
    Message,
    CreationTime,
    State,
}

impl Resource for Incident {
    type Filter = IncidentFilter;
    type Field = IncidentField;
    const PATH: &'static str = "incidents";

    fn key(&self) -> Key {
        self.key
    }
}

/// Execution of a single BPMN element within a process instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlownodeInstance {
    /// Unique key.
    pub key: Key,
    /// Key of the owning process instance.
    pub process_instance_key: Key,
    /// Start timestamp.
    pub start_date: String,
    /// End timestamp; absent while the element is active.
    #[serde(default)]
    pub end_date: Option<String>,
    /// Key of the associated incident, if any.
    #[serde(default)]
    pub incident_key: Option<Key>,
    /// BPMN element type, e.g. `SERVICE_TASK`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Element state.
    pub state: String,
    /// Whether an incident is attached.
    pub incident: bool,
}

/// Filter for [`FlownodeInstance`] searches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlownodeInstanceFilter {
    /// Exact key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<Key>,
    /// Key of the process instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process_instance_key: Option<Key>,
    /// Start timestamp, in the server's format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    /// End timestamp, in the server's format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    /// Key of the incident raised at this node.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incident_key: Option<Key>,
    /// Type, sent as `type`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// State, e.g. `ACTIVE`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Whether an incident is open at this node.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incident: Option<bool>,
}

/// Sortable [`FlownodeInstance`] fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FlownodeInstanceField {
    Key,
    ProcessInstanceKey,
    StartDate,
    EndDate,
    IncidentKey,
    #[serde(rename = "type")]
    Kind,
    State,
    Incident,
}

impl Resource for FlownodeInstance {
    type Filter = FlownodeInstanceFilter;
    type Field = FlownodeInstanceField;
    const PATH: &'static str = "flownodes";

    fn key(&self) -> Key {
        self.key
    }
}

/// A process variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variable {
    /// Unique key.
    pub key: Key,
    /// Key of the owning process instance.
    pub process_instance_key: Key,
    /// Key of the scope (instance or element) the variable is defined in.
    pub scope_key: Key,
    /// Variable name.
    pub name: String,
    /// JSON-encoded value. Truncated in search results, complete when fetched by key.
    pub value: String,
    /// Whether `value` was truncated.
    pub truncated: bool,
}

/// Filter for [`Variable`] searches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableFilter {
    /// Exact key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<Key>,
    /// Key of the process instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process_instance_key: Option<Key>,
    /// Key of the scope the variable belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope_key: Option<Key>,
    /// Exact name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Serialized JSON value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Whether the stored value was truncated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub truncated: Option<bool>,
}

/// Sortable [`Variable`] fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum VariableField {
    Key,
    ProcessInstanceKey,
    ScopeKey,
    Name,
    Value,
    Truncated,
}

impl Resource for Variable {
    type Filter = VariableFilter;
    type Field = VariableField;
    const PATH: &'static str = "variables";

    fn key(&self) -> Key {
        self.key
    }
}

/// Outcome of a mutating operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeStatus {
    /// What was changed.
    pub message: String,
    /// How many items were deleted.
    pub deleted: i64,
}
