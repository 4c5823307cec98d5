//! The adapter front: operations the host framework calls.
//!
//! # Data Flow
//! ```text
//! host operation (commit / find)
//!     → Snapshot / (type, id)
//!     → request planner (verb + path + body)
//!     → injected Transport
//!     → response payload parsed and returned to the host
//! ```
//!
//! # Design Decisions
//! - One outstanding request per operation; no batching or retry here
//! - Responses are parsed into `ResourcePayload` units keyed by id; merging
//!   them into live records stays with the host
//! - Record state transitions (saving, loaded, deleted) are the host's;
//!   the adapter only reports success or failure

use crate::config::schema::AdapterConfig;
use crate::model::{RecordId, ResourceType, Snapshot};
use crate::request::{RequestPlan, RequestPlanner};
use crate::transport::{Transport, TransportError};
use crate::urls::{PluralTable, UrlBuilder};
use serde_json::{Map, Value};
use thiserror::Error;

/// Errors surfaced to the host framework.
#[derive(Debug, Error)]
pub enum AdapterError {
    /// Update, delete, and find require a persisted record id.
    #[error("cannot {operation} a {resource_type} record without an id")]
    MissingId {
        operation: &'static str,
        resource_type: String,
    },

    /// The transport failed or the backend rejected the request.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The response body did not have the expected shape.
    #[error("unexpected response payload: {0}")]
    Payload(String),
}

/// Result type for adapter operations.
pub type AdapterResult<T> = Result<T, AdapterError>;

/// One parsed response record: the server-assigned id plus the remaining
/// attribute hash, ready for the host to merge into its records.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourcePayload {
    pub id: RecordId,
    pub attributes: Map<String, Value>,
}

impl ResourcePayload {
    /// Parse a single response object. The backend always includes the
    /// record's `id`; its absence is a payload error.
    fn from_value(value: Value) -> AdapterResult<Self> {
        let Value::Object(mut map) = value else {
            return Err(AdapterError::Payload(format!(
                "expected a JSON object, got {}",
                type_name(&value)
            )));
        };

        let id = match map.remove("id") {
            Some(Value::Number(n)) => n
                .as_u64()
                .map(RecordId)
                .ok_or_else(|| AdapterError::Payload(format!("non-integer id: {}", n)))?,
            Some(Value::String(s)) => s
                .parse::<u64>()
                .map(RecordId)
                .map_err(|_| AdapterError::Payload(format!("non-integer id: {:?}", s)))?,
            Some(other) => {
                return Err(AdapterError::Payload(format!(
                    "id must be an integer, got {}",
                    type_name(&other)
                )))
            }
            None => return Err(AdapterError::Payload("response object has no id".into())),
        };

        Ok(Self { id, attributes: map })
    }

    fn array_from_value(value: Value) -> AdapterResult<Vec<Self>> {
        let Value::Array(items) = value else {
            return Err(AdapterError::Payload(format!(
                "expected a JSON array, got {}",
                type_name(&value)
            )));
        };
        items.into_iter().map(Self::from_value).collect()
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// REST adapter speaking Django REST Framework conventions.
pub struct DjangoRestAdapter<T: Transport> {
    planner: RequestPlanner,
    transport: T,
}

impl<T: Transport> DjangoRestAdapter<T> {
    /// Compile the URL rules from config and bind the transport.
    pub fn new(config: &AdapterConfig, transport: T) -> Self {
        let mut urls = UrlBuilder::new(PluralTable::from(config.plurals.clone()));
        if let Some(namespace) = &config.namespace {
            urls = urls.with_namespace(namespace.clone());
        }
        Self {
            planner: RequestPlanner::new(urls),
            transport,
        }
    }

    /// POST the new record; returns the saved record with its assigned id.
    pub async fn create(&self, snapshot: &Snapshot) -> AdapterResult<ResourcePayload> {
        let plan = self.planner.create(snapshot);
        let body = self.dispatch(snapshot.resource_type(), plan).await?;
        ResourcePayload::from_value(body)
    }

    /// PUT the changed record; returns the updated record.
    pub async fn update(&self, snapshot: &Snapshot) -> AdapterResult<ResourcePayload> {
        let id = self.require_id(snapshot, "update")?;
        let plan = self.planner.update(snapshot, id);
        let body = self.dispatch(snapshot.resource_type(), plan).await?;
        ResourcePayload::from_value(body)
    }

    /// DELETE the record; any response body is ignored.
    pub async fn delete(&self, snapshot: &Snapshot) -> AdapterResult<()> {
        let id = self.require_id(snapshot, "delete")?;
        let plan = self.planner.delete(snapshot.resource_type(), id);
        self.dispatch(snapshot.resource_type(), plan).await?;
        Ok(())
    }

    /// GET a single record by id.
    pub async fn find_record(
        &self,
        resource_type: &ResourceType,
        id: RecordId,
    ) -> AdapterResult<ResourcePayload> {
        let plan = self.planner.find_record(resource_type, id);
        let body = self.dispatch(resource_type, plan).await?;
        ResourcePayload::from_value(body)
    }

    /// GET the whole collection.
    pub async fn find_all(&self, resource_type: &ResourceType) -> AdapterResult<Vec<ResourcePayload>> {
        let plan = self.planner.find_all(resource_type);
        let body = self.dispatch(resource_type, plan).await?;
        ResourcePayload::array_from_value(body)
    }

    /// GET a to-many (or many-to-many) relationship through its nested URL.
    /// The returned payloads carry the ids the host needs to fill its
    /// placeholder records.
    pub async fn find_many(
        &self,
        owner_type: &ResourceType,
        owner_id: RecordId,
        related_type: &ResourceType,
    ) -> AdapterResult<Vec<ResourcePayload>> {
        let plan = self.planner.find_many(owner_type, owner_id, related_type);
        let body = self.dispatch(related_type, plan).await?;
        ResourcePayload::array_from_value(body)
    }

    fn require_id(&self, snapshot: &Snapshot, operation: &'static str) -> AdapterResult<RecordId> {
        snapshot.id().ok_or_else(|| AdapterError::MissingId {
            operation,
            resource_type: snapshot.resource_type().to_string(),
        })
    }

    async fn dispatch(&self, resource_type: &ResourceType, plan: RequestPlan) -> AdapterResult<Value> {
        tracing::debug!(
            resource_type = %resource_type,
            method = %plan.method,
            path = %plan.path,
            "dispatching request"
        );
        let response = self.transport.send(plan).await?;
        Ok(response.body)
    }
}
