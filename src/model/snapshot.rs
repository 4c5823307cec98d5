//! Record snapshots handed to the adapter by the host framework.
//!
//! # Responsibilities
//! - Carry everything the adapter needs to shape one request: type name,
//!   optional id, attribute values, to-one relationship values
//! - Stay read-only: the adapter never mutates host records
//!
//! # Design Decisions
//! - Attributes are raw JSON values; the host owns typing and coercion
//! - To-many relationships are not part of a snapshot — they are fetched
//!   through the nested relationship URL, never written inline

use crate::model::types::{RecordId, ResourceType};
use serde_json::{Map, Value};

/// A to-one relationship value on a snapshot.
///
/// `related_id` is `None` when the host has not assigned the related record
/// yet (or the related record is itself unsaved).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BelongsTo {
    pub key: String,
    pub related_type: ResourceType,
    pub related_id: Option<RecordId>,
}

/// Read-only view of a single host record at the moment of an operation.
#[derive(Debug, Clone)]
pub struct Snapshot {
    resource_type: ResourceType,
    id: Option<RecordId>,
    attributes: Map<String, Value>,
    belongs_to: Vec<BelongsTo>,
}

impl Snapshot {
    pub fn new(resource_type: impl Into<ResourceType>) -> Self {
        Self {
            resource_type: resource_type.into(),
            id: None,
            attributes: Map::new(),
            belongs_to: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<RecordId>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Declare a to-one relationship value. Declaration order matters: for a
    /// create, the first relationship with a present id decides URL nesting.
    pub fn belongs_to(
        mut self,
        key: impl Into<String>,
        related_type: impl Into<ResourceType>,
        related_id: Option<RecordId>,
    ) -> Self {
        self.belongs_to.push(BelongsTo {
            key: key.into(),
            related_type: related_type.into(),
            related_id,
        });
        self
    }

    pub fn resource_type(&self) -> &ResourceType {
        &self.resource_type
    }

    pub fn id(&self) -> Option<RecordId> {
        self.id
    }

    pub fn attributes(&self) -> &Map<String, Value> {
        &self.attributes
    }

    pub fn relationships(&self) -> &[BelongsTo] {
        &self.belongs_to
    }

    /// First to-one relationship with a saved related record, if any.
    pub fn parent(&self) -> Option<(&BelongsTo, RecordId)> {
        self.belongs_to
            .iter()
            .find_map(|rel| rel.related_id.map(|id| (rel, id)))
    }
}
