//! Request body serialization.
//!
//! # Responsibilities
//! - Flatten a snapshot into the attribute hash the backend expects
//! - Serialize to-one relationships as the related record's id
//! - Add the record's own id for updates
//!
//! # Design Decisions
//! - Foreign keys are rendered as decimal strings (the form the backend's
//!   serializers accept for writable primary-key fields)
//! - Unassigned to-one relationships are omitted, not sent as null
//! - The record's own id never rides in the attribute map; updates add it
//!   explicitly as a number

use crate::model::{RecordId, Snapshot};
use serde_json::{Map, Value};

/// Body for a create: attributes plus to-one foreign keys.
pub fn serialize(snapshot: &Snapshot) -> Map<String, Value> {
    let mut body = Map::new();

    for (name, value) in snapshot.attributes() {
        if name == "id" {
            continue;
        }
        body.insert(name.clone(), value.clone());
    }

    for rel in snapshot.relationships() {
        if let Some(related_id) = rel.related_id {
            body.insert(rel.key.clone(), Value::String(related_id.to_string()));
        }
    }

    body
}

/// Body for an update: the create body plus the record's id.
pub fn serialize_with_id(snapshot: &Snapshot, id: RecordId) -> Map<String, Value> {
    let mut body = serialize(snapshot);
    body.insert("id".to_string(), Value::from(id.0));
    body
}
