//! Operation → request mapping.
//!
//! # Responsibilities
//! - Map each adapter operation to its HTTP method, path, and body
//! - Decide flat vs owner-nested URLs for creates
//!
//! # Design Decisions
//! - A plan is host-relative and transport-agnostic; the transport joins
//!   it onto a base URL
//! - The only branch in the table: a create nests under a parent exactly
//!   when the snapshot carries a to-one relationship with a saved target

use crate::model::{RecordId, ResourceType, Snapshot};
use crate::request::serializer;
use crate::urls::UrlBuilder;
use http::Method;
use serde_json::Value;

/// A fully shaped request, ready for a transport to send.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestPlan {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

/// Applies the verb/URL/payload rule table.
#[derive(Debug, Clone)]
pub struct RequestPlanner {
    urls: UrlBuilder,
}

impl RequestPlanner {
    pub fn new(urls: UrlBuilder) -> Self {
        Self { urls }
    }

    /// POST to the collection, or to the owner-nested path when the new
    /// record points at a saved parent.
    pub fn create(&self, snapshot: &Snapshot) -> RequestPlan {
        let path = match snapshot.parent() {
            Some((rel, parent_id)) => {
                self.urls
                    .nested_create(&rel.key, parent_id, snapshot.resource_type())
            }
            None => self.urls.collection(snapshot.resource_type()),
        };

        RequestPlan {
            method: Method::POST,
            path,
            body: Some(Value::Object(serializer::serialize(snapshot))),
        }
    }

    /// PUT to the single-resource path; body is the create body plus id.
    pub fn update(&self, snapshot: &Snapshot, id: RecordId) -> RequestPlan {
        RequestPlan {
            method: Method::PUT,
            path: self.urls.resource(snapshot.resource_type(), id),
            body: Some(Value::Object(serializer::serialize_with_id(snapshot, id))),
        }
    }

    /// DELETE to the single-resource path; no body.
    pub fn delete(&self, resource_type: &ResourceType, id: RecordId) -> RequestPlan {
        RequestPlan {
            method: Method::DELETE,
            path: self.urls.resource(resource_type, id),
            body: None,
        }
    }

    /// GET a single resource.
    pub fn find_record(&self, resource_type: &ResourceType, id: RecordId) -> RequestPlan {
        RequestPlan {
            method: Method::GET,
            path: self.urls.resource(resource_type, id),
            body: None,
        }
    }

    /// GET the whole collection.
    pub fn find_all(&self, resource_type: &ResourceType) -> RequestPlan {
        RequestPlan {
            method: Method::GET,
            path: self.urls.collection(resource_type),
            body: None,
        }
    }

    /// GET a to-many relationship through its owner-nested path.
    pub fn find_many(
        &self,
        owner_type: &ResourceType,
        owner_id: RecordId,
        related_type: &ResourceType,
    ) -> RequestPlan {
        RequestPlan {
            method: Method::GET,
            path: self.urls.relationship(owner_type, owner_id, related_type),
            body: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::urls::PluralTable;
    use serde_json::json;

    fn planner() -> RequestPlanner {
        let mut plurals = PluralTable::new();
        plurals.insert("person", "people");
        RequestPlanner::new(UrlBuilder::new(plurals))
    }

    #[test]
    fn test_create_posts_to_collection() {
        let snapshot = Snapshot::new("role").attr("name", "Admin");
        let plan = planner().create(&snapshot);

        assert_eq!(plan.method, Method::POST);
        assert_eq!(plan.path, "/roles/");
        assert_eq!(plan.body, Some(json!({ "name": "Admin" })));
    }

    #[test]
    fn test_create_with_parent_nests_under_relationship_key() {
        let snapshot = Snapshot::new("task")
            .attr("name", "Todo")
            .belongs_to("owner", "person", Some(RecordId(2)));
        let plan = planner().create(&snapshot);

        assert_eq!(plan.method, Method::POST);
        assert_eq!(plan.path, "/owners/2/tasks/");
        assert_eq!(plan.body, Some(json!({ "name": "Todo", "owner": "2" })));
    }

    #[test]
    fn test_create_with_unsaved_parent_stays_flat() {
        let snapshot = Snapshot::new("task")
            .attr("name", "Todo")
            .belongs_to("owner", "person", None);
        let plan = planner().create(&snapshot);

        assert_eq!(plan.path, "/tasks/");
    }

    #[test]
    fn test_update_puts_to_resource() {
        let snapshot = Snapshot::new("role").attr("name", "Developer");
        let plan = planner().update(&snapshot, RecordId(1));

        assert_eq!(plan.method, Method::PUT);
        assert_eq!(plan.path, "/roles/1/");
        assert_eq!(plan.body, Some(json!({ "name": "Developer", "id": 1 })));
    }

    #[test]
    fn test_delete_has_no_body() {
        let plan = planner().delete(&"role".into(), RecordId(1));

        assert_eq!(plan.method, Method::DELETE);
        assert_eq!(plan.path, "/roles/1/");
        assert_eq!(plan.body, None);
    }

    #[test]
    fn test_find_record_and_find_all() {
        let p = planner();

        let one = p.find_record(&"person".into(), RecordId(1));
        assert_eq!(one.method, Method::GET);
        assert_eq!(one.path, "/people/1/");

        let all = p.find_all(&"person".into());
        assert_eq!(all.method, Method::GET);
        assert_eq!(all.path, "/people/");
    }

    #[test]
    fn test_find_many_uses_owner_type_plural() {
        let plan = planner().find_many(&"person".into(), RecordId(9), &"task".into());
        assert_eq!(plan.method, Method::GET);
        assert_eq!(plan.path, "/people/9/tasks/");
    }
}
