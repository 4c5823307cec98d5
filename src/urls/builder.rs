//! URL path construction following Django REST Framework conventions.
//!
//! # Responsibilities
//! - Build collection, single-resource, and nested relationship paths
//! - Pluralize every path segment through the configured table
//! - Prepend the optional namespace prefix
//!
//! # Design Decisions
//! - Every produced path ends with a trailing slash (DRF routers 301
//!   redirect without it, and redirects drop request bodies)
//! - Paths are host-relative; joining onto a base URL is the transport's job
//! - Namespace is normalized once at construction; an empty or all-slash
//!   value behaves as unset

use crate::model::{RecordId, ResourceType};
use crate::urls::plurals::PluralTable;

/// Builds host-relative resource paths.
#[derive(Debug, Clone)]
pub struct UrlBuilder {
    plurals: PluralTable,
    namespace: Option<String>,
}

impl UrlBuilder {
    pub fn new(plurals: PluralTable) -> Self {
        Self {
            plurals,
            namespace: None,
        }
    }

    /// Set the global namespace prefix applied to every path.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        let trimmed = namespace.into().trim_matches('/').to_string();
        self.namespace = (!trimmed.is_empty()).then_some(trimmed);
        self
    }

    /// `/<plural>/`
    pub fn collection(&self, resource_type: &ResourceType) -> String {
        format!("{}/{}/", self.prefix(), self.pluralize(resource_type))
    }

    /// `/<plural>/<id>/`
    pub fn resource(&self, resource_type: &ResourceType, id: RecordId) -> String {
        format!("{}/{}/{}/", self.prefix(), self.pluralize(resource_type), id)
    }

    /// `/<owner-plural>/<owner-id>/<relation-plural>/`
    ///
    /// The path used to fetch a to-many (or many-to-many) relationship:
    /// the owner segment comes from the owner's type name, the relation
    /// segment from the related records' type name.
    pub fn relationship(
        &self,
        owner_type: &ResourceType,
        owner_id: RecordId,
        related_type: &ResourceType,
    ) -> String {
        format!(
            "{}/{}/{}/{}/",
            self.prefix(),
            self.pluralize(owner_type),
            owner_id,
            self.pluralize(related_type)
        )
    }

    /// `/<relationship-key-plural>/<parent-id>/<child-plural>/`
    ///
    /// The path for creating a record scoped under a parent. Unlike
    /// [`relationship`](Self::relationship), the owner segment is derived
    /// from the child's to-one relationship *key*, not the parent's type
    /// name (a `task` whose to-one is named `owner` posts to
    /// `/owners/<id>/tasks/`).
    pub fn nested_create(
        &self,
        parent_key: &str,
        parent_id: RecordId,
        child_type: &ResourceType,
    ) -> String {
        format!(
            "{}/{}/{}/{}/",
            self.prefix(),
            self.plurals.pluralize(parent_key),
            parent_id,
            self.pluralize(child_type)
        )
    }

    fn pluralize(&self, resource_type: &ResourceType) -> String {
        self.plurals.pluralize(resource_type.as_str())
    }

    fn prefix(&self) -> String {
        match &self.namespace {
            Some(ns) => format!("/{}", ns),
            None => String::new(),
        }
    }
}
