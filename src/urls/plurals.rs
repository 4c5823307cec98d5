//! Pluralization table for URL path segments.
//!
//! # Responsibilities
//! - Map singular resource type names to their URL-path plural form
//! - Apply configured overrides (e.g. `person` → `people`)
//!
//! # Design Decisions
//! - Irregular plurals come from configuration, never from inflection rules
//! - Default plural is the singular plus `"s"`; no other heuristics

use std::collections::HashMap;

/// Configured singular → plural overrides with a `+ "s"` fallback.
#[derive(Debug, Clone, Default)]
pub struct PluralTable {
    overrides: HashMap<String, String>,
}

impl PluralTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an irregular plural.
    pub fn insert(&mut self, singular: impl Into<String>, plural: impl Into<String>) {
        self.overrides.insert(singular.into(), plural.into());
    }

    /// Plural form of a type name: the registered override, or singular + "s".
    pub fn pluralize(&self, singular: &str) -> String {
        match self.overrides.get(singular) {
            Some(plural) => plural.clone(),
            None => format!("{}s", singular),
        }
    }
}

impl From<HashMap<String, String>> for PluralTable {
    fn from(overrides: HashMap<String, String>) -> Self {
        Self { overrides }
    }
}
