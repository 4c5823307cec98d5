//! Configuration schema definitions.
//!
//! This module defines the adapter configuration structure. All types
//! derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Root configuration for the adapter.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AdapterConfig {
    /// Optional namespace prefix prepended to every resource path
    /// (e.g. "api/v1"). Surrounding slashes are tolerated.
    pub namespace: Option<String>,

    /// Irregular plural overrides, singular → plural (e.g. person = "people").
    pub plurals: HashMap<String, String>,

    /// HTTP transport settings.
    pub http: HttpConfig,
}

/// HTTP transport configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Backend base URL (e.g. "http://localhost:8000").
    pub base_url: String,

    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout_secs: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config_parses_with_defaults() {
        let config: AdapterConfig = toml::from_str("").unwrap();
        assert_eq!(config.namespace, None);
        assert!(config.plurals.is_empty());
        assert_eq!(config.http.base_url, "http://localhost:8000");
        assert_eq!(config.http.timeout_secs, 30);
    }

    #[test]
    fn test_full_config_parses() {
        let config: AdapterConfig = toml::from_str(
            r#"
            namespace = "codecamp"

            [plurals]
            person = "people"

            [http]
            base_url = "https://api.example.com"
            timeout_secs = 10
            "#,
        )
        .unwrap();

        assert_eq!(config.namespace.as_deref(), Some("codecamp"));
        assert_eq!(
            config.plurals.get("person").map(String::as_str),
            Some("people")
        );
        assert_eq!(config.http.base_url, "https://api.example.com");
        assert_eq!(config.http.timeout_secs, 10);
    }
}
