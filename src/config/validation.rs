//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check plural overrides are usable as path segments
//! - Validate value ranges (timeout > 0, base URL parses)
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: AdapterConfig → Result<(), Vec<ValidationError>>
//! - Runs before a config is accepted into the adapter

use crate::config::schema::AdapterConfig;
use std::fmt;
use url::Url;

/// A single semantic problem in a config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A plural override key or value is empty or not a single path segment.
    InvalidPlural { singular: String, reason: String },

    /// The base URL is not an absolute URL.
    InvalidBaseUrl { value: String },

    /// The request timeout is zero.
    ZeroTimeout,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::InvalidPlural { singular, reason } => {
                write!(f, "plural override for {:?}: {}", singular, reason)
            }
            ValidationError::InvalidBaseUrl { value } => {
                write!(f, "base_url {:?} is not an absolute URL", value)
            }
            ValidationError::ZeroTimeout => write!(f, "http.timeout_secs must be greater than 0"),
        }
    }
}

/// Validate a parsed config, collecting every problem found.
pub fn validate_config(config: &AdapterConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    for (singular, plural) in &config.plurals {
        if let Some(reason) = segment_problem(singular) {
            errors.push(ValidationError::InvalidPlural {
                singular: singular.clone(),
                reason: format!("key {}", reason),
            });
        }
        if let Some(reason) = segment_problem(plural) {
            errors.push(ValidationError::InvalidPlural {
                singular: singular.clone(),
                reason: format!("value {:?} {}", plural, reason),
            });
        }
    }

    if Url::parse(&config.http.base_url).is_err() {
        errors.push(ValidationError::InvalidBaseUrl {
            value: config.http.base_url.clone(),
        });
    }

    if config.http.timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Why a string cannot serve as one URL path segment, if it cannot.
fn segment_problem(segment: &str) -> Option<&'static str> {
    if segment.is_empty() {
        Some("is empty")
    } else if segment.contains('/') {
        Some("contains a slash")
    } else if segment.chars().any(char::is_whitespace) {
        Some("contains whitespace")
    } else {
        None
    }
}
