//! Configuration loading from disk.

use crate::config::schema::AdapterConfig;
use crate::config::validation::{validate_config, ValidationError};
use std::fs;
use std::path::Path;

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<AdapterConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: AdapterConfig = toml::from_str(&content).map_err(ConfigError::Parse)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp_config(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("drf-adapter-{}-{}.toml", name, std::process::id()));
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_valid_config() {
        let path = write_temp_config(
            "valid",
            r#"
            namespace = "codecamp"

            [plurals]
            person = "people"
            "#,
        );

        let config = load_config(&path).unwrap();
        assert_eq!(config.namespace.as_deref(), Some("codecamp"));
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_invalid_config_fails_validation() {
        let path = write_temp_config("invalid", "[http]\ntimeout_secs = 0\n");

        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_config(Path::new("/nonexistent/drf-adapter.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
