//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("Data file `{0}` is not valid JSON")]
    Json(PathBuf, #[source] serde_json::Error),

    #[error("Config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_config_error_display() {
        let io_err = ConfigError::Io(
            PathBuf::from("site.toml"),
            Error::new(ErrorKind::NotFound, "file not found"),
        );
        let display = format!("{io_err}");
        assert!(display.contains("IO error"));
        assert!(display.contains("site.toml"));

        let validation_err = ConfigError::Validation("[build.tips.locale] is empty".to_string());
        assert!(format!("{validation_err}").contains("[build.tips.locale] is empty"));
    }

    #[test]
    fn test_json_error_display() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ConfigError::Json(PathBuf::from("src/_data/authors.json"), source);
        assert!(format!("{err}").contains("authors.json"));
    }
}
