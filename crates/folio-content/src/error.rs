//! Error types for the folio content library.

use std::path::PathBuf;

use thiserror::Error;

use crate::schema::SchemaError;

/// Result type alias using `CoreError`.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors raised while configuring, reading, or validating content.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration loading or parsing error.
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A content file does not match its schema.
    #[error("Content error in {path}: {source}")]
    Content {
        path: PathBuf,
        #[source]
        source: SchemaError,
    },

    /// A content file is not valid YAML.
    #[error("YAML error in {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// File system I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Generic configuration crate error.
    #[error("Config crate error: {0}")]
    ConfigCrate(#[from] config::ConfigError),
}

impl CoreError {
    /// Create a new configuration error with a message.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    /// Create a new configuration error with source.
    pub fn config_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Attach a file path to a schema error.
    pub fn content(path: impl Into<PathBuf>, source: SchemaError) -> Self {
        Self::Content {
            path: path.into(),
            source,
        }
    }

    /// Attach a file path to a YAML decoding error.
    pub fn yaml(path: impl Into<PathBuf>, source: serde_yaml::Error) -> Self {
        Self::Yaml {
            path: path.into(),
            source,
        }
    }

    /// The schema error behind this failure, if any.
    pub fn schema_error(&self) -> Option<&SchemaError> {
        match self {
            Self::Content { source, .. } => Some(source),
            _ => None,
        }
    }
}
