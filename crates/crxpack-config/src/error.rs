//! Error types for layout loading, entry discovery and validation.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    // Config file discovery/loading errors
    #[error("config not found")]
    NotFound,

    #[error("invalid config value for '{field}'{}", fmt_hint(.hint))]
    InvalidValue { field: String, hint: Option<String> },

    // Entry discovery errors
    #[error("invalid entry pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    // Filesystem validation errors (for CLI use)
    #[error("entry path not found: {}", .path.display())]
    EntryNotFound { path: PathBuf },

    // Schema validation errors (no filesystem checks)
    #[error("schema validation failed: {message}")]
    SchemaValidation {
        message: String,
        hint: Option<String>,
    },

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<glob::GlobError> for ConfigError {
    fn from(err: glob::GlobError) -> Self {
        ConfigError::Io(err.into_error())
    }
}

fn fmt_hint(hint: &Option<String>) -> String {
    hint.as_ref().map(|h| format!(": {h}")).unwrap_or_default()
}

impl ConfigError {
    /// Helpful hint attached to the error, if any
    pub fn hint(&self) -> Option<&str> {
        match self {
            ConfigError::InvalidValue { hint, .. } | ConfigError::SchemaValidation { hint, .. } => {
                hint.as_deref()
            }
            _ => None,
        }
    }
}
