//! Pluggable layout validation strategies
//!
//! Separates filesystem validation (for CLI use) from schema validation (for library use).

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};
use crate::layout::ProjectLayout;

/// Trait for pluggable layout validation strategies
pub trait ConfigValidator {
    fn validate(&self, layout: &ProjectLayout) -> Result<()>;
}

/// Schema-only validation (no filesystem checks)
///
/// # Example
///
/// ```
/// use crxpack_config::{ConfigValidator, ProjectLayout, SchemaValidator};
///
/// SchemaValidator.validate(&ProjectLayout::default()).unwrap();
/// ```
pub struct SchemaValidator;

impl ConfigValidator for SchemaValidator {
    fn validate(&self, layout: &ProjectLayout) -> Result<()> {
        for (field, ext) in [
            ("source_extension", &layout.source_extension),
            ("script_extension", &layout.script_extension),
        ] {
            if ext.trim().is_empty() || ext.starts_with('.') {
                return Err(ConfigError::SchemaValidation {
                    message: format!("{field} must be a bare extension, got '{ext}'"),
                    hint: Some("Write extensions without the leading dot, e.g. \"ts\"".to_string()),
                });
            }
        }

        if layout.loader.trim().is_empty() {
            return Err(ConfigError::SchemaValidation {
                message: "loader cannot be empty".to_string(),
                hint: Some("Set loader to the bundler loader for your sources".to_string()),
            });
        }

        if layout.entries.is_empty() {
            return Err(ConfigError::SchemaValidation {
                message: "no fixed entries specified".to_string(),
                hint: Some("Remove the 'entries' key to use the default extension entries".to_string()),
            });
        }

        let mut seen = HashSet::new();
        for fixed in &layout.entries {
            if !fixed.bundle.ends_with(".js") {
                return Err(ConfigError::SchemaValidation {
                    message: format!("bundle name '{}' must end with .js", fixed.bundle),
                    hint: None,
                });
            }
            if !seen.insert(fixed.bundle.as_str()) {
                return Err(ConfigError::SchemaValidation {
                    message: format!("bundle name '{}' is used more than once", fixed.bundle),
                    hint: Some("Every fixed entry needs its own bundle name".to_string()),
                });
            }
        }

        Ok(())
    }
}

/// Filesystem validator (for CLI use)
///
/// Validates that every fixed entry exists on disk.
pub struct FsValidator {
    root: PathBuf,
}

impl FsValidator {
    /// Create a new filesystem validator with a root directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl ConfigValidator for FsValidator {
    fn validate(&self, layout: &ProjectLayout) -> Result<()> {
        SchemaValidator.validate(layout)?;

        for fixed in &layout.entries {
            let path = self.root.join(&fixed.entry);
            if !path.exists() {
                return Err(ConfigError::EntryNotFound { path });
            }
        }

        Ok(())
    }
}

/// Convenience function for schema-only validation
pub fn validate_schema(layout: &ProjectLayout) -> Result<()> {
    SchemaValidator.validate(layout)
}

/// Convenience function for filesystem validation against the layout's own root
pub fn validate_fs(layout: &ProjectLayout) -> Result<()> {
    FsValidator::new(&layout.root).validate(layout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::FixedEntry;

    #[test]
    fn schema_validator_accepts_default_layout() {
        assert!(validate_schema(&ProjectLayout::default()).is_ok());
    }

    #[test]
    fn schema_validator_rejects_dotted_extension() {
        let layout = ProjectLayout {
            source_extension: ".ts".to_string(),
            ..ProjectLayout::default()
        };
        assert!(matches!(
            validate_schema(&layout).unwrap_err(),
            ConfigError::SchemaValidation { .. }
        ));
    }

    #[test]
    fn schema_validator_rejects_empty_entries() {
        let layout = ProjectLayout {
            entries: vec![],
            ..ProjectLayout::default()
        };
        assert!(validate_schema(&layout).is_err());
    }

    #[test]
    fn schema_validator_rejects_duplicate_bundles() {
        let layout = ProjectLayout {
            entries: vec![
                FixedEntry::new("a.ts", "popup.js"),
                FixedEntry::new("b.ts", "popup.js"),
            ],
            ..ProjectLayout::default()
        };
        let err = validate_schema(&layout).unwrap_err();
        assert!(err.to_string().contains("more than once"));
    }

    #[test]
    fn schema_validator_rejects_non_js_bundle() {
        let layout = ProjectLayout {
            entries: vec![FixedEntry::new("a.ts", "popup.ts")],
            ..ProjectLayout::default()
        };
        assert!(validate_schema(&layout).is_err());
    }

    #[test]
    fn fs_validator_reports_missing_entry() {
        let dir = tempfile::TempDir::new().unwrap();
        let layout = ProjectLayout::rooted(dir.path());
        let err = validate_fs(&layout).unwrap_err();
        match err {
            ConfigError::EntryNotFound { path } => {
                assert!(path.ends_with("ts/Chrome/ChromeContentScriptStarter.ts"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
