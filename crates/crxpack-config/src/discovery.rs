//! File-based layout discovery for CLI use
//!
//! Handles finding and loading crxpack configuration files from the filesystem.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{ConfigError, Result};
use crate::layout::ProjectLayout;

/// Name of the dedicated config file
pub const CONFIG_FILE: &str = "crxpack.toml";

/// Field holding the layout inside package.json
pub const PACKAGE_JSON_FIELD: &str = "crxpack";

/// File-based configuration discovery
///
/// Searches for crxpack configuration files in the project root and loads them.
/// Library users can build a [`ProjectLayout`] directly instead.
///
/// # Example
///
/// ```no_run
/// use crxpack_config::ConfigDiscovery;
///
/// let discovery = ConfigDiscovery::new(".");
/// let layout = discovery.load_or_default().unwrap();
/// ```
pub struct ConfigDiscovery {
    root: PathBuf,
}

impl ConfigDiscovery {
    /// Create a new config discovery with a root directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Find a config file in the root directory
    ///
    /// Searches in this order:
    /// 1. TOML config: crxpack.toml
    /// 2. package.json (crxpack field)
    pub fn find(&self) -> Option<PathBuf> {
        let toml_path = self.root.join(CONFIG_FILE);
        if toml_path.exists() {
            return Some(toml_path);
        }

        let pkg_path = self.root.join("package.json");
        if pkg_path.exists() {
            if let Ok(content) = fs::read_to_string(&pkg_path) {
                if let Ok(parsed) = serde_json::from_str::<Value>(&content) {
                    if parsed
                        .get(PACKAGE_JSON_FIELD)
                        .is_some_and(|field| !field.is_null())
                    {
                        return Some(pkg_path);
                    }
                }
            }
        }

        None
    }

    /// Load the layout from the discovered file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if no config file is found.
    pub fn load(&self) -> Result<ProjectLayout> {
        let path = self.find().ok_or(ConfigError::NotFound)?;
        self.load_from(&path)
    }

    /// Load the layout, or the default layout rooted here when no file exists
    pub fn load_or_default(&self) -> Result<ProjectLayout> {
        match self.load() {
            Err(ConfigError::NotFound) => {
                tracing::debug!(root = %self.root.display(), "no config file, using default layout");
                Ok(ProjectLayout::rooted(&self.root))
            }
            other => other,
        }
    }

    /// Load the layout from a specific file path
    pub fn load_from(&self, path: &Path) -> Result<ProjectLayout> {
        tracing::debug!(path = %path.display(), "loading layout");

        let value = if path.file_name() == Some(std::ffi::OsStr::new("package.json")) {
            self.read_package_json(path)?
        } else {
            read_toml(path)?
        };

        Ok(ProjectLayout::from_value(value)?.rebase(&self.root))
    }

    fn read_package_json(&self, path: &Path) -> Result<Value> {
        let content = fs::read_to_string(path)?;

        let mut parsed: Value =
            serde_json::from_str(&content).map_err(|e| ConfigError::InvalidValue {
                field: "package.json".to_string(),
                hint: Some(format!("Invalid JSON: {e}")),
            })?;

        let layout = parsed
            .get_mut(PACKAGE_JSON_FIELD)
            .map(Value::take)
            .ok_or_else(|| ConfigError::InvalidValue {
                field: PACKAGE_JSON_FIELD.to_string(),
                hint: Some("Add a 'crxpack' field to your package.json".to_string()),
            })?;

        if layout.is_null() {
            return Err(ConfigError::InvalidValue {
                field: PACKAGE_JSON_FIELD.to_string(),
                hint: Some("The 'crxpack' field cannot be null".to_string()),
            });
        }

        Ok(layout)
    }
}

fn read_toml(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path)?;

    let toml_val: toml::Value = toml::from_str(&content).map_err(|e| ConfigError::InvalidValue {
        field: "toml".to_string(),
        hint: Some(format!("Invalid TOML syntax: {e}")),
    })?;

    serde_json::to_value(toml_val).map_err(|e| ConfigError::InvalidValue {
        field: "toml".to_string(),
        hint: Some(format!("TOML to JSON conversion failed: {e}")),
    })
}
