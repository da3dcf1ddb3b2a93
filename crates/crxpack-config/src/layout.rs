//! Project layout: where entries live and where bundles go.

use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ConfigError, Result};

/// A fixed target: an entry file and the bundle it produces
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedEntry {
    /// Entry file, relative to the project root
    pub entry: PathBuf,

    /// Output file name of the entry bundle
    pub bundle: String,
}

impl FixedEntry {
    pub fn new(entry: impl Into<PathBuf>, bundle: impl Into<String>) -> Self {
        Self {
            entry: entry.into(),
            bundle: bundle.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectLayout {
    /// Project root; relative entries and directories resolve against it
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Directory the bundler writes bundles into
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Directory scanned for custom scripts
    #[serde(default = "default_custom_dir")]
    pub custom_dir: PathBuf,

    /// Extension of source files, without the dot
    #[serde(default = "default_source_extension")]
    pub source_extension: String,

    /// Extension of plain scripts, without the dot
    #[serde(default = "default_script_extension")]
    pub script_extension: String,

    /// Dependency directory excluded from compilation
    #[serde(default = "default_vendor_dir")]
    pub vendor_dir: String,

    /// Loader that compiles source files
    #[serde(default = "default_loader")]
    pub loader: String,

    /// Content script, popup, background page and page script, in that order
    #[serde(default = "default_entries")]
    pub entries: Vec<FixedEntry>,
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("js")
}

fn default_custom_dir() -> PathBuf {
    PathBuf::from("ts/Custom")
}

fn default_source_extension() -> String {
    "ts".to_string()
}

fn default_script_extension() -> String {
    "js".to_string()
}

fn default_vendor_dir() -> String {
    "node_modules".to_string()
}

fn default_loader() -> String {
    "ts-loader".to_string()
}

fn default_entries() -> Vec<FixedEntry> {
    vec![
        FixedEntry::new("./ts/Chrome/ChromeContentScriptStarter.ts", "content-script.js"),
        FixedEntry::new("./ts/Chrome/ChromePopupStarter.ts", "popup.js"),
        FixedEntry::new("./ts/Chrome/ChromeBackgroundPageStarter.ts", "background-page.js"),
        FixedEntry::new("./ts/PageScript/PageScriptStarter.ts", "page-script.js"),
    ]
}

impl Default for ProjectLayout {
    fn default() -> Self {
        Self {
            root: default_root(),
            output_dir: default_output_dir(),
            custom_dir: default_custom_dir(),
            source_extension: default_source_extension(),
            script_extension: default_script_extension(),
            vendor_dir: default_vendor_dir(),
            loader: default_loader(),
            entries: default_entries(),
        }
    }
}

impl ProjectLayout {
    /// Default layout rooted at `root`
    pub fn rooted(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Create from serde_json::Value
    ///
    /// # Example
    ///
    /// ```
    /// use crxpack_config::ProjectLayout;
    /// use serde_json::json;
    /// use std::path::PathBuf;
    ///
    /// let layout = ProjectLayout::from_value(json!({ "output_dir": "dist" })).unwrap();
    /// assert_eq!(layout.output_dir, PathBuf::from("dist"));
    /// assert_eq!(layout.entries.len(), 4);
    /// ```
    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| ConfigError::InvalidValue {
            field: "layout".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// Convert to serde_json::Value
    pub fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::InvalidValue {
            field: "layout".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// Resolve a layout path against the root
    pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(path)
    }

    /// Absolute (root-joined) output directory
    pub fn output_path(&self) -> PathBuf {
        self.resolve(&self.output_dir)
    }

    /// Root-joined custom scripts directory
    pub fn custom_path(&self) -> PathBuf {
        self.resolve(&self.custom_dir)
    }

    /// Extensions tried when resolving imports: source first, then plain script
    pub fn resolve_extensions(&self) -> Vec<String> {
        vec![
            format!(".{}", self.source_extension),
            format!(".{}", self.script_extension),
        ]
    }

    /// Rebase a relative root onto `base`
    /// Anchor a relative root at `base`, dropping `.` components.
    pub fn rebase(mut self, base: &Path) -> Self {
        if self.root.is_relative() {
            let relative: PathBuf = self
                .root
                .components()
                .filter(|c| !matches!(c, Component::CurDir))
                .collect();
            self.root = if relative.as_os_str().is_empty() {
                base.to_path_buf()
            } else {
                base.join(relative)
            };
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults_match_extension_project() {
        let layout = ProjectLayout::default();
        let bundles: Vec<_> = layout.entries.iter().map(|e| e.bundle.as_str()).collect();
        assert_eq!(
            bundles,
            ["content-script.js", "popup.js", "background-page.js", "page-script.js"]
        );
        assert_eq!(layout.custom_dir, PathBuf::from("ts/Custom"));
        assert_eq!(layout.resolve_extensions(), vec![".ts", ".js"]);
    }

    #[test]
    fn partial_value_keeps_defaults() {
        let layout = ProjectLayout::from_value(json!({ "loader": "swc-loader" })).unwrap();
        assert_eq!(layout.loader, "swc-loader");
        assert_eq!(layout.vendor_dir, "node_modules");
        assert_eq!(layout.entries, ProjectLayout::default().entries);
    }

    #[test]
    fn invalid_value_is_reported() {
        let err = ProjectLayout::from_value(json!({ "entries": "popup.ts" })).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn paths_resolve_against_root() {
        let layout = ProjectLayout::rooted("/work/ext");
        assert_eq!(layout.output_path(), PathBuf::from("/work/ext/js"));
        assert_eq!(layout.custom_path(), PathBuf::from("/work/ext/ts/Custom"));
    }

    #[test]
    fn rebase_only_touches_relative_roots() {
        let relative = ProjectLayout::rooted("sub").rebase(Path::new("/base"));
        assert_eq!(relative.root, PathBuf::from("/base/sub"));

        let absolute = ProjectLayout::rooted("/abs").rebase(Path::new("/base"));
        assert_eq!(absolute.root, PathBuf::from("/abs"));
    }

    #[test]
    fn rebase_drops_current_dir_components() {
        let base = Path::new("/proj");
        let layout = ProjectLayout::default().rebase(base);
        assert_eq!(layout.root.as_os_str(), base.as_os_str());
        assert_eq!(layout.output_path().to_str(), Some("/proj/js"));

        let nested = ProjectLayout::rooted("./sub/./ext").rebase(base);
        assert_eq!(nested.root.to_str(), Some("/proj/sub/ext"));
    }
}
