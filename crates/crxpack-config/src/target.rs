//! Build-target descriptors handed to the external bundler.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::mode::{Devtool, Mode};
use crate::naming::{CHUNK_NAME_SEPARATOR, output_filename, split_chunk_name};
use crate::plugin::PluginSpec;

/// One bundle: a single entry file and everything needed to compile it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetDescriptor {
    /// Root module of the bundle
    pub entry: PathBuf,

    /// File name of the entry bundle, relative to `output.path`
    pub output_name: String,

    pub mode: Mode,

    pub devtool: Devtool,

    #[serde(default)]
    pub plugins: Vec<PluginSpec>,

    pub module: ModuleOptions,

    pub resolve: ResolveOptions,

    pub optimization: OptimizationOptions,

    pub output: OutputOptions,
}

impl TargetDescriptor {
    /// Whether a bundle analyzer plugin is attached
    pub fn analyzer_enabled(&self) -> bool {
        self.plugins
            .iter()
            .any(|plugin| matches!(plugin, PluginSpec::BundleAnalyzer(_)))
    }

    /// File name the bundler should use for `chunk_name` of this target
    pub fn chunk_filename(&self, chunk_name: &str) -> String {
        output_filename(chunk_name, &self.output.filename.main)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleOptions {
    pub rules: Vec<ModuleRule>,
}

/// Routes matching source files through a loader
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleRule {
    /// File extension the rule applies to, including the dot
    pub test: String,

    /// Loader that compiles matching files
    #[serde(rename = "use")]
    pub loader: String,

    /// Directory whose files are never compiled by this rule
    pub exclude: String,
}

impl ModuleRule {
    /// Whether `path` is compiled by this rule
    pub fn matches(&self, path: &str) -> bool {
        path.ends_with(&self.test)
            && !path
                .split(['/', '\\'])
                .any(|component| component == self.exclude)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolveOptions {
    /// Extensions tried, in order, when resolving extensionless imports
    pub extensions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationOptions {
    pub minimize: bool,
    pub split_chunks: SplitChunksOptions,
}

/// Which chunks take part in splitting; every target splits all of them
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChunkSelection {
    #[default]
    All,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitChunksOptions {
    pub chunks: ChunkSelection,

    /// Name template for merged chunks
    pub name: String,
}

impl SplitChunksOptions {
    /// Template with `[cacheGroup]` and `[chunks~]` placeholders
    pub fn name_template() -> String {
        format!("[cacheGroup]-[chunks{CHUNK_NAME_SEPARATOR}]")
    }

    /// Concrete name for a chunk merged from `chunk_names` under `cache_group_key`
    pub fn chunk_name<S: AsRef<str>>(&self, cache_group_key: &str, chunk_names: &[S]) -> String {
        split_chunk_name(cache_group_key, chunk_names)
    }
}

impl Default for SplitChunksOptions {
    fn default() -> Self {
        Self {
            chunks: ChunkSelection::All,
            name: Self::name_template(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputOptions {
    pub filename: OutputFilename,

    /// Absolute output directory
    pub path: PathBuf,
}

/// File names for the entry chunk and every other chunk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputFilename {
    pub main: String,
    pub chunks: String,
}

impl OutputFilename {
    pub fn new(bundle_name: impl Into<String>) -> Self {
        Self {
            main: bundle_name.into(),
            chunks: "[name].js".to_string(),
        }
    }
}
