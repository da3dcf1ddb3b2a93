//! Build-target generation for browser-extension bundles.
//!
//! Given a [`Mode`] and optional [`BuildOptions`], [`ConfigGenerator`] produces
//! one [`TargetDescriptor`] per bundle: the content script, popup, background
//! page and page script, followed by every custom script found in the
//! project's custom directory. The descriptors serialize to the shape an
//! external bundler consumes; nothing here runs the bundler itself.

pub mod discovery;
pub mod entries;
pub mod error;
pub mod generator;
pub mod layout;
pub mod mode;
pub mod naming;
pub mod options;
pub mod plugin;
pub mod target;
pub mod validation;

pub use entries::{EntryLister, GlobLister, StaticLister};
pub use error::*;
pub use generator::{ConfigGenerator, SharedSettings, build_target_config, generate};
pub use layout::{FixedEntry, ProjectLayout};
pub use mode::{Devtool, Mode};
pub use naming::{custom_output_name, output_filename, split_chunk_name};
pub use options::BuildOptions;
pub use plugin::{ANALYZER_PORTS, AnalyzerPlugin, PluginSpec};
pub use target::*;

pub use discovery::ConfigDiscovery;
pub use validation::{ConfigValidator, FsValidator, SchemaValidator, validate_fs, validate_schema};
