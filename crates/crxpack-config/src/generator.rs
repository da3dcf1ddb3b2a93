//! The build-target generator.
//!
//! One call produces the four fixed targets (content script, popup,
//! background page, page script) followed by one target per custom script.
//! All targets share the settings derived from the mode and options.

use std::path::{Path, PathBuf};

use crate::entries::{EntryLister, GlobLister};
use crate::error::Result;
use crate::layout::ProjectLayout;
use crate::mode::{Devtool, Mode};
use crate::naming::custom_output_name;
use crate::options::BuildOptions;
use crate::plugin::{AnalyzerPlugin, PluginSpec};
use crate::target::{
    ModuleOptions, ModuleRule, OptimizationOptions, OutputFilename, OutputOptions,
    ResolveOptions, SplitChunksOptions, TargetDescriptor,
};

/// Settings every target of one generation call has in common
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharedSettings {
    pub mode: Mode,
    pub devtool: Devtool,
    pub minimize: bool,
    pub analyzer: bool,
    pub rules: Vec<ModuleRule>,
    pub extensions: Vec<String>,
    pub output_path: PathBuf,
}

impl SharedSettings {
    pub fn new(layout: &ProjectLayout, options: Option<&BuildOptions>, mode: Mode) -> Self {
        Self {
            mode,
            devtool: mode.devtool(),
            minimize: mode.minimize(),
            analyzer: BuildOptions::analyzer_requested(options),
            rules: vec![ModuleRule {
                test: format!(".{}", layout.source_extension),
                loader: layout.loader.clone(),
                exclude: layout.vendor_dir.clone(),
            }],
            extensions: layout.resolve_extensions(),
            output_path: layout.output_path(),
        }
    }
}

/// Build the descriptor for one entry.
///
/// When the analyzer is on, a fresh port is drawn from `rng` for this target.
pub fn build_target_config(
    entry: impl Into<PathBuf>,
    output_name: impl Into<String>,
    shared: &SharedSettings,
    rng: &mut fastrand::Rng,
) -> TargetDescriptor {
    let output_name = output_name.into();

    let plugins = if shared.analyzer {
        vec![PluginSpec::BundleAnalyzer(AnalyzerPlugin::with_rng(rng))]
    } else {
        Vec::new()
    };

    TargetDescriptor {
        entry: entry.into(),
        mode: shared.mode,
        devtool: shared.devtool,
        plugins,
        module: ModuleOptions {
            rules: shared.rules.clone(),
        },
        resolve: ResolveOptions {
            extensions: shared.extensions.clone(),
        },
        optimization: OptimizationOptions {
            minimize: shared.minimize,
            split_chunks: SplitChunksOptions::default(),
        },
        output: OutputOptions {
            filename: OutputFilename::new(output_name.clone()),
            path: shared.output_path.clone(),
        },
        output_name,
    }
}

/// Generates target descriptors for a project
pub struct ConfigGenerator<L = GlobLister> {
    layout: ProjectLayout,
    lister: L,
    rng: fastrand::Rng,
}

impl ConfigGenerator<GlobLister> {
    /// Generator that scans the filesystem for custom scripts
    pub fn new(layout: ProjectLayout) -> Self {
        Self::with_lister(layout, GlobLister)
    }
}

impl<L: EntryLister> ConfigGenerator<L> {
    pub fn with_lister(layout: ProjectLayout, lister: L) -> Self {
        Self {
            layout,
            lister,
            rng: fastrand::Rng::new(),
        }
    }

    /// Use a seeded random source for analyzer ports
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = fastrand::Rng::with_seed(seed);
        self
    }

    pub fn layout(&self) -> &ProjectLayout {
        &self.layout
    }

    /// Custom script entries, in lister order
    pub fn custom_entries(&self) -> Result<Vec<PathBuf>> {
        self.lister
            .list(&self.layout.custom_path(), &self.layout.source_extension)
    }

    /// Produce `[content, popup, background, page, ...custom]`.
    ///
    /// # Errors
    ///
    /// Returns the lister's error when custom-script discovery fails.
    pub fn generate(
        &mut self,
        options: Option<&BuildOptions>,
        mode: Mode,
    ) -> Result<Vec<TargetDescriptor>> {
        let shared = SharedSettings::new(&self.layout, options, mode);
        tracing::debug!(
            mode = %mode,
            analyzer = shared.analyzer,
            root = %self.layout.root.display(),
            "generating build targets"
        );

        let custom = self.custom_entries()?;
        let mut targets = Vec::with_capacity(self.layout.entries.len() + custom.len());

        for fixed in &self.layout.entries {
            targets.push(build_target_config(
                fixed.entry.clone(),
                fixed.bundle.clone(),
                &shared,
                &mut self.rng,
            ));
        }

        for entry in custom {
            let Some(output_name) = custom_output_name(&entry) else {
                tracing::warn!(entry = %entry.display(), "skipping custom entry with non UTF-8 name");
                continue;
            };
            targets.push(build_target_config(entry, output_name, &shared, &mut self.rng));
        }

        tracing::info!(count = targets.len(), mode = %mode, "generated build targets");
        Ok(targets)
    }
}

/// Generate targets for the project at `root` using the default layout.
///
/// ```no_run
/// use crxpack_config::{generate, Mode};
///
/// let targets = generate(".", None, Mode::from_flag("development")).unwrap();
/// assert!(targets.len() >= 4);
/// ```
pub fn generate(
    root: impl AsRef<Path>,
    options: Option<&BuildOptions>,
    mode: Mode,
) -> Result<Vec<TargetDescriptor>> {
    ConfigGenerator::new(ProjectLayout::rooted(root.as_ref())).generate(options, mode)
}
