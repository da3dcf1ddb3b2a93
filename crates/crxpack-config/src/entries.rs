//! Discovery of custom-script entry files.
//!
//! The generator never touches the filesystem directly: it asks an
//! [`EntryLister`] for the files in a directory, so tests can swap the glob
//! scan for a fixed list.

use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern, glob_with};

use crate::error::{ConfigError, Result};

/// Lists the entry files directly inside a directory
pub trait EntryLister {
    /// Files in `dir` whose extension is `extension` (no leading dot).
    ///
    /// A directory that does not exist yields an empty list.
    fn list(&self, dir: &Path, extension: &str) -> Result<Vec<PathBuf>>;
}

/// Filesystem lister backed by a `<dir>/*.<ext>` glob
///
/// `dir` is matched literally and dotfiles are skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobLister;

impl EntryLister for GlobLister {
    fn list(&self, dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
        let pattern = format!(
            "{}/*.{extension}",
            Pattern::escape(&dir.to_string_lossy())
        );
        let options = MatchOptions {
            require_literal_leading_dot: true,
            ..MatchOptions::new()
        };

        let paths = glob_with(&pattern, options)
            .map_err(|source| ConfigError::InvalidPattern {
                pattern: pattern.clone(),
                source,
            })?;

        let mut files = Vec::new();
        for entry in paths {
            let path = entry?;
            if path.is_file() {
                files.push(path);
            }
        }

        tracing::debug!(pattern = %pattern, count = files.len(), "discovered custom entries");
        Ok(files)
    }
}

/// Lister over a fixed set of paths
#[derive(Debug, Clone, Default)]
pub struct StaticLister {
    paths: Vec<PathBuf>,
}

impl StaticLister {
    pub fn new<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
        }
    }
}

impl EntryLister for StaticLister {
    fn list(&self, dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
        Ok(self
            .paths
            .iter()
            .filter(|path| path.parent() == Some(dir))
            .filter(|path| path.extension().is_some_and(|ext| ext == extension))
            .cloned()
            .collect())
    }
}

impl<L: EntryLister + ?Sized> EntryLister for &L {
    fn list(&self, dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
        (**self).list(dir, extension)
    }
}
