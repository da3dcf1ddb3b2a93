//! Layout loading for CLI commands.
//!
//! Priority: `CRXPACK_*` environment variables > layout file > defaults.

use std::path::Path;

use crxpack_config::{ConfigDiscovery, ProjectLayout};
use figment::{
    Figment,
    providers::{Env, Serialized},
};

use crate::error::{CliError, Result, ResultExt};

/// Prefix of environment variables that override layout fields
pub const ENV_PREFIX: &str = "CRXPACK_";

/// Load the layout for the project at `root`.
///
/// `config` points at an explicit layout file; otherwise `crxpack.toml` or
/// the `crxpack` field of package.json in `root` is used when present.
pub fn load_layout(root: &Path, config: Option<&Path>) -> Result<ProjectLayout> {
    let root = std::path::absolute(root).with_path(root)?;
    if !root.is_dir() {
        return Err(CliError::FileNotFound(root));
    }

    let discovery = ConfigDiscovery::new(&root);
    let base = match config {
        Some(path) => {
            if !path.exists() {
                return Err(CliError::FileNotFound(path.to_path_buf()));
            }
            discovery.load_from(path)?
        }
        None => discovery.load_or_default()?,
    };

    let layout: ProjectLayout = Figment::new()
        .merge(Serialized::defaults(base))
        .merge(Env::prefixed(ENV_PREFIX))
        .extract()
        .map_err(|e| CliError::InvalidArgument(format!("layout: {e}")))
        .with_hint("Check crxpack.toml and CRXPACK_* environment variables")?;

    let layout = layout.rebase(&root);
    tracing::debug!(root = %layout.root.display(), "loaded layout");
    Ok(layout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_without_layout_file() {
        let dir = TempDir::new().unwrap();
        let layout = load_layout(dir.path(), None).unwrap();
        assert_eq!(layout.root, dir.path());
        assert_eq!(layout.output_dir, PathBuf::from("js"));
    }

    #[test]
    fn test_explicit_layout_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("layout.toml");
        fs::write(&file, "output_dir = \"out\"\n").unwrap();

        let layout = load_layout(dir.path(), Some(&file)).unwrap();
        assert_eq!(layout.output_dir, PathBuf::from("out"));
    }

    #[test]
    fn test_layout_file_root_has_no_current_dir_component() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("crxpack.toml"), "output_dir = \"dist\"\n").unwrap();

        let layout = load_layout(dir.path(), None).unwrap();
        let expected = std::path::absolute(dir.path()).unwrap();
        assert_eq!(layout.root.as_os_str(), expected.as_os_str());
        assert!(
            !layout
                .output_path()
                .to_string_lossy()
                .contains(&format!("{}.{}", std::path::MAIN_SEPARATOR, std::path::MAIN_SEPARATOR))
        );
    }

    #[test]
    fn test_missing_layout_file() {
        let dir = TempDir::new().unwrap();
        let err = load_layout(dir.path(), Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(matches!(err, CliError::FileNotFound(_)));
    }

    #[test]
    fn test_missing_root() {
        let dir = TempDir::new().unwrap();
        let err = load_layout(&dir.path().join("missing"), None).unwrap_err();
        assert!(matches!(err, CliError::FileNotFound(_)));
    }
}
