//! Environment options supplied by the invoking build tool.

use serde::{Deserialize, Serialize};

/// Options passed through the build tool's `--env` flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildOptions {
    /// Attach a bundle analyzer plugin to every target
    #[serde(default)]
    pub use_bundle_analyzer: bool,
}

impl BuildOptions {
    /// Build options from `KEY[=VALUE]` pairs.
    ///
    /// A bare key counts as `true`. Values other than `false`, `0` and the
    /// empty string are truthy. Unknown keys are ignored.
    ///
    /// ```
    /// use crxpack_config::BuildOptions;
    ///
    /// let options = BuildOptions::from_env_pairs(["useBundleAnalyzer"]);
    /// assert!(options.use_bundle_analyzer);
    /// ```
    pub fn from_env_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut options = Self::default();
        for pair in pairs {
            let pair = pair.as_ref();
            let (key, value) = match pair.split_once('=') {
                Some((key, value)) => (key.trim(), Some(value.trim())),
                None => (pair.trim(), None),
            };

            match key {
                "useBundleAnalyzer" => options.use_bundle_analyzer = is_truthy(value),
                other => tracing::debug!(key = other, "ignoring unknown env option"),
            }
        }
        options
    }

    /// Resolve an optional options reference the way the generator sees it
    pub fn analyzer_requested(options: Option<&Self>) -> bool {
        options.is_some_and(|o| o.use_bundle_analyzer)
    }
}

fn is_truthy(value: Option<&str>) -> bool {
    !matches!(value, Some("false" | "0" | ""))
}
