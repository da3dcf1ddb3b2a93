//! Build mode and the debug-symbol policy derived from it.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Build mode passed by the invoking build tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Unminified output with eval-based inline source maps
    Development,
    /// Minified output with separate `.map` files
    #[default]
    Production,
}

impl Mode {
    /// Interpret a raw `--mode` value.
    ///
    /// Only the exact string `"development"` selects development mode. Any
    /// other value, including typos and the empty string, yields production.
    ///
    /// ```
    /// use crxpack_config::Mode;
    ///
    /// assert_eq!(Mode::from_flag("development"), Mode::Development);
    /// assert_eq!(Mode::from_flag("develop"), Mode::Production);
    /// ```
    pub fn from_flag(flag: &str) -> Self {
        match flag {
            "development" => Mode::Development,
            "production" => Mode::Production,
            other => {
                tracing::debug!(mode = other, "unrecognized mode, using production");
                Mode::Production
            }
        }
    }

    pub fn is_development(self) -> bool {
        self == Mode::Development
    }

    /// Source map policy for this mode
    pub fn devtool(self) -> Devtool {
        match self {
            Mode::Development => Devtool::EvalSourceMap,
            Mode::Production => Devtool::SourceMap,
        }
    }

    /// Whether bundles are minified
    pub fn minimize(self) -> bool {
        !self.is_development()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Development => "development",
            Mode::Production => "production",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Debug-symbol (source map) policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Devtool {
    /// Each module wrapped in `eval` with an inline source map
    EvalSourceMap,
    /// Separate `.map` file next to every bundle
    SourceMap,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn development_flag_selects_development() {
        let mode = Mode::from_flag("development");
        assert!(mode.is_development());
        assert_eq!(mode.devtool(), Devtool::EvalSourceMap);
        assert!(!mode.minimize());
    }

    #[test]
    fn unknown_flags_fall_back_to_production() {
        for flag in ["production", "Development", "dev", "", " development"] {
            let mode = Mode::from_flag(flag);
            assert_eq!(mode, Mode::Production, "flag {flag:?}");
            assert_eq!(mode.devtool(), Devtool::SourceMap);
            assert!(mode.minimize());
        }
    }

    #[test]
    fn devtool_serializes_kebab_case() {
        assert_eq!(
            serde_json::to_value(Devtool::EvalSourceMap).unwrap(),
            serde_json::json!("eval-source-map")
        );
        assert_eq!(
            serde_json::to_value(Devtool::SourceMap).unwrap(),
            serde_json::json!("source-map")
        );
    }
}
