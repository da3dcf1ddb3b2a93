use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Ports the analyzer UI may bind to
pub const ANALYZER_PORTS: Range<u16> = 8000..9000;

/// Bundler plugins attached to a target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "kebab-case")]
pub enum PluginSpec {
    /// Serves an interactive treemap of the bundle contents
    BundleAnalyzer(AnalyzerPlugin),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzerPlugin {
    pub analyzer_port: u16,
}

impl AnalyzerPlugin {
    /// Analyzer with a port drawn from [`ANALYZER_PORTS`]
    pub fn with_rng(rng: &mut fastrand::Rng) -> Self {
        Self {
            analyzer_port: rng.u16(ANALYZER_PORTS),
        }
    }
}

impl PluginSpec {
    pub fn analyzer_port(&self) -> Option<u16> {
        match self {
            PluginSpec::BundleAnalyzer(plugin) => Some(plugin.analyzer_port),
        }
    }
}
