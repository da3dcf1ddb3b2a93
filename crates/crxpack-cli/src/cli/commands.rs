use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::cli::validation::parse_env_pair;

/// Available crxpack subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate the bundler targets
    ///
    /// Prints one target per bundle as a JSON array: the four fixed
    /// extension bundles followed by every custom script.
    Generate(GenerateArgs),

    /// Validate the project layout
    ///
    /// Checks the layout file, verifies the fixed entry files exist and lists
    /// the custom scripts that would be bundled.
    Check(CheckArgs),
}

/// Arguments for the generate command
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Build mode
    ///
    /// "development" disables minification and uses eval source maps.
    /// Any other value builds for production.
    #[arg(short, long, default_value = "production", value_name = "MODE")]
    pub mode: String,

    /// Environment option as KEY or KEY=VALUE
    ///
    /// Examples:
    ///   crxpack generate --env useBundleAnalyzer
    ///   crxpack generate --env useBundleAnalyzer=false
    #[arg(long = "env", value_name = "KEY[=VALUE]", value_parser = parse_env_pair)]
    pub env: Vec<String>,

    /// Project root directory
    #[arg(short, long, default_value = ".", value_name = "DIR")]
    pub root: PathBuf,

    /// Layout file (defaults to crxpack.toml or package.json in the root)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Write the JSON to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Emit single-line JSON
    #[arg(long)]
    pub compact: bool,

    /// Seed for analyzer port selection (reproducible output)
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Project root directory
    #[arg(short, long, default_value = ".", value_name = "DIR")]
    pub root: PathBuf,

    /// Layout file (defaults to crxpack.toml or package.json in the root)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}
