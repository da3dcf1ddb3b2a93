//! Command-line interface definition.
//!
//! - `crxpack generate` - Print the bundler targets for a mode
//! - `crxpack check` - Validate the project layout

mod commands;
mod validation;

use clap::Parser;

pub use commands::{CheckArgs, Command, GenerateArgs};
pub use validation::parse_env_pair;

/// crxpack - bundler targets for browser extensions
#[derive(Parser, Debug)]
#[command(
    name = "crxpack",
    version,
    about = "Generate bundler targets for a browser extension",
    long_about = "crxpack describes how a browser extension's TypeScript entry points are\n\
                  bundled: content script, popup, background page, page script and every\n\
                  custom script in ts/Custom. The result is printed as JSON for the bundler."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
