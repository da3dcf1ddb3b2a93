//! crxpack CLI - build-target generation for browser extensions.
//!
//! The CLI plays the part of the build tool: it reads the mode and `--env`
//! flags, loads the project layout, asks `crxpack-config` for the target
//! descriptors and prints them as JSON for the bundler.
//!
//! - [`cli`] - Argument definitions (clap derive)
//! - [`commands`] - `generate` and `check`
//! - [`config`] - Layout loading (file, environment)
//! - [`error`] - Error types and miette reporting
//! - [`logger`] - tracing subscriber setup
//! - [`ui`] - Status messages on stderr

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, Result, ResultExt};
