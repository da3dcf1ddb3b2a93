//! Logging setup built on `tracing`.
//!
//! Logs go to stderr so `generate` can keep stdout for JSON.
//!
//! The level is chosen in this order:
//! 1. `--verbose`: DEBUG for crxpack crates
//! 2. `--quiet`: ERROR only
//! 3. `RUST_LOG`
//! 4. WARN for crxpack crates

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const VERBOSE_FILTER: &str = "crxpack=debug,crxpack_config=debug,crxpack_cli=debug";
const QUIET_FILTER: &str = "crxpack=error,crxpack_config=error,crxpack_cli=error";
const DEFAULT_FILTER: &str = "crxpack=warn,crxpack_config=warn,crxpack_cli=warn";

/// Initialize the tracing subscriber.
///
/// Call once at startup, before any logging occurs.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    init_logger_with_filter(filter_for(verbose, quiet), no_color || !should_use_colors());
}

/// Initialize logger with a custom environment filter.
pub fn init_logger_with_filter(filter: EnvFilter, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

fn filter_for(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Check if colored output should be enabled.
///
/// `NO_COLOR` disables colors, `FORCE_COLOR` forces them, otherwise the
/// terminal attached to stderr decides.
pub fn should_use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }

    console::Term::stderr().features().colors_supported()
}
