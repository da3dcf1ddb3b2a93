//! Terminal status messages.
//!
//! Everything is written to stderr; stdout is reserved for generated JSON.
//!
//! ```no_run
//! use crxpack_cli::ui;
//!
//! ui::init_colors(false);
//! ui::success("Layout is valid");
//! ```

mod messages;

use std::sync::atomic::{AtomicBool, Ordering};

pub use messages::{error, info, success};

static COLORS: AtomicBool = AtomicBool::new(false);

/// Decide once whether status messages are colored.
pub fn init_colors(no_color: bool) {
    let enabled = !no_color && crate::logger::should_use_colors();
    COLORS.store(enabled, Ordering::Relaxed);
}

pub(crate) fn colors_enabled() -> bool {
    COLORS.load(Ordering::Relaxed)
}
