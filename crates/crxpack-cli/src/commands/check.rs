//! Check command implementation.
//!
//! Validates the layout without generating anything.

use crxpack_config::{ConfigGenerator, validate_fs};

use crate::cli::CheckArgs;
use crate::config::load_layout;
use crate::error::Result;
use crate::ui;

/// Execute the check command.
///
/// 1. Load the layout (file + environment)
/// 2. Validate the schema and that every fixed entry exists
/// 3. List the custom scripts that would be bundled
pub fn execute(args: CheckArgs) -> Result<()> {
    ui::info("Checking layout...");
    let layout = load_layout(&args.root, args.config.as_deref())?;

    if let Err(err) = validate_fs(&layout) {
        ui::error(&err.to_string());
        return Err(err.into());
    }
    for fixed in &layout.entries {
        ui::success(&format!("  {} -> {}", fixed.entry.display(), fixed.bundle));
    }

    let generator = ConfigGenerator::new(layout);
    let custom = generator.custom_entries()?;
    if custom.is_empty() {
        ui::info(&format!(
            "No custom scripts in {}",
            generator.layout().custom_dir.display()
        ));
    } else {
        for entry in &custom {
            ui::success(&format!("  {} (custom)", entry.display()));
        }
    }

    ui::success("All checks passed!");
    Ok(())
}
