//! Generate command implementation.

use std::fs;
use std::io::Write;

use crxpack_config::{BuildOptions, ConfigGenerator, Mode, TargetDescriptor};

use crate::cli::GenerateArgs;
use crate::config::load_layout;
use crate::error::{Result, ResultExt};
use crate::ui;

/// Execute the generate command.
///
/// Loads the layout, runs the generator over the real filesystem and writes
/// the descriptors as a JSON array to stdout or `--out`.
///
/// # Errors
///
/// Returns errors for an invalid layout, failed custom-script discovery or a
/// failed write.
pub fn execute(args: GenerateArgs) -> Result<()> {
    let targets = generate_targets(&args)?;
    let json = render(&targets, args.compact)?;

    match &args.out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).with_path(parent)?;
            }
            fs::write(path, format!("{json}\n")).with_path(path)?;
            ui::success(&format!(
                "Wrote {} targets to {}",
                targets.len(),
                path.display()
            ));
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{json}")?;
        }
    }

    Ok(())
}

/// Run the generator for the parsed arguments.
pub fn generate_targets(args: &GenerateArgs) -> Result<Vec<TargetDescriptor>> {
    let layout = load_layout(&args.root, args.config.as_deref())?;
    let options = BuildOptions::from_env_pairs(&args.env);
    let mode = Mode::from_flag(&args.mode);

    let mut generator = ConfigGenerator::new(layout);
    if let Some(seed) = args.seed {
        generator = generator.with_seed(seed);
    }

    Ok(generator.generate(Some(&options), mode)?)
}

fn render(targets: &[TargetDescriptor], compact: bool) -> Result<String> {
    let json = if compact {
        serde_json::to_string(targets)?
    } else {
        serde_json::to_string_pretty(targets)?
    };
    Ok(json)
}
