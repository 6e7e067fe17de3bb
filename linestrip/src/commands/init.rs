use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::Path;

use crate::constants::CONFIG_FILENAME;

/// Default configuration written by `linestrip init`
const DEFAULT_CONFIG: &str = r#"
[linestrip]
path = "pages/ClientDashboard.tsx"  # File to strip when no path is given
ranges = ["882-896"]                # Inclusive, 1-based line ranges to remove
atomic = false                      # Temp file + rename instead of in-place write
"#;

/// Executes the init command.
///
/// This creates a configuration file in the current directory.
pub fn run_init<W: Write>(writer: &mut W) -> Result<()> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    run_init_in(&current_dir, writer)
}

/// Executes the init command in a specific directory.
///
/// This is primarily used for testing.
pub fn run_init_in<W: Write>(root: &Path, writer: &mut W) -> Result<()> {
    writeln!(writer, "Initializing linestrip configuration...")?;

    let config_path = root.join(CONFIG_FILENAME);
    if config_path.exists() {
        writeln!(writer, "  • {CONFIG_FILENAME} already exists - skipping.")?;
    } else {
        let mut file = fs::File::create(&config_path)
            .with_context(|| format!("Failed to create {}", config_path.display()))?;
        writeln!(file, "{}", DEFAULT_CONFIG.trim())?;
        writeln!(
            writer,
            "  • Created {CONFIG_FILENAME} with default configuration."
        )?;
    }

    writeln!(writer, "Initialization complete!")?;
    Ok(())
}
