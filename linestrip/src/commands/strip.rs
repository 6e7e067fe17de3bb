//! Strip command.

use crate::output::{print_preview, print_verbose_summary};
use crate::range::LineRange;
use crate::strip::{preview, strip_ranges, StripReport, WriteMode};

use anyhow::{Context, Result};
use std::io::Write;
use std::path::PathBuf;

/// Options for the strip command, after config and defaults are merged
#[derive(Debug, Clone)]
pub struct StripOptions {
    /// File to strip
    pub path: PathBuf,
    /// Ranges to remove
    pub ranges: Vec<LineRange>,
    /// How the file is replaced
    pub mode: WriteMode,
    /// Dry-run mode (show what would change)
    pub dry_run: bool,
    /// Print the report as JSON
    pub json: bool,
    /// Verbose output on stderr
    pub verbose: bool,
}

/// Strip the configured ranges from the target file and report the result.
///
/// On success the confirmation line (or the JSON report) goes to `writer`.
/// On failure nothing is written to `writer`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or written, or the ranges overlap.
pub fn run_strip<W: Write>(options: &StripOptions, mut writer: W) -> Result<StripReport> {
    if options.dry_run {
        let report = preview(&options.path, &options.ranges)
            .with_context(|| format!("Cannot preview {}", options.path.display()))?;
        if options.json {
            writeln!(writer, "{}", serde_json::to_string_pretty(&report)?)?;
        } else {
            print_preview(&mut writer, &report)?;
        }
        return Ok(report);
    }

    let report = strip_ranges(&options.path, &options.ranges, options.mode)
        .with_context(|| format!("Cannot strip lines from {}", options.path.display()))?;

    if options.json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&report)?)?;
    } else {
        writeln!(writer, "{}", report.message())?;
    }

    if options.verbose {
        print_verbose_summary(&mut std::io::stderr(), &report)?;
    }

    Ok(report)
}
