use crate::cli::{Cli, Commands};
use crate::commands::{run_init, run_strip, StripOptions};
use crate::config::Config;
use crate::constants::DEFAULT_TARGET_PATH;
use crate::range::{join_ranges, LineRange};
use crate::strip::WriteMode;
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

/// Runs linestrip with the given arguments.
///
/// # Errors
///
/// Returns an error if the command execution fails.
pub fn run_with_args(args: Vec<String>) -> Result<i32> {
    run_with_args_to(args, &mut std::io::stdout())
}

/// Run linestrip with the given arguments, writing output to the specified writer.
///
/// This is the testable version of `run_with_args` that allows output capture.
/// Argument errors are reported as exit code 1; failures while stripping are
/// returned as `Err` so the caller's `main` reports them and exits non-zero.
///
/// # Errors
///
/// Returns an error if the config is invalid or the strip fails.
pub fn run_with_args_to<W: std::io::Write>(args: Vec<String>, writer: &mut W) -> Result<i32> {
    let mut program_args = vec!["linestrip".to_owned()];
    program_args.extend(args);
    let cli_var = match Cli::try_parse_from(program_args) {
        Ok(c) => c,
        Err(e) => {
            match e.kind() {
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                    write!(writer, "{e}")?;
                    writer.flush()?;
                    return Ok(0);
                }
                _ => {
                    eprint!("{e}");
                    return Ok(1);
                }
            }
        }
    };

    if let Some(Commands::Init) = cli_var.command {
        run_init(writer)?;
        return Ok(0);
    }

    // Load config from the target path, or the current directory
    let config = match cli_var.path.as_deref() {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    };

    let verbose = cli_var.output.verbose;
    let options = resolve_options(cli_var, &config)?;

    if verbose {
        eprintln!("[VERBOSE] linestrip v{}", env!("CARGO_PKG_VERSION"));
        match &config.config_file_path {
            Some(path) => eprintln!("[VERBOSE] Config: {}", path.display()),
            None => eprintln!("[VERBOSE] Config: none (built-in defaults)"),
        }
        eprintln!("[VERBOSE] Target: {}", options.path.display());
        eprintln!("[VERBOSE] Ranges: {}", join_ranges(&options.ranges));
        eprintln!("[VERBOSE] Write mode: {:?}", options.mode);
        eprintln!();
    }

    run_strip(&options, &mut *writer)?;
    Ok(0)
}

/// Merge command-line arguments over config values over built-in defaults.
///
/// # Errors
///
/// Returns an error if the config lists a range that does not parse.
pub fn resolve_options(cli: Cli, config: &Config) -> Result<StripOptions> {
    let section = &config.linestrip;

    let path = cli
        .path
        .or_else(|| section.path.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_TARGET_PATH));

    let ranges = if cli.ranges.is_empty() {
        section
            .parsed_ranges()
            .with_context(|| match &config.config_file_path {
                Some(file) => format!("Invalid `ranges` in {}", file.display()),
                None => "Invalid `ranges` in configuration".to_owned(),
            })?
            .unwrap_or_else(|| vec![LineRange::DEFAULT])
    } else {
        cli.ranges
    };

    Ok(StripOptions {
        path,
        ranges,
        mode: WriteMode::from_flag(cli.atomic || section.atomic.unwrap_or(false)),
        dry_run: cli.dry_run,
        json: cli.output.json,
        verbose: cli.output.verbose,
    })
}
