use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::range::LineRange;

/// Help text for configuration file options, shown at the bottom of --help.
const CONFIG_HELP: &str = "\
CONFIGURATION FILE (.linestrip.toml):
  Searched for from the target file's directory upward.

  [linestrip]
  path = \"pages/ClientDashboard.tsx\"  # File to strip
  ranges = [\"882-896\"]                # Inclusive, 1-based
  atomic = false                      # Temp file + rename instead of in-place write
";

/// Options for output formatting and verbosity.
#[derive(Args, Debug, Default, Clone)]
pub struct OutputOptions {
    /// Print the strip report as JSON instead of the confirmation line.
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output for debugging (shows resolved path, ranges, and config).
    #[arg(short, long)]
    pub verbose: bool,
}

/// Command line interface configuration using `clap`.
/// This struct defines the arguments and flags accepted by the program.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "linestrip - remove an inclusive range of lines from a text file in place",
    long_about = None,
    after_help = CONFIG_HELP
)]
pub struct Cli {
    #[command(subcommand)]
    /// The subcommand to execute.
    pub command: Option<Commands>,

    /// File to strip.
    /// Defaults to `path` from the config file, then to pages/ClientDashboard.tsx.
    pub path: Option<PathBuf>,

    /// Inclusive 1-based line range to remove (START-END, START:END, or N).
    /// Repeat to remove several ranges; they must not overlap.
    /// Defaults to `ranges` from the config file, then to 882-896.
    #[arg(short, long = "range", value_name = "RANGE")]
    pub ranges: Vec<LineRange>,

    /// Write to a temporary file in the same directory and rename it over the target.
    #[arg(long)]
    pub atomic: bool,

    /// Show the lines that would be removed without modifying the file.
    #[arg(long)]
    pub dry_run: bool,

    /// Output formatting options.
    #[command(flatten)]
    pub output: OutputOptions,
}

#[derive(Subcommand, Debug)]
/// Available subcommands.
pub enum Commands {
    /// Write a default .linestrip.toml in the current directory
    Init,
}
