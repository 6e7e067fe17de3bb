//! Core library for linestrip.
//!
//! linestrip removes an inclusive, 1-based range of lines from a text file
//! and writes the remaining lines back, byte for byte. With no arguments it
//! strips lines 882-896 from `pages/ClientDashboard.tsx`.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

/// Inclusive, 1-based line ranges and their text form.
pub mod range;

/// In-memory line model of a file, terminators included.
pub mod document;

/// Removing line ranges from files: the strip operation, its rewriter, and write modes.
pub mod strip;

/// Error types shared across the crate.
pub mod error;

/// Module for loading configuration.
pub mod config;

/// Module containing shared constants and built-in defaults.
pub mod constants;

/// Module containing utility functions.
pub mod utils;

/// Module for colored and tabular CLI output.
pub mod output;

/// Module defining the command-line interface arguments and structs.
pub mod cli;

/// Module for handling CLI commands and their execution logic.
pub mod commands;

/// Module defining the entry point logic shared by both binaries.
pub mod entry_point;

pub use error::{RangeError, RewriteError, StripError};
pub use range::LineRange;
pub use strip::{strip, strip_ranges, StripReport, WriteMode};
