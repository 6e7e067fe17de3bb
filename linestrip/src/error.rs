//! Error types for range parsing, rewriting, and file access.

use std::path::PathBuf;

/// A line range that cannot exist.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Line positions are 1-based, so a range cannot start at zero.
    #[error("line ranges are 1-based; start must be at least 1")]
    ZeroStart,
    /// The start of the range lies after its end.
    #[error("range start {start} is greater than range end {end}")]
    Reversed {
        /// Requested first line
        start: usize,
        /// Requested last line
        end: usize,
    },
    /// The text could not be read as `START-END`, `START:END`, or `N`.
    #[error("invalid line range '{0}': expected START-END, START:END, or N")]
    Malformed(String),
}

/// Error while applying range removals to a document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RewriteError {
    /// Two of the requested ranges share at least one line.
    #[error("overlapping line ranges at indices {range_a} and {range_b}")]
    OverlappingRanges {
        /// Index of the first overlapping range
        range_a: usize,
        /// Index of the second overlapping range
        range_b: usize,
    },
}

/// Error from a strip operation.
#[derive(Debug, thiserror::Error)]
pub enum StripError {
    /// The target file could not be opened or read.
    #[error("failed to read {}", path.display())]
    Read {
        /// File that was being read
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },
    /// The target file could not be written.
    #[error("failed to write {}", path.display())]
    Write {
        /// File that was being written
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },
    /// The temporary file could not be renamed over the target.
    #[error("failed to replace {} with the rewritten file", path.display())]
    Persist {
        /// File that was being replaced
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },
    /// No ranges were given.
    #[error("no line ranges to remove")]
    NoRanges,
    /// The requested ranges could not be applied together.
    #[error(transparent)]
    Rewrite(#[from] RewriteError),
}
