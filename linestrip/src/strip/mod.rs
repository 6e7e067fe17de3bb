//! Removing line ranges from files.
//!
//! [`strip`] is the plain operation: read the file, drop the lines inside the
//! range, write the rest back in place. [`strip_ranges`] generalizes it to
//! several ranges and a choice of [`WriteMode`]; [`preview`] computes the same
//! report without touching the file.
//!
//! The read handle is closed before the write begins. Nothing is locked, so
//! two invocations against the same file race.

mod rewriter;
mod writer;

pub use rewriter::{LineRangeRewriter, RemovedLine, Rewrite};
pub use writer::{write_document, WriteMode};

use crate::constants::CONFIRMATION_PREFIX;
use crate::document::Document;
use crate::error::StripError;
use crate::range::LineRange;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// What a strip did (or, for a preview, would do) to a file.
#[derive(Debug, Clone, Serialize)]
pub struct StripReport {
    /// File that was stripped
    pub path: PathBuf,
    /// Ranges that were requested
    pub ranges: Vec<LineRange>,
    /// Line count before stripping
    pub original_lines: usize,
    /// Lines that were dropped
    pub removed: Vec<RemovedLine>,
    /// Line count after stripping
    pub remaining_lines: usize,
    /// Whether the file was rewritten
    pub written: bool,
}

impl StripReport {
    /// Confirmation line for the requested ranges, e.g.
    /// `Fixed - removed lines 882-896`.
    ///
    /// This names the requested ranges even when the file was too short for
    /// some or all of them to match.
    #[must_use]
    pub fn message(&self) -> String {
        let ranges = self
            .ranges
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        format!("{CONFIRMATION_PREFIX} {ranges}")
    }

    /// Number of lines actually removed.
    #[must_use]
    pub fn removed_count(&self) -> usize {
        self.removed.len()
    }
}

/// Remove `range` from the file at `path`, overwriting it in place.
///
/// Lines keep their original terminators and order. A file shorter than
/// `range.end()` loses only the lines it has inside the range, possibly none.
///
/// # Errors
/// Returns [`StripError::Read`] if the file cannot be read and
/// [`StripError::Write`] if it cannot be written.
pub fn strip(path: &Path, range: LineRange) -> Result<StripReport, StripError> {
    strip_ranges(path, &[range], WriteMode::InPlace)
}

/// Remove every range in `ranges` from the file at `path`.
///
/// # Errors
/// Fails before writing if `ranges` is empty or two ranges overlap; fails
/// with an I/O variant if the file cannot be read or replaced.
pub fn strip_ranges(
    path: &Path,
    ranges: &[LineRange],
    mode: WriteMode,
) -> Result<StripReport, StripError> {
    let (rewrite, mut report) = plan(path, ranges)?;
    write_document(path, &rewrite.document.to_bytes(), mode)?;
    report.written = true;
    Ok(report)
}

/// Compute what [`strip_ranges`] would remove, without writing.
///
/// # Errors
/// Same as [`strip_ranges`], minus the write failures.
pub fn preview(path: &Path, ranges: &[LineRange]) -> Result<StripReport, StripError> {
    plan(path, ranges).map(|(_, report)| report)
}

fn plan(path: &Path, ranges: &[LineRange]) -> Result<(Rewrite, StripReport), StripError> {
    if ranges.is_empty() {
        return Err(StripError::NoRanges);
    }

    let document = Document::read(path)?;
    let original_lines = document.line_count();

    let mut rewriter = LineRangeRewriter::new(document);
    rewriter.add_ranges(ranges.iter().copied());
    let rewrite = rewriter.apply()?;

    let report = StripReport {
        path: path.to_path_buf(),
        ranges: ranges.to_vec(),
        original_lines,
        removed: rewrite.removed.clone(),
        remaining_lines: rewrite.document.line_count(),
        written: false,
    };
    Ok((rewrite, report))
}
