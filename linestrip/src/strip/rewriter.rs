//! Line-range rewriter.
//!
//! Applies one or more line-range removals to a [`Document`], rejecting
//! ranges that overlap and keeping every other line byte-for-byte.
//!
//! # Usage
//!
//! ```
//! use linestrip::document::Document;
//! use linestrip::range::LineRange;
//! use linestrip::strip::LineRangeRewriter;
//!
//! let doc = Document::from_bytes(b"one\ntwo\nthree\n");
//! let mut rewriter = LineRangeRewriter::new(doc);
//! rewriter.add_range(LineRange::single(2).unwrap());
//! let rewrite = rewriter.apply().unwrap();
//! assert_eq!(rewrite.document.to_bytes(), b"one\nthree\n");
//! ```

use crate::document::{display_text, Document};
use crate::error::RewriteError;
use crate::range::LineRange;
use serde::Serialize;

/// A line dropped from the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemovedLine {
    /// Position in the original document (1-based)
    pub line: usize,
    /// Line text without its terminator, lossily decoded
    pub text: String,
}

/// Output of [`LineRangeRewriter::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    /// Lines that were kept, in original order
    pub document: Document,
    /// Lines that were dropped, in original order
    pub removed: Vec<RemovedLine>,
}

/// Removes line ranges from a document.
///
/// Positions past the end of the document never occur, so a range that
/// reaches beyond the last line removes only the lines that exist.
#[derive(Debug, Clone)]
pub struct LineRangeRewriter {
    /// Original document
    document: Document,
    /// Pending ranges
    ranges: Vec<LineRange>,
}

impl LineRangeRewriter {
    /// Create a new rewriter for the given document
    #[must_use]
    pub fn new(document: Document) -> Self {
        Self {
            document,
            ranges: Vec::new(),
        }
    }

    /// Add a range to the pending list
    pub fn add_range(&mut self, range: LineRange) {
        self.ranges.push(range);
    }

    /// Add multiple ranges
    pub fn add_ranges(&mut self, ranges: impl IntoIterator<Item = LineRange>) {
        self.ranges.extend(ranges);
    }

    /// Validate ranges without applying them
    ///
    /// # Errors
    /// Returns error if two ranges overlap
    pub fn validate(&self) -> Result<(), RewriteError> {
        for i in 0..self.ranges.len() {
            for j in (i + 1)..self.ranges.len() {
                if self.ranges[i].overlaps(&self.ranges[j]) {
                    return Err(RewriteError::OverlappingRanges {
                        range_a: i,
                        range_b: j,
                    });
                }
            }
        }
        Ok(())
    }

    /// Apply all ranges and return the kept and removed lines
    ///
    /// A line is kept when its position is outside every range.
    ///
    /// # Errors
    /// Returns error if two ranges overlap
    pub fn apply(self) -> Result<Rewrite, RewriteError> {
        self.validate()?;

        let mut removed = Vec::new();
        let mut kept = Vec::with_capacity(self.document.line_count());

        for (index, line) in self.document.into_iter().enumerate() {
            let position = index + 1;
            if self.ranges.iter().any(|range| range.contains(position)) {
                removed.push(RemovedLine {
                    line: position,
                    text: display_text(&line),
                });
            } else {
                kept.push(line);
            }
        }

        Ok(Rewrite {
            document: kept.into_iter().collect(),
            removed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(count: usize) -> Document {
        (1..=count)
            .map(|n| format!("line {n}\n").into_bytes())
            .collect()
    }

    fn range(start: usize, end: usize) -> LineRange {
        LineRange::new(start, end).unwrap()
    }

    #[test]
    fn test_single_range_removal() {
        let mut rewriter = LineRangeRewriter::new(numbered(5));
        rewriter.add_range(range(2, 3));

        let rewrite = rewriter.apply().unwrap();
        assert_eq!(rewrite.document.to_bytes(), b"line 1\nline 4\nline 5\n");
        assert_eq!(
            rewrite.removed,
            vec![
                RemovedLine {
                    line: 2,
                    text: "line 2".to_owned()
                },
                RemovedLine {
                    line: 3,
                    text: "line 3".to_owned()
                },
            ]
        );
    }

    #[test]
    fn test_multiple_ranges_any_order() {
        let mut rewriter = LineRangeRewriter::new(numbered(10));
        rewriter.add_ranges([range(8, 9), range(2, 2)]);

        let rewrite = rewriter.apply().unwrap();
        assert_eq!(rewrite.document.line_count(), 7);
        let removed: Vec<usize> = rewrite.removed.iter().map(|r| r.line).collect();
        assert_eq!(removed, vec![2, 8, 9]);
    }

    #[test]
    fn test_overlapping_ranges_error() {
        let mut rewriter = LineRangeRewriter::new(numbered(10));
        rewriter.add_range(range(1, 4));
        rewriter.add_range(range(6, 7));
        rewriter.add_range(range(4, 5));

        assert_eq!(
            rewriter.apply(),
            Err(RewriteError::OverlappingRanges {
                range_a: 0,
                range_b: 2
            })
        );
    }

    #[test]
    fn test_range_past_end_trims_what_exists() {
        let mut rewriter = LineRangeRewriter::new(numbered(5));
        rewriter.add_range(range(4, 100));

        let rewrite = rewriter.apply().unwrap();
        assert_eq!(rewrite.document.line_count(), 3);
        assert_eq!(rewrite.removed.len(), 2);
    }

    #[test]
    fn test_range_entirely_past_end_is_noop() {
        let doc = numbered(5);
        let mut rewriter = LineRangeRewriter::new(doc.clone());
        rewriter.add_range(range(6, 9));

        let rewrite = rewriter.apply().unwrap();
        assert_eq!(rewrite.document, doc);
        assert!(rewrite.removed.is_empty());
    }

    #[test]
    fn test_no_ranges_keeps_everything() {
        let doc = numbered(3);
        let rewriter = LineRangeRewriter::new(doc.clone());
        assert_eq!(rewriter.apply().unwrap().document, doc);
    }

    #[test]
    fn test_unterminated_last_line_survives() {
        let mut rewriter = LineRangeRewriter::new(Document::from_bytes(b"a\nb\nc"));
        rewriter.add_range(range(1, 1));
        assert_eq!(rewriter.apply().unwrap().document.to_bytes(), b"b\nc");
    }
}
