//! Inclusive, 1-based line ranges.

use crate::constants::{DEFAULT_RANGE_END, DEFAULT_RANGE_START};
use crate::error::RangeError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// An inclusive pair of 1-based line positions.
///
/// Construction goes through [`LineRange::new`] or [`str::parse`], so every
/// value satisfies `1 <= start <= end`.
///
/// ```
/// use linestrip::range::LineRange;
///
/// let range: LineRange = "882-896".parse().unwrap();
/// assert_eq!(range.start(), 882);
/// assert_eq!(range.len(), 15);
/// assert!(range.contains(890));
/// assert!(!range.contains(897));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct LineRange {
    start: usize,
    end: usize,
}

#[allow(clippy::len_without_is_empty)]
impl LineRange {
    /// Lines 882 through 896.
    pub const DEFAULT: Self = Self {
        start: DEFAULT_RANGE_START,
        end: DEFAULT_RANGE_END,
    };

    /// Create a range covering `start..=end`.
    ///
    /// # Errors
    /// Returns an error if `start` is zero or greater than `end`.
    pub fn new(start: usize, end: usize) -> Result<Self, RangeError> {
        if start == 0 {
            return Err(RangeError::ZeroStart);
        }
        if start > end {
            return Err(RangeError::Reversed { start, end });
        }
        Ok(Self { start, end })
    }

    /// A range covering exactly one line.
    ///
    /// # Errors
    /// Returns an error if `line` is zero.
    pub fn single(line: usize) -> Result<Self, RangeError> {
        Self::new(line, line)
    }

    /// First line in the range.
    #[must_use]
    pub const fn start(&self) -> usize {
        self.start
    }

    /// Last line in the range.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.end
    }

    /// Number of positions covered.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// Whether `position` falls inside the range.
    #[must_use]
    pub const fn contains(&self, position: usize) -> bool {
        self.start <= position && position <= self.end
    }

    /// Check if this range shares a line with another
    #[must_use]
    pub const fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

impl Default for LineRange {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for LineRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

impl FromStr for LineRange {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let malformed = || RangeError::Malformed(s.to_owned());
        let parse = |part: &str| part.trim().parse::<usize>().map_err(|_| malformed());

        match text.split_once(['-', ':']) {
            Some((start, end)) => Self::new(parse(start)?, parse(end)?),
            None if !text.is_empty() => Self::single(parse(text)?),
            None => Err(malformed()),
        }
    }
}

/// Parse a list of range strings, stopping at the first bad one.
///
/// # Errors
/// Returns the first [`RangeError`] encountered.
pub fn parse_ranges<S: AsRef<str>>(items: &[S]) -> Result<Vec<LineRange>, RangeError> {
    items.iter().map(|s| s.as_ref().parse()).collect()
}

/// Comma-separated `start-end` list, as shown to users.
#[must_use]
pub fn join_ranges(ranges: &[LineRange]) -> String {
    ranges
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
