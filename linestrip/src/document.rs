//! In-memory line model of a text file.
//!
//! Lines are kept as raw bytes with their original terminators, so a
//! document written back out is byte-identical to what was read, minus any
//! removed lines. Nothing here decodes text; invalid UTF-8 passes through.

use crate::error::StripError;
use std::fs;
use std::path::Path;

/// An ordered sequence of lines, each carrying its own terminator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    lines: Vec<Vec<u8>>,
}

impl Document {
    /// Split `content` into lines ending in `\n`, `\r\n`, or a bare `\r`.
    /// A final line without a terminator is kept as is; empty content yields
    /// no lines.
    #[must_use]
    pub fn from_bytes(content: &[u8]) -> Self {
        let mut lines = Vec::new();
        let mut start = 0;
        for (i, byte) in content.iter().enumerate() {
            let ends_line = match *byte {
                b'\n' => true,
                b'\r' => content.get(i + 1) != Some(&b'\n'),
                _ => false,
            };
            if ends_line {
                lines.push(content[start..=i].to_vec());
                start = i + 1;
            }
        }
        if start < content.len() {
            lines.push(content[start..].to_vec());
        }
        Self { lines }
    }

    /// Read the whole file at `path`.
    ///
    /// The handle is closed before this returns.
    ///
    /// # Errors
    /// Returns [`StripError::Read`] if the file is missing or unreadable.
    pub fn read(path: &Path) -> Result<Self, StripError> {
        let content = fs::read(path).map_err(|source| StripError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_bytes(&content))
    }

    /// Number of lines.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Concatenate all lines back into file content.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        self.lines.concat()
    }
}

impl FromIterator<Vec<u8>> for Document {
    fn from_iter<I: IntoIterator<Item = Vec<u8>>>(iter: I) -> Self {
        Self {
            lines: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Document {
    type Item = Vec<u8>;
    type IntoIter = std::vec::IntoIter<Vec<u8>>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.into_iter()
    }
}

/// Drop a trailing `\n`, `\r\n`, or `\r` and decode lossily, for display.
#[must_use]
pub fn display_text(line: &[u8]) -> String {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    let line = line.strip_suffix(b"\r").unwrap_or(line);
    String::from_utf8_lossy(line).into_owned()
}
