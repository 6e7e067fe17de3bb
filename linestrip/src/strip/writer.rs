//! Writing a rewritten document back over its source file.

use crate::error::StripError;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// How the target file is replaced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WriteMode {
    /// Truncate the target and write into it. An interrupted write can leave
    /// the file truncated or empty.
    #[default]
    InPlace,
    /// Write a temporary file next to the target, then rename it over the
    /// target. The original stays intact until the rename.
    Atomic,
}

impl WriteMode {
    /// `Atomic` when `atomic` is set, otherwise `InPlace`.
    #[must_use]
    pub const fn from_flag(atomic: bool) -> Self {
        if atomic {
            Self::Atomic
        } else {
            Self::InPlace
        }
    }
}

/// Replace the contents of `path` with `content`.
///
/// # Errors
/// Returns [`StripError::Write`] if the data cannot be written, or
/// [`StripError::Persist`] if the atomic rename fails.
pub fn write_document(path: &Path, content: &[u8], mode: WriteMode) -> Result<(), StripError> {
    match mode {
        WriteMode::InPlace => fs::write(path, content).map_err(|source| StripError::Write {
            path: path.to_path_buf(),
            source,
        }),
        WriteMode::Atomic => write_atomic(path, content),
    }
}

fn write_atomic(path: &Path, content: &[u8]) -> Result<(), StripError> {
    let write_err = |source: std::io::Error| StripError::Write {
        path: path.to_path_buf(),
        source,
    };

    // Rename over the file a symlink points at, not over the link itself.
    let target = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());

    // Same directory as the target so the rename never crosses filesystems.
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir).map_err(write_err)?;
    temp.write_all(content).map_err(write_err)?;
    temp.as_file().sync_all().map_err(write_err)?;

    if let Ok(metadata) = fs::metadata(&target) {
        temp.as_file()
            .set_permissions(metadata.permissions())
            .map_err(write_err)?;
    }

    temp.persist(&target).map_err(|e| StripError::Persist {
        path: path.to_path_buf(),
        source: e.error,
    })?;
    Ok(())
}
