//! Target file I/O.
//!
//! The target is read once in full and written once at the end. Writes go to
//! a temporary file in the same directory which is then renamed over the
//! target, so an interrupted write never leaves a truncated file behind.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use log::debug;
use tempfile::NamedTempFile;

use crate::error_handling::FixError;

/// Reads `path` into lines, each keeping its `\n` terminator.
///
/// Concatenating the returned lines reproduces the file byte-for-byte.
///
/// # Errors
///
/// Returns [`FixError::FileAccess`] if the file is missing, unreadable or not
/// valid UTF-8.
pub fn read_lines(path: &Path) -> Result<Vec<String>, FixError> {
    let contents = fs::read_to_string(path).map_err(|source| FixError::FileAccess {
        action: "read",
        path: path.to_path_buf(),
        source,
    })?;
    let lines: Vec<String> = contents.split_inclusive('\n').map(str::to_string).collect();
    debug!("Read {} lines from {}", lines.len(), path.display());
    Ok(lines)
}

/// Replaces the contents of `path` with `lines`.
///
/// The new contents are written and synced to a temporary file next to
/// `path`, which takes over the original's permissions and is then renamed
/// onto it.
///
/// # Errors
///
/// Returns [`FixError::FileAccess`] if the temporary file cannot be created,
/// written or renamed.
pub fn write_lines(path: &Path, lines: &[String]) -> Result<(), FixError> {
    let access = |action: &'static str| {
        move |source: io::Error| FixError::FileAccess {
            action,
            path: path.to_path_buf(),
            source,
        }
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut temp_file =
        NamedTempFile::new_in(dir).map_err(access("create a temporary file for"))?;

    for line in lines {
        temp_file
            .write_all(line.as_bytes())
            .map_err(access("write"))?;
    }
    temp_file.flush().map_err(access("write"))?;

    if let Ok(metadata) = fs::metadata(path) {
        temp_file
            .as_file()
            .set_permissions(metadata.permissions())
            .map_err(access("copy permissions onto"))?;
    }

    // Renames are atomic but do not flush; sync before swapping files
    temp_file.as_file().sync_all().map_err(access("sync"))?;
    temp_file
        .persist(path)
        .map_err(|err| access("replace")(err.error))?;

    debug!("Wrote {} lines to {}", lines.len(), path.display());
    Ok(())
}
