// LineSmith - platform/fs.rs
//
// Filesystem access with typed error mapping.
// All reads and writes use whole-file std::fs calls, so the underlying
// handle is scoped to the call and closed on every exit path.

use crate::util::error::{ReadError, ValidateError, WriteError};
use std::fs::Metadata;
use std::io;
use std::path::Path;

/// Check that `path` names an existing regular file.
///
/// Returns the file metadata on success so callers can inspect the size
/// without a second stat. Metadata failures other than `NotFound` (e.g. a
/// permission error on a parent directory) also report as `NotFound`, the
/// same way an `exists()`-style check would read them.
pub fn validate_source(path: &Path) -> Result<Metadata, ValidateError> {
    match std::fs::metadata(path) {
        Ok(meta) if meta.is_file() => Ok(meta),
        Ok(_) => Err(ValidateError::NotAFile {
            path: path.to_path_buf(),
        }),
        Err(e) => {
            if e.kind() != io::ErrorKind::NotFound {
                tracing::debug!(path = %path.display(), error = %e, "Metadata lookup failed");
            }
            Err(ValidateError::NotFound {
                path: path.to_path_buf(),
            })
        }
    }
}

/// Read the full content of a file as strict UTF-8 text.
///
/// Decoding is strict, not lossy: the caller reports a decode failure to the
/// user rather than silently mangling their content.
pub fn read_text(path: &Path) -> Result<String, ReadError> {
    let bytes = std::fs::read(path).map_err(|e| match e.kind() {
        io::ErrorKind::PermissionDenied => ReadError::PermissionDenied {
            path: path.to_path_buf(),
            source: e,
        },
        _ => ReadError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    String::from_utf8(bytes).map_err(|e| ReadError::InvalidEncoding {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Write UTF-8 text to a file, creating or overwriting it.
pub fn write_text(path: &Path, content: &str) -> Result<(), WriteError> {
    std::fs::write(path, content).map_err(|e| match e.kind() {
        io::ErrorKind::PermissionDenied => WriteError::PermissionDenied {
            path: path.to_path_buf(),
            source: e,
        },
        _ => WriteError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })
}
