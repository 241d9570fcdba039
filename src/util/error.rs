// LineSmith - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// No string-based error propagation. Every variant carries the path
// it failed on so loop-level messages never lose their subject.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all LineSmith operations.
/// Errors are categorised by the pipeline stage that produced them.
/// Every variant is recoverable: the interactive loop reports it and
/// re-prompts rather than terminating.
#[derive(Debug)]
pub enum LineSmithError {
    /// Source path validation failed before any I/O.
    Validate(ValidateError),

    /// Reading or decoding the source file failed.
    Read(ReadError),

    /// Writing the output file failed.
    Write(WriteError),
}

impl fmt::Display for LineSmithError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validate(e) => write!(f, "Validation error: {e}"),
            Self::Read(e) => write!(f, "Read error: {e}"),
            Self::Write(e) => write!(f, "Write error: {e}"),
        }
    }
}

impl std::error::Error for LineSmithError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Validate(e) => Some(e),
            Self::Read(e) => Some(e),
            Self::Write(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Validation errors
// ---------------------------------------------------------------------------

/// Errors from source path validation (existence and file-type checks).
#[derive(Debug)]
pub enum ValidateError {
    /// The path does not exist.
    NotFound { path: PathBuf },

    /// The path exists but is not a regular file (directory, socket, etc.).
    NotAFile { path: PathBuf },
}

impl fmt::Display for ValidateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { path } => {
                write!(f, "'{}' does not exist", path.display())
            }
            Self::NotAFile { path } => {
                write!(f, "'{}' is not a regular file", path.display())
            }
        }
    }
}

impl std::error::Error for ValidateError {}

impl From<ValidateError> for LineSmithError {
    fn from(e: ValidateError) -> Self {
        Self::Validate(e)
    }
}

// ---------------------------------------------------------------------------
// Read errors
// ---------------------------------------------------------------------------

/// Errors from reading and decoding the source file.
#[derive(Debug)]
pub enum ReadError {
    /// File content is not valid UTF-8.
    InvalidEncoding {
        path: PathBuf,
        source: std::string::FromUtf8Error,
    },

    /// Permission denied opening or reading the file.
    PermissionDenied { path: PathBuf, source: io::Error },

    /// Any other I/O failure (path vanished mid-read, hardware error, ...).
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEncoding { path, source } => {
                write!(f, "'{}': invalid UTF-8 encoding: {source}", path.display())
            }
            Self::PermissionDenied { path, source } => {
                write!(
                    f,
                    "permission denied reading '{}': {source}",
                    path.display()
                )
            }
            Self::Io { path, source } => {
                write!(f, "'{}': I/O error: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ReadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidEncoding { source, .. } => Some(source),
            Self::PermissionDenied { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
        }
    }
}

impl From<ReadError> for LineSmithError {
    fn from(e: ReadError) -> Self {
        Self::Read(e)
    }
}

// ---------------------------------------------------------------------------
// Write errors
// ---------------------------------------------------------------------------

/// Errors from writing the output file.
#[derive(Debug)]
pub enum WriteError {
    /// Permission denied creating or writing the file.
    PermissionDenied { path: PathBuf, source: io::Error },

    /// Any other I/O failure (disk full, directory removed, ...).
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for WriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PermissionDenied { path, source } => {
                write!(
                    f,
                    "permission denied writing '{}': {source}",
                    path.display()
                )
            }
            Self::Io { path, source } => {
                write!(f, "'{}': I/O error: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for WriteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::PermissionDenied { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
        }
    }
}

impl From<WriteError> for LineSmithError {
    fn from(e: WriteError) -> Self {
        Self::Write(e)
    }
}

/// Convenience type alias for LineSmith results.
pub type Result<T> = std::result::Result<T, LineSmithError>;
