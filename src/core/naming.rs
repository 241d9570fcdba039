// LineSmith - core/naming.rs
//
// Output-path derivation. Pure path arithmetic, no filesystem access.

use crate::util::constants;
use std::path::{Path, PathBuf};

/// Derive the output path for a source file: `modified_<stem>.txt` in the
/// same directory, where `<stem>` is the source filename without its final
/// extension.
///
/// `archive.tar.gz` therefore becomes `modified_archive.tar.txt` (only the
/// final extension is dropped), and extensionless names keep their full
/// filename as the stem.
pub fn derive_output_path(source: &Path) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    source.with_file_name(format!(
        "{}{stem}.{}",
        constants::OUTPUT_PREFIX,
        constants::OUTPUT_EXTENSION
    ))
}
