// LineSmith - app/run.rs
//
// The interactive loop: prompt -> validate -> read -> transform -> write,
// with every pipeline failure contained at the loop level (report and
// re-prompt) and quit/EOF/interrupt mapped to cancellation.

use crate::app::prompt::{is_quit_command, InputSource, PromptInput};
use crate::core::{naming, transform};
use crate::platform::config::AppConfig;
use crate::platform::fs;
use crate::util::error::{LineSmithError, ReadError, Result, ValidateError, WriteError};
use std::path::{Path, PathBuf};

/// Terminal outcome of the interactive loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// One file was transformed and written; holds the resolved output path.
    Completed(PathBuf),

    /// The user quit, closed stdin, or sent an interrupt.
    Cancelled,
}

/// Validate, read, transform, and write one source file.
///
/// Returns the (non-canonicalised) output path on success. Every failure is
/// typed and recoverable; the caller decides whether to retry.
pub fn process_file(source: &Path, large_file_warning_bytes: u64) -> Result<PathBuf> {
    let meta = fs::validate_source(source)?;
    if meta.len() > large_file_warning_bytes {
        tracing::warn!(
            path = %source.display(),
            bytes = meta.len(),
            "Large source file; the whole content is held in memory during transformation"
        );
    }

    let original = fs::read_text(source)?;
    let modified = transform::transform(&original);

    let output = naming::derive_output_path(source);
    fs::write_text(&output, &modified)?;

    tracing::info!(
        source = %source.display(),
        output = %output.display(),
        lines = modified.lines().count(),
        "Transformation written"
    );
    Ok(output)
}

/// Drive the prompt loop until one successful transformation or cancellation.
///
/// The loop is unbounded: recoverable errors print a message and re-prompt,
/// never terminate. Success reports the absolute output path.
pub fn run_loop<I: InputSource>(input: &mut I, config: &AppConfig) -> Outcome {
    loop {
        let line = match input.read_input(crate::util::constants::PROMPT) {
            Ok(PromptInput::Line(line)) => line,
            Ok(PromptInput::Closed) => return Outcome::Cancelled,
            Err(e) => {
                tracing::warn!(error = %e, "Prompt read failed; cancelling");
                return Outcome::Cancelled;
            }
        };

        if is_quit_command(&line) {
            return Outcome::Cancelled;
        }

        let source = PathBuf::from(line);
        match process_file(&source, config.large_file_warning_bytes) {
            Ok(output) => {
                // Canonicalise for the success report; fall back to the raw
                // path if the filesystem no longer agrees (e.g. output removed
                // between write and report).
                let resolved = output.canonicalize().unwrap_or(output);
                return Outcome::Completed(resolved);
            }
            Err(e) => report_error(&e),
        }
    }
}

/// Print the user-facing message for a recoverable pipeline error.
///
/// Messages go to stdout alongside the prompt; the structured record goes to
/// the log on stderr.
fn report_error(err: &LineSmithError) {
    tracing::debug!(error = %err, "Recoverable error; re-prompting");

    match err {
        LineSmithError::Validate(ValidateError::NotFound { .. }) => {
            println!("Error: File not found. Please try again.\n");
        }
        LineSmithError::Validate(ValidateError::NotAFile { .. }) => {
            println!("Error: That path is not a file. Please try again.\n");
        }
        LineSmithError::Read(ReadError::InvalidEncoding { .. }) => {
            println!("Error: Could not decode file as UTF-8 text.");
            println!("Try saving it as UTF-8 or pick a different file.\n");
        }
        LineSmithError::Read(ReadError::PermissionDenied { .. }) => {
            println!("Error: Permission denied when reading the file.\n");
        }
        LineSmithError::Read(ReadError::Io { source, .. }) => {
            println!("Error: Could not read the file ({source}).\n");
        }
        LineSmithError::Write(WriteError::PermissionDenied { .. }) => {
            println!("Error: Permission denied when writing the output file.\n");
        }
        LineSmithError::Write(WriteError::Io { source, .. }) => {
            println!("Error: Could not write the output file ({source}).\n");
        }
    }
}
