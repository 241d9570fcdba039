// LineSmith - tests/e2e_loop.rs
//
// End-to-end tests for the interactive loop: scripted input driving the
// real validate -> read -> transform -> write pipeline against the real
// filesystem — no mocks, no stubs. This exercises the full path from a
// typed-in filename to the derived output file on disk.

use linesmith::app::prompt::{InputSource, PromptInput};
use linesmith::app::run::{run_loop, Outcome};
use linesmith::platform::config::AppConfig;
use std::collections::VecDeque;
use std::fs;
use std::io;
use std::path::Path;

// =============================================================================
// Helpers
// =============================================================================

/// Input source that replays a fixed script, then reports EOF.
struct Script {
    replies: VecDeque<String>,
}

impl Script {
    fn new(replies: &[&str]) -> Self {
        Self {
            replies: replies.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}

impl InputSource for Script {
    fn read_input(&mut self, _prompt: &str) -> io::Result<PromptInput> {
        Ok(match self.replies.pop_front() {
            Some(line) => PromptInput::Line(line),
            None => PromptInput::Closed,
        })
    }
}

fn run_script(replies: &[&str]) -> Outcome {
    let mut script = Script::new(replies);
    run_loop(&mut script, &AppConfig::default())
}

fn path_str(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

// =============================================================================
// Success paths
// =============================================================================

/// A valid file is transformed and written next to the source.
#[test]
fn e2e_transforms_file_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("notes.txt");
    fs::write(&source, "  hello   world\nsecond\tline\n").unwrap();

    let outcome = run_script(&[&path_str(&source)]);

    let Outcome::Completed(output) = outcome else {
        panic!("expected Completed, got {outcome:?}");
    };
    assert_eq!(
        output.file_name().unwrap().to_str().unwrap(),
        "modified_notes.txt"
    );
    assert!(output.is_absolute(), "success path must be absolute");
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "1 | HELLO WORLD\n2 | SECOND LINE\n"
    );
}

/// Line numbers are zero-padded to the digit count of the line count.
#[test]
fn e2e_pads_line_numbers_for_ten_lines() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("ten.txt");
    fs::write(&source, "x\n".repeat(10)).unwrap();

    let Outcome::Completed(output) = run_script(&[&path_str(&source)]) else {
        panic!("expected Completed");
    };
    let content = fs::read_to_string(&output).unwrap();
    assert!(content.starts_with("01 | X\n"), "got {content:?}");
    assert!(content.ends_with("10 | X\n"), "got {content:?}");
}

/// The final extension is replaced, not appended to.
#[test]
fn e2e_output_name_drops_final_extension() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("archive.tar.gz");
    fs::write(&source, "payload\n").unwrap();

    let Outcome::Completed(output) = run_script(&[&path_str(&source)]) else {
        panic!("expected Completed");
    };
    assert_eq!(
        output.file_name().unwrap().to_str().unwrap(),
        "modified_archive.tar.txt"
    );
}

/// An existing output file is overwritten, not appended to or refused.
#[test]
fn e2e_overwrites_existing_output() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("notes.txt");
    fs::write(&source, "fresh\n").unwrap();
    fs::write(dir.path().join("modified_notes.txt"), "stale content").unwrap();

    let Outcome::Completed(output) = run_script(&[&path_str(&source)]) else {
        panic!("expected Completed");
    };
    assert_eq!(fs::read_to_string(&output).unwrap(), "1 | FRESH\n");
}

/// Empty source produces an empty output file.
#[test]
fn e2e_empty_source_produces_empty_output() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("empty.txt");
    fs::write(&source, "").unwrap();

    let Outcome::Completed(output) = run_script(&[&path_str(&source)]) else {
        panic!("expected Completed");
    };
    assert_eq!(fs::read_to_string(&output).unwrap(), "");
}

// =============================================================================
// Recovery paths
// =============================================================================

/// Bad paths report and re-prompt; the loop completes on the first good one.
#[test]
fn e2e_bad_paths_reprompt_until_success() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("good.txt");
    fs::write(&source, "ok\n").unwrap();

    let outcome = run_script(&[
        &path_str(&dir.path().join("missing.txt")), // NotFound
        &path_str(dir.path()),                      // NotAFile (directory)
        &path_str(&source),
    ]);

    let Outcome::Completed(output) = outcome else {
        panic!("expected Completed after recoverable errors, got {outcome:?}");
    };
    assert_eq!(fs::read_to_string(&output).unwrap(), "1 | OK\n");
}

/// A non-UTF-8 file is a recoverable decode error.
#[test]
fn e2e_non_utf8_file_reprompts() {
    let dir = tempfile::tempdir().unwrap();
    let binary = dir.path().join("binary.dat");
    fs::write(&binary, [0xff, 0xfe, 0x41]).unwrap();
    let source = dir.path().join("text.txt");
    fs::write(&source, "plain\n").unwrap();

    let Outcome::Completed(output) = run_script(&[&path_str(&binary), &path_str(&source)]) else {
        panic!("expected Completed after decode error");
    };
    assert_eq!(fs::read_to_string(&output).unwrap(), "1 | PLAIN\n");
}

/// An empty answer is treated as a path that does not exist.
#[test]
fn e2e_blank_input_reprompts() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("notes.txt");
    fs::write(&source, "line\n").unwrap();

    let outcome = run_script(&["", &path_str(&source)]);
    assert!(matches!(outcome, Outcome::Completed(_)));
}

// =============================================================================
// Cancellation paths
// =============================================================================

/// Quit commands cancel without touching the filesystem.
#[test]
fn e2e_quit_command_cancels() {
    for cmd in ["q", "Quit", "EXIT"] {
        assert_eq!(run_script(&[cmd]), Outcome::Cancelled, "command {cmd}");
    }
}

/// EOF (closed stdin) cancels instead of spinning on an empty prompt.
#[test]
fn e2e_eof_cancels() {
    assert_eq!(run_script(&[]), Outcome::Cancelled);
}

/// Cancelling after errors still leaves no output behind.
#[test]
fn e2e_cancel_after_errors_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();

    let outcome = run_script(&[&path_str(&dir.path().join("missing.txt")), "q"]);
    assert_eq!(outcome, Outcome::Cancelled);
    assert_eq!(
        fs::read_dir(dir.path()).unwrap().count(),
        0,
        "no files should have been created"
    );
}
