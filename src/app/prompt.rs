// LineSmith - app/prompt.rs
//
// Interactive prompting on stdin/stdout.
// The InputSource trait is the seam that lets the loop run against a
// scripted source in tests without a terminal.

use crate::util::constants;
use std::io::{self, BufRead, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// One answer from the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptInput {
    /// A line of input, trimmed of surrounding whitespace.
    Line(String),

    /// No further input is possible: stdin hit EOF or an interrupt signal
    /// arrived. The loop treats this as cancellation.
    Closed,
}

/// Source of user answers for the interactive loop.
pub trait InputSource {
    /// Display `prompt` and read one answer.
    fn read_input(&mut self, prompt: &str) -> io::Result<PromptInput>;
}

/// Real stdin-backed input source.
///
/// `interrupted` is the flag set by the SIGINT handler. It is checked before
/// and after each blocking read, and an interrupted `read_line` is mapped to
/// `Closed` so Ctrl-C at the prompt cancels cleanly instead of aborting.
pub struct StdinSource {
    interrupted: Arc<AtomicBool>,
}

impl StdinSource {
    pub fn new(interrupted: Arc<AtomicBool>) -> Self {
        Self { interrupted }
    }

    fn interrupted(&self) -> bool {
        self.interrupted.load(Ordering::SeqCst)
    }
}

impl InputSource for StdinSource {
    fn read_input(&mut self, prompt: &str) -> io::Result<PromptInput> {
        if self.interrupted() {
            return Ok(PromptInput::Closed);
        }

        print!("{prompt}");
        io::stdout().flush()?;

        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            // EOF: the terminal (or pipe) is gone for good.
            Ok(0) => {
                println!();
                Ok(PromptInput::Closed)
            }
            Ok(_) => {
                if self.interrupted() {
                    println!();
                    return Ok(PromptInput::Closed);
                }
                Ok(PromptInput::Line(line.trim().to_string()))
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {
                // Signal arrived mid-read; leave the prompt line cleanly.
                println!();
                Ok(PromptInput::Closed)
            }
            Err(e) => Err(e),
        }
    }
}

/// True when `input` is one of the quit commands (case-insensitive).
pub fn is_quit_command(input: &str) -> bool {
    let lowered = input.to_lowercase();
    constants::QUIT_COMMANDS.contains(&lowered.as_str())
}
