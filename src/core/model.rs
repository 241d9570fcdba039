// LineSmith - core/model.rs
//
// Core data model. Pure data definitions with no I/O and no platform
// dependencies (core depends on std only).

/// The in-memory content of one text file between read and write.
///
/// A document is an ordered sequence of lines plus a flag recording whether
/// the source text ended with a newline. Line terminators are not stored:
/// `\n` and `\r\n` both delimit lines on parse, and `render` always joins
/// with `\n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    lines: Vec<String>,
    trailing_newline: bool,
}

impl Document {
    /// Split raw text into a document.
    ///
    /// Empty text produces a document with no lines and no trailing newline,
    /// so `parse("").render()` round-trips to the empty string.
    pub fn parse(text: &str) -> Self {
        Self {
            lines: text.lines().map(str::to_owned).collect(),
            trailing_newline: text.ends_with('\n'),
        }
    }

    /// Build a document from already-prepared lines.
    pub fn from_lines(lines: Vec<String>, trailing_newline: bool) -> Self {
        Self {
            lines,
            trailing_newline,
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn has_trailing_newline(&self) -> bool {
        self.trailing_newline
    }

    /// Join the lines back into text.
    ///
    /// The trailing newline is emitted iff the flag is set. A document with
    /// no lines renders as the empty string regardless of the flag.
    pub fn render(&self) -> String {
        if self.lines.is_empty() {
            return String::new();
        }
        let mut out = self.lines.join("\n");
        if self.trailing_newline {
            out.push('\n');
        }
        out
    }
}
