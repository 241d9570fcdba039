// LineSmith - core/transform.rs
//
// The tidy transformation: per-line whitespace normalisation, case folding,
// and zero-padded line numbering. Pure functions, total over all strings.

use crate::core::model::Document;
use crate::util::constants;

/// Apply the full transformation to raw text.
///
/// Per line, in order: strip leading/trailing whitespace, collapse internal
/// whitespace runs to a single space, uppercase, then prefix the zero-padded
/// 1-based line number and separator. The output has exactly as many lines as
/// the input, and ends with a newline iff the input did.
pub fn transform(text: &str) -> String {
    let doc = Document::parse(text);
    let width = number_width(doc.line_count());

    let numbered: Vec<String> = doc
        .lines()
        .iter()
        .enumerate()
        .map(|(idx, line)| {
            format!(
                "{:0width$}{}{}",
                idx + 1,
                constants::NUMBER_SEPARATOR,
                normalise_line(line),
            )
        })
        .collect();

    Document::from_lines(numbered, doc.has_trailing_newline()).render()
}

/// Strip, collapse internal whitespace, and uppercase a single line.
///
/// `split_whitespace` treats any Unicode whitespace run (spaces, tabs, ...)
/// as one separator, which covers both the strip and the collapse in one pass.
pub fn normalise_line(line: &str) -> String {
    line.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_uppercase()
}

/// Zero-padding width for line numbers: the digit count of the total line
/// count, never less than `MIN_NUMBER_WIDTH`.
pub fn number_width(line_count: usize) -> usize {
    line_count
        .max(1)
        .to_string()
        .len()
        .max(constants::MIN_NUMBER_WIDTH)
}
