//! Paragraph reflow.

use regex::Regex;

use crate::model::Paragraph;

/// Reflow text to one logical line per paragraph.
///
/// Paragraphs are separated by blank lines (a line break, optional
/// whitespace, another line break). Each paragraph's whitespace is collapsed
/// to single spaces and the result is wrapped to `width` characters; `None`
/// leaves each paragraph on a single line. Paragraphs are joined with one
/// blank line.
///
/// Applying this twice with the same width gives the same result as
/// applying it once.
///
/// # Example
///
/// ```
/// use unchunk::merge::reflow_paragraphs;
///
/// let text = "First line\nof the first paragraph.\n\n\nSecond   one.";
/// assert_eq!(
///     reflow_paragraphs(text, None),
///     "First line of the first paragraph.\n\nSecond one."
/// );
/// ```
pub fn reflow_paragraphs(text: &str, width: Option<usize>) -> String {
    Reflow::new().apply(text, width).0
}

/// Compiled paragraph splitter.
#[derive(Debug, Clone)]
pub struct Reflow {
    blank_line: Regex,
}

impl Reflow {
    /// Create the paragraph splitter.
    pub fn new() -> Self {
        Self {
            blank_line: Regex::new(r"\n\s*\n").expect("blank line pattern is valid"),
        }
    }

    /// Split `text` into non-empty paragraphs.
    pub fn paragraphs(&self, text: &str) -> Vec<Paragraph> {
        self.blank_line
            .split(text.trim())
            .map(Paragraph::new)
            .filter(|p| !p.is_empty())
            .collect()
    }

    /// Reflow `text`; returns the text and the number of paragraphs.
    pub fn apply(&self, text: &str, width: Option<usize>) -> (String, usize) {
        let paragraphs = self.paragraphs(text);
        let count = paragraphs.len();

        let out = paragraphs
            .iter()
            .map(|p| p.wrap(width))
            .collect::<Vec<_>>()
            .join("\n\n");

        (out, count)
    }
}

impl Default for Reflow {
    fn default() -> Self {
        Self::new()
    }
}
