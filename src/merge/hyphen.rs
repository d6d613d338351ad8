//! Repair of words hyphenated across line breaks.

use regex::{Captures, Regex};

/// The PDF continuation mark (`¬`, U+00AC) some extractors emit in place
/// of a soft hyphen.
pub const CONTINUATION_MARK: char = '\u{00AC}';

/// Join words broken across line ends and strip stray continuation marks.
///
/// 1. A `-` or `¬` immediately followed by a line break (`\n` or `\r\n`) is
///    removed together with it: `"exam-\nple"` becomes `"example"`. Page
///    marker lines (`--- Page N ---`) end in a hyphen too but are left intact.
/// 2. Any remaining `¬` is removed along with the whitespace after it.
///
/// Run this on the fully merged text so that breaks spanning a fragment
/// boundary are joined too.
pub fn trim_hyphens(text: &str) -> String {
    HyphenRepair::new().apply(text).text
}

/// Result of a hyphen repair pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HyphenOutcome {
    /// Repaired text
    pub text: String,
    /// Number of line-end breaks joined
    pub joins: usize,
    /// Number of stray continuation marks removed
    pub marks_removed: usize,
}

/// Compiled hyphen repair rules.
#[derive(Debug, Clone)]
pub struct HyphenRepair {
    line_break: Regex,
    stray_mark: Regex,
}

impl HyphenRepair {
    /// Create the repair rules.
    pub fn new() -> Self {
        Self {
            line_break: Regex::new(&format!(
                r"(?m)^(-{{3,}} Page \d+ -{{3,}}\r?\n)|[-{}]\r?\n",
                CONTINUATION_MARK
            ))
            .expect("line break pattern is valid"),
            stray_mark: Regex::new(&format!(r"{}\s*", CONTINUATION_MARK))
                .expect("continuation mark pattern is valid"),
        }
    }

    /// Apply both rewrites in order, counting what was changed.
    pub fn apply(&self, text: &str) -> HyphenOutcome {
        let mut joins = 0;
        let joined = self.line_break.replace_all(text, |caps: &Captures| match caps.get(1) {
            Some(marker) => marker.as_str().to_string(),
            None => {
                joins += 1;
                String::new()
            }
        });

        let marks_removed = self.stray_mark.find_iter(&joined).count();
        let cleaned = self.stray_mark.replace_all(&joined, "");

        HyphenOutcome {
            text: cleaned.into_owned(),
            joins,
            marks_removed,
        }
    }
}

impl Default for HyphenRepair {
    fn default() -> Self {
        Self::new()
    }
}
