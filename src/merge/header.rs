//! Spacing around `--- Page N ---` markers.

use regex::{Captures, Regex};

/// Make sure every page marker line is followed by a blank line, so the
/// reflow pass never glues the text after a marker onto it.
///
/// A marker is three or more hyphens, `Page`, a decimal page number and
/// three or more hyphens, at the start of any line. Markers that are
/// already followed by a blank line are left untouched.
///
/// # Example
///
/// ```
/// use unchunk::merge::add_header_spacing;
///
/// assert_eq!(
///     add_header_spacing("--- Page 3 ---\nBody text"),
///     "--- Page 3 ---\n\nBody text"
/// );
/// ```
pub fn add_header_spacing(text: &str) -> String {
    HeaderSpacer::new().apply(text).0
}

/// Compiled page marker rule.
#[derive(Debug, Clone)]
pub struct HeaderSpacer {
    marker: Regex,
}

impl HeaderSpacer {
    /// Create the page marker rule.
    pub fn new() -> Self {
        Self {
            marker: Regex::new(r"(?m)^(-{3,} Page \d+ -{3,})((?:\r?\n){0,2})")
                .expect("page marker pattern is valid"),
        }
    }

    /// Insert the missing blank lines; returns the text and the number of
    /// markers seen.
    pub fn apply(&self, text: &str) -> (String, usize) {
        let mut markers = 0;

        let spaced = self.marker.replace_all(text, |caps: &Captures| {
            markers += 1;
            let breaks = caps[2].matches('\n').count();
            if breaks >= 2 {
                caps[0].to_string()
            } else {
                format!("{}\n\n", &caps[1])
            }
        });

        (spaced.into_owned(), markers)
    }
}

impl Default for HeaderSpacer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_line_inserted() {
        assert_eq!(
            add_header_spacing("--- Page 3 ---\nBody text"),
            "--- Page 3 ---\n\nBody text"
        );
    }

    #[test]
    fn test_already_spaced_unchanged() {
        let text = "--- Page 3 ---\n\nBody text";
        assert_eq!(add_header_spacing(text), text);

        let crlf = "--- Page 3 ---\r\n\r\nBody text";
        assert_eq!(add_header_spacing(crlf), crlf);
    }

    #[test]
    fn test_marker_mid_text() {
        let text = "end of page one\n--- Page 2 ---\nstart of page two";
        assert_eq!(
            add_header_spacing(text),
            "end of page one\n--- Page 2 ---\n\nstart of page two"
        );
    }

    #[test]
    fn test_marker_with_text_on_same_line() {
        assert_eq!(
            add_header_spacing("--- Page 12 -----Body"),
            "--- Page 12 -----\n\nBody"
        );
    }

    #[test]
    fn test_marker_at_end_of_text() {
        assert_eq!(add_header_spacing("text\n--- Page 9 ---"), "text\n--- Page 9 ---\n\n");
    }

    #[test]
    fn test_marker_must_start_line() {
        let text = "see --- Page 3 ---\nBody";
        assert_eq!(add_header_spacing(text), text);
    }

    #[test]
    fn test_non_markers_untouched() {
        let text = "-- Page 3 --\nBody\n--- page 3 ---\nBody\n--- Page x ---\nBody";
        assert_eq!(add_header_spacing(text), text);
    }

    #[test]
    fn test_idempotent_and_counts() {
        let spacer = HeaderSpacer::new();
        let (once, markers) = spacer.apply("--- Page 1 ---\na\n--- Page 2 ---\r\nb");
        assert_eq!(markers, 2);
        assert_eq!(once, "--- Page 1 ---\n\na\n--- Page 2 ---\n\nb");

        let (twice, _) = spacer.apply(&once);
        assert_eq!(twice, once);
    }
}
