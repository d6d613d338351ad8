//! Fragment type: one chunk of extracted text.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// A chunk of text produced by an upstream extractor.
///
/// The `source` identifier (usually the file path) is the ordering key
/// used when fragments are sorted before merging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fragment {
    /// Source identifier (e.g. file name)
    pub source: String,

    /// Text content
    pub text: String,
}

impl Fragment {
    /// Create a fragment from a source identifier and its text.
    pub fn new(source: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            text: text.into(),
        }
    }

    /// Create a fragment whose source identifier is a path.
    pub fn from_path(path: &Path, text: impl Into<String>) -> Self {
        Self::new(path.display().to_string(), text)
    }

    /// Length of the text in characters.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Check if the fragment has no text.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_len_counts_characters() {
        let fragment = Fragment::new("a.txt", "naïve ¬");
        assert_eq!(fragment.char_len(), 7);
        assert!(fragment.text.len() > 7);
    }

    #[test]
    fn test_from_path() {
        let fragment = Fragment::from_path(Path::new("out/part02.txt"), "text");
        assert_eq!(fragment.source, "out/part02.txt");
        assert!(!fragment.is_empty());
    }
}
