//! Merged document accumulator.

use super::Fragment;

/// The text built up while merging fragments.
///
/// Fragments are appended one at a time; the caller decides how many
/// leading characters of each fragment are dropped as overlap.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergedDocument {
    text: String,
    fragment_count: usize,
    overlap_chars_removed: usize,
}

impl MergedDocument {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fragment verbatim.
    pub fn push(&mut self, fragment: &Fragment) {
        self.push_after_overlap(fragment, 0);
    }

    /// Append a fragment, skipping its first `overlap` characters.
    ///
    /// `overlap` larger than the fragment skips the whole fragment.
    pub fn push_after_overlap(&mut self, fragment: &Fragment, overlap: usize) {
        let start = fragment
            .text
            .char_indices()
            .nth(overlap)
            .map(|(idx, _)| idx)
            .unwrap_or(fragment.text.len());

        self.text.push_str(&fragment.text[start..]);
        self.fragment_count += 1;
        self.overlap_chars_removed += fragment.text[..start].chars().count();
    }

    /// The merged text so far.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consume the document and return its text.
    pub fn into_text(self) -> String {
        self.text
    }

    /// Check if nothing has been accumulated yet.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Number of fragments appended.
    pub fn fragment_count(&self) -> usize {
        self.fragment_count
    }

    /// Total characters dropped as overlap.
    pub fn overlap_chars_removed(&self) -> usize {
        self.overlap_chars_removed
    }

    /// Length of the merged text in characters.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}
