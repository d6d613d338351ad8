//! Merge result with statistics.

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Result of merging fragments, including content and statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergeResult {
    /// The merged, reflowed text
    pub content: String,

    /// Merge statistics
    pub stats: MergeStats,
}

impl MergeResult {
    /// Create a new merge result.
    pub fn new(content: String, stats: MergeStats) -> Self {
        Self { content, stats }
    }

    /// Get the content length in bytes.
    pub fn content_len(&self) -> usize {
        self.content.len()
    }

    /// Render the statistics as JSON.
    pub fn stats_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(&self.stats)?
        } else {
            serde_json::to_string(&self.stats)?
        };
        Ok(json)
    }

    /// Write the content to `writer` as UTF-8 bytes, without adding a
    /// trailing newline.
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        writer.write_all(self.content.as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    /// Write the content to a file, replacing it if it exists.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        fs::write(path, self.content.as_bytes())?;
        Ok(())
    }
}

/// Statistics collected while merging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeStats {
    /// Number of fragments merged
    pub fragment_count: usize,

    /// Sum of fragment lengths in characters
    pub input_chars: usize,

    /// Characters dropped as duplicated overlap
    pub overlap_chars_removed: usize,

    /// Words joined across a line-end hyphen or continuation mark
    pub hyphen_joins: usize,

    /// Stray continuation marks removed
    pub continuation_marks_removed: usize,

    /// Page marker lines found
    pub page_markers: usize,

    /// Paragraphs in the output
    pub paragraph_count: usize,

    /// Length of the output in characters
    pub output_chars: usize,
}

impl MergeStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fraction of input characters that were duplicated overlap.
    pub fn overlap_ratio(&self) -> f64 {
        if self.input_chars == 0 {
            0.0
        } else {
            self.overlap_chars_removed as f64 / self.input_chars as f64
        }
    }
}
