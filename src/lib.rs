//! # unchunk
//!
//! Merge overlapping text chunks produced by PDF/OCR extraction into one
//! clean document.
//!
//! Extraction pipelines often emit a document as several text files whose
//! edges repeat each other, with words hyphenated across line ends and
//! `--- Page N ---` markers between pages. This library stitches such
//! fragments back together.
//!
//! ## Quick Start
//!
//! ```no_run
//! use unchunk::merge_files;
//!
//! fn main() -> unchunk::Result<()> {
//!     // Files are merged in lexicographic order: part01.txt, part02.txt, ...
//!     let text = merge_files(&["out/part02.txt", "out/part01.txt"])?;
//!     println!("{}", text);
//!     Ok(())
//! }
//! ```
//!
//! ## Pipeline
//!
//! - **Overlap removal**: the longest suffix/prefix overlap between adjacent
//!   fragments is dropped
//! - **Hyphen repair**: `exam-\nple` becomes `example`, PDF `¬` marks vanish
//! - **Page markers**: each `--- Page N ---` line is followed by a blank line
//! - **Reflow**: one line per paragraph, or wrapped to a width

pub mod error;
pub mod merge;
pub mod model;
pub mod source;

// Re-export commonly used types
pub use error::{Error, Result};
pub use merge::{
    add_header_spacing, merge_with_overlap, reflow_paragraphs, trim_hyphens, MergeOptions,
    MergePipeline, MergeResult, MergeStats, OverlapSearch, Stage,
};
pub use model::{Fragment, MergedDocument, Paragraph};
pub use source::{read_fragment, read_fragments, DecodePolicy, FragmentOrder, SourceOptions};

use std::path::Path;

/// Merge fragment files with default options.
///
/// Files are sorted by path, read leniently (malformed UTF-8 is dropped)
/// and merged with a 500-character overlap window, one line per paragraph.
///
/// # Example
///
/// ```no_run
/// use unchunk::merge_files;
///
/// let text = merge_files(&["part1.txt", "part2.txt"]).unwrap();
/// std::fs::write("merged.txt", text).unwrap();
/// ```
pub fn merge_files<P: AsRef<Path>>(paths: &[P]) -> Result<String> {
    Unchunk::new().merge_files(paths).map(|r| r.content)
}

/// Merge fragment files with custom options.
///
/// # Example
///
/// ```no_run
/// use unchunk::{merge_files_with_options, MergeOptions, SourceOptions};
///
/// let result = merge_files_with_options(
///     &["a.txt", "b.txt"],
///     &SourceOptions::new().keep_order(),
///     MergeOptions::new().with_max_check(200).with_width(80),
/// )?;
/// println!("{} paragraphs", result.stats.paragraph_count);
/// # Ok::<(), unchunk::Error>(())
/// ```
pub fn merge_files_with_options<P: AsRef<Path>>(
    paths: &[P],
    source_options: &SourceOptions,
    merge_options: MergeOptions,
) -> Result<MergeResult> {
    let pipeline = MergePipeline::new(merge_options);
    // Options are checked before any file is touched.
    pipeline.options().validate()?;
    let fragments = read_fragments(paths, source_options)?;
    pipeline.process(&fragments)
}

/// Merge in-memory texts, in the given order, with default options.
///
/// # Example
///
/// ```
/// use unchunk::merge_texts;
///
/// let text = merge_texts(&["abc", "xyz"]).unwrap();
/// assert_eq!(text, "abcxyz");
/// ```
pub fn merge_texts<S: AsRef<str>>(texts: &[S]) -> Result<String> {
    let fragments: Vec<Fragment> = texts
        .iter()
        .enumerate()
        .map(|(i, t)| Fragment::new(format!("#{}", i), t.as_ref()))
        .collect();
    MergePipeline::default()
        .process(&fragments)
        .map(|r| r.content)
}

/// Builder for loading and merging fragments.
///
/// # Example
///
/// ```no_run
/// use unchunk::Unchunk;
///
/// let result = Unchunk::new()
///     .with_max_check(1000)
///     .with_width(72)
///     .normalize_unicode()
///     .merge_files(&["part1.txt", "part2.txt"])?;
/// println!("{}", result.content);
/// # Ok::<(), unchunk::Error>(())
/// ```
pub struct Unchunk {
    source_options: SourceOptions,
    merge_options: MergeOptions,
}

impl Unchunk {
    /// Create a new Unchunk builder.
    pub fn new() -> Self {
        Self {
            source_options: SourceOptions::default(),
            merge_options: MergeOptions::default(),
        }
    }

    /// Set the overlap window in characters.
    pub fn with_max_check(mut self, max_check: usize) -> Self {
        self.merge_options = self.merge_options.with_max_check(max_check);
        self
    }

    /// Wrap paragraphs to `width` characters.
    pub fn with_width(mut self, width: usize) -> Self {
        self.merge_options = self.merge_options.with_width(width);
        self
    }

    /// Set the overlap search algorithm.
    pub fn with_search(mut self, search: OverlapSearch) -> Self {
        self.merge_options = self.merge_options.with_search(search);
        self
    }

    /// NFC-normalize fragments before merging.
    pub fn normalize_unicode(mut self) -> Self {
        self.merge_options = self.merge_options.with_unicode_normalization(true);
        self
    }

    /// Merge files in the order given instead of sorting them.
    pub fn keep_order(mut self) -> Self {
        self.source_options = self.source_options.keep_order();
        self
    }

    /// Set the malformed UTF-8 policy.
    pub fn with_decode(mut self, decode: DecodePolicy) -> Self {
        self.source_options = self.source_options.with_decode(decode);
        self
    }

    /// Read files one at a time.
    pub fn sequential(mut self) -> Self {
        self.source_options = self.source_options.sequential();
        self
    }

    /// Read and merge fragment files.
    pub fn merge_files<P: AsRef<Path>>(self, paths: &[P]) -> Result<MergeResult> {
        merge_files_with_options(paths, &self.source_options, self.merge_options)
    }

    /// Merge fragments already in memory, in the given order.
    pub fn merge(self, fragments: &[Fragment]) -> Result<MergeResult> {
        MergePipeline::new(self.merge_options).process(fragments)
    }
}

impl Default for Unchunk {
    fn default() -> Self {
        Self::new()
    }
}
