//! The full merge pipeline: overlap removal, hyphen repair, page marker
//! spacing, paragraph reflow.

use std::fmt;

use log::{debug, info};
use unicode_normalization::UnicodeNormalization;

use super::header::HeaderSpacer;
use super::hyphen::HyphenRepair;
use super::overlap::merge_with_overlap_using;
use super::reflow::Reflow;
use super::{MergeOptions, MergeResult, MergeStats};
use crate::error::Result;
use crate::model::Fragment;

/// A stage of the merge pipeline, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Stitch fragments together, dropping overlap
    Merge,
    /// Join hyphenated line breaks
    TrimHyphens,
    /// Separate page markers from following text
    HeaderSpacing,
    /// Collapse and wrap paragraphs
    Reflow,
}

impl Stage {
    /// All stages in execution order.
    pub const ALL: [Stage; 4] = [
        Stage::Merge,
        Stage::TrimHyphens,
        Stage::HeaderSpacing,
        Stage::Reflow,
    ];
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Stage::Merge => "Merging fragments...",
            Stage::TrimHyphens => "Repairing hyphenation...",
            Stage::HeaderSpacing => "Spacing page markers...",
            Stage::Reflow => "Reflowing paragraphs...",
        };
        f.write_str(label)
    }
}

/// Merge pipeline with compiled rules.
///
/// # Example
///
/// ```
/// use unchunk::{Fragment, MergeOptions, MergePipeline};
///
/// let pipeline = MergePipeline::new(MergeOptions::new().with_max_check(50));
/// let result = pipeline.process(&[
///     Fragment::new("part1.txt", "Chapter One\nThis is page o-\n"),
///     Fragment::new("part2.txt", "ne content.\n--- Page 2 ---\nMore text."),
/// ])?;
///
/// assert_eq!(
///     result.content,
///     "Chapter One This is page one content. --- Page 2 ---\n\nMore text."
/// );
/// # Ok::<(), unchunk::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct MergePipeline {
    options: MergeOptions,
    hyphens: HyphenRepair,
    headers: HeaderSpacer,
    reflow: Reflow,
}

impl MergePipeline {
    /// Create a new pipeline with the given options.
    pub fn new(options: MergeOptions) -> Self {
        Self {
            options,
            hyphens: HyphenRepair::new(),
            headers: HeaderSpacer::new(),
            reflow: Reflow::new(),
        }
    }

    /// The options this pipeline runs with.
    pub fn options(&self) -> &MergeOptions {
        &self.options
    }

    /// Run all stages over `fragments`, in the given order.
    pub fn process(&self, fragments: &[Fragment]) -> Result<MergeResult> {
        self.process_with_progress(fragments, |_| {})
    }

    /// Run all stages, calling `on_stage` as each one starts.
    pub fn process_with_progress<F>(
        &self,
        fragments: &[Fragment],
        mut on_stage: F,
    ) -> Result<MergeResult>
    where
        F: FnMut(Stage),
    {
        self.options.validate()?;

        let normalized: Vec<Fragment>;
        let fragments = if self.options.normalize_unicode {
            normalized = fragments
                .iter()
                .map(|f| Fragment::new(f.source.clone(), f.text.nfc().collect::<String>()))
                .collect();
            &normalized[..]
        } else {
            fragments
        };

        let mut stats = MergeStats {
            input_chars: fragments.iter().map(Fragment::char_len).sum(),
            ..MergeStats::default()
        };

        on_stage(Stage::Merge);
        let doc =
            merge_with_overlap_using(fragments, self.options.max_check, self.options.search)?;
        stats.fragment_count = doc.fragment_count();
        stats.overlap_chars_removed = doc.overlap_chars_removed();
        debug!(
            "merged {} fragments, {} overlapping chars removed",
            stats.fragment_count, stats.overlap_chars_removed
        );

        on_stage(Stage::TrimHyphens);
        let trimmed = self.hyphens.apply(&doc.into_text());
        stats.hyphen_joins = trimmed.joins;
        stats.continuation_marks_removed = trimmed.marks_removed;

        on_stage(Stage::HeaderSpacing);
        let (spaced, markers) = self.headers.apply(&trimmed.text);
        stats.page_markers = markers;

        on_stage(Stage::Reflow);
        let (content, paragraphs) = self.reflow.apply(&spaced, self.options.width);
        stats.paragraph_count = paragraphs;
        stats.output_chars = content.chars().count();

        info!(
            "{} fragments -> {} paragraphs ({} chars)",
            stats.fragment_count, stats.paragraph_count, stats.output_chars
        );

        Ok(MergeResult::new(content, stats))
    }
}

impl Default for MergePipeline {
    fn default() -> Self {
        Self::new(MergeOptions::default())
    }
}
