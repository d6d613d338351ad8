//! Merging module: stitches fragments together and cleans up the result.
//!
//! The stages run in a fixed order, each consuming the full output of the
//! previous one:
//!
//! 1. [`merge_with_overlap`] removes text duplicated across fragment boundaries
//! 2. [`trim_hyphens`] joins words broken across line ends
//! 3. [`add_header_spacing`] puts a blank line after each page marker
//! 4. [`reflow_paragraphs`] collapses each paragraph to one (wrapped) line
//!
//! [`MergePipeline`] runs all four and collects [`MergeStats`].

mod header;
mod hyphen;
mod options;
mod overlap;
mod pipeline;
mod reflow;
mod result;

pub use header::{add_header_spacing, HeaderSpacer};
pub use hyphen::{trim_hyphens, HyphenOutcome, HyphenRepair, CONTINUATION_MARK};
pub use options::{MergeOptions, OverlapSearch, DEFAULT_MAX_CHECK};
pub use overlap::{
    longest_overlap, longest_overlap_naive, merge_with_overlap, merge_with_overlap_using,
};
pub use pipeline::{MergePipeline, Stage};
pub use reflow::{reflow_paragraphs, Reflow};
pub use result::{MergeResult, MergeStats};
