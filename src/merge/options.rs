//! Merge options and configuration.

use crate::error::{Error, Result};

/// Default number of characters compared when looking for overlap.
pub const DEFAULT_MAX_CHECK: usize = 500;

/// Options for merging fragments.
#[derive(Debug, Clone)]
pub struct MergeOptions {
    /// Maximum number of characters compared at each fragment boundary
    pub max_check: usize,

    /// Reflow width in characters (`None` = one line per paragraph)
    pub width: Option<usize>,

    /// Overlap search algorithm
    pub search: OverlapSearch,

    /// Normalize each fragment to Unicode NFC before merging
    pub normalize_unicode: bool,
}

impl MergeOptions {
    /// Create new merge options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the overlap window.
    pub fn with_max_check(mut self, max_check: usize) -> Self {
        self.max_check = max_check;
        self
    }

    /// Set the reflow width.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    /// Keep each paragraph on a single line.
    pub fn unbounded_width(mut self) -> Self {
        self.width = None;
        self
    }

    /// Set the overlap search algorithm.
    pub fn with_search(mut self, search: OverlapSearch) -> Self {
        self.search = search;
        self
    }

    /// Enable or disable NFC normalization of fragments.
    pub fn with_unicode_normalization(mut self, normalize: bool) -> Self {
        self.normalize_unicode = normalize;
        self
    }

    /// Reject option values that cannot be processed.
    pub fn validate(&self) -> Result<()> {
        if self.max_check == 0 {
            return Err(Error::InvalidOverlapWindow(self.max_check));
        }
        if let Some(width) = self.width {
            if width == 0 {
                return Err(Error::InvalidWidth(width));
            }
        }
        Ok(())
    }
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            max_check: DEFAULT_MAX_CHECK,
            width: None,
            search: OverlapSearch::PrefixFunction,
            normalize_unicode: false,
        }
    }
}

/// Algorithm used to find the overlap between two adjacent fragments.
///
/// Both variants return the same answer: the longest prefix of the new
/// fragment's head that is also a suffix of the accumulated tail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlapSearch {
    /// Try every candidate length from longest to shortest
    Naive,
    /// Linear-time scan using the KMP prefix function
    #[default]
    PrefixFunction,
}
