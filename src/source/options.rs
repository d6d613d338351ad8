//! Fragment loading options.

use super::DecodePolicy;

/// Options for reading fragment files.
#[derive(Debug, Clone)]
pub struct SourceOptions {
    /// Order in which fragments are merged
    pub order: FragmentOrder,

    /// Handling of malformed UTF-8
    pub decode: DecodePolicy,

    /// Whether to read files in parallel
    pub parallel: bool,
}

impl SourceOptions {
    /// Create new source options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fragment order.
    pub fn with_order(mut self, order: FragmentOrder) -> Self {
        self.order = order;
        self
    }

    /// Keep fragments in the order they were given.
    pub fn keep_order(mut self) -> Self {
        self.order = FragmentOrder::AsGiven;
        self
    }

    /// Set the decode policy.
    pub fn with_decode(mut self, decode: DecodePolicy) -> Self {
        self.decode = decode;
        self
    }

    /// Enable or disable parallel reading.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Read files one at a time.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            order: FragmentOrder::Sorted,
            decode: DecodePolicy::Ignore,
            parallel: true,
        }
    }
}

/// Order in which fragment files are merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FragmentOrder {
    /// Sort paths lexicographically (component by component)
    #[default]
    Sorted,
    /// Use the order given by the caller
    AsGiven,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_options_builder() {
        let options = SourceOptions::new()
            .keep_order()
            .with_decode(DecodePolicy::Strict)
            .sequential();

        assert_eq!(options.order, FragmentOrder::AsGiven);
        assert_eq!(options.decode, DecodePolicy::Strict);
        assert!(!options.parallel);
    }

    #[test]
    fn test_source_options_defaults() {
        let options = SourceOptions::default();
        assert_eq!(options.order, FragmentOrder::Sorted);
        assert_eq!(options.decode, DecodePolicy::Ignore);
        assert!(options.parallel);
    }
}
