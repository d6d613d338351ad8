//! Error types for unchunk library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for unchunk operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading and merging fragments.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when writing output.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A fragment source could not be read.
    #[error("Failed to read fragment {}: {source}", path.display())]
    FragmentRead {
        /// Path of the fragment that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// No fragment sources were given.
    #[error("No fragments to merge")]
    NoFragments,

    /// A fragment is not valid UTF-8 and strict decoding was requested.
    #[error("Invalid UTF-8 in {source_id} at byte {offset}")]
    Encoding {
        /// Source identifier of the fragment
        source_id: String,
        /// Byte offset of the first malformed sequence
        offset: usize,
    },

    /// The overlap window must be at least one character.
    #[error("Invalid overlap window: {0} (must be a positive integer)")]
    InvalidOverlapWindow(usize),

    /// The reflow width must be at least one character.
    #[error("Invalid reflow width: {0} (must be a positive integer)")]
    InvalidWidth(usize),

    /// Error serializing statistics.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Whether this error was raised by option validation.
    pub fn is_config(&self) -> bool {
        matches!(self, Error::InvalidOverlapWindow(_) | Error::InvalidWidth(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::NoFragments;
        assert_eq!(err.to_string(), "No fragments to merge");

        let err = Error::InvalidOverlapWindow(0);
        assert_eq!(
            err.to_string(),
            "Invalid overlap window: 0 (must be a positive integer)"
        );

        let err = Error::FragmentRead {
            path: PathBuf::from("part01.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "file not found"),
        };
        assert_eq!(
            err.to_string(),
            "Failed to read fragment part01.txt: file not found"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_is_config() {
        assert!(Error::InvalidWidth(0).is_config());
        assert!(Error::InvalidOverlapWindow(0).is_config());
        assert!(!Error::NoFragments.is_config());
    }
}
