//! Data model for fragments and merged output.

mod document;
mod fragment;
mod paragraph;

pub use document::MergedDocument;
pub use fragment::Fragment;
pub use paragraph::Paragraph;
