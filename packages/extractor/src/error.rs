//! Error types for the extractor.
//!
//! Only two failure classes are fatal: unreadable input and XML that does
//! not parse at all. Everything below the document level (missing
//! subtrees, malformed author entries) is recovered locally by the
//! extractors and never surfaces here.

use thiserror::Error;

/// Main error type for the extractor library.
#[derive(Debug, Error)]
pub enum ExtractorError {
    /// XML parsing failed; the whole input is rejected.
    #[error("XML parsing failed: {0}")]
    XmlParse(#[from] roxmltree::Error),

    /// Malformed author entry; recovered per author by the roster builder.
    #[error("Malformed author entry: {0}")]
    MalformedAuthor(String),

    /// IO error while reading input or writing output.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for extractor operations.
pub type Result<T> = std::result::Result<T, ExtractorError>;
