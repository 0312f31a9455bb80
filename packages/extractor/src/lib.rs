//! MedRecord extractor - Convert PubMed article-set XML into flat tabular records.
//!
//! This crate parses article-set XML files as distributed at
//! <https://ftp.ncbi.nlm.nih.gov/pubmed/baseline/> and flattens each
//! `PubmedArticle` element into a [`Record`] with a fixed field set,
//! suitable for downstream tabular processing.
//!
//! # Example
//!
//! ```
//! use medrecord_extractor::extract_records;
//!
//! let xml = r#"<PubmedArticleSet>
//!     <PubmedArticle>
//!         <MedlineCitation><PMID>1234</PMID></MedlineCitation>
//!     </PubmedArticle>
//! </PubmedArticleSet>"#;
//!
//! let records = extract_records(xml).unwrap();
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].pmid, "00001234");
//! ```
//!
//! # Architecture
//!
//! - [`config`]: schema tag paths and connector constants
//! - [`error`]: error types and Result alias
//! - [`input`]: file/stdin reading with gzip support
//! - [`record`]: record and author types
//! - [`xml`]: generic tree navigation and flattening
//! - [`extract`]: field extractors and record assembly
//! - [`tsv`]: tab-separated output
//! - [`cli`]: command-line interface

pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod input;
pub mod record;
pub mod tsv;
pub mod xml;

// Re-export main entry points
pub use extract::{extract_records, parse, Records};

// Re-export commonly used items
pub use error::{ExtractorError, Result};
pub use record::{AuthorEntry, OrderedSet, Record};
