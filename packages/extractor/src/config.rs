//! Configuration constants for the extractor.
//!
//! The schema the extractor reads is fixed: the tag paths and connector
//! characters below are the whole configuration surface of the core.

/// Width of a rendered PMID; shorter numeric IDs are zero-left-padded.
pub const PMID_WIDTH: usize = 8;

/// Connector between record fields in a serialized line.
pub const FIELD_CONNECTOR: &str = "\t";

/// Connector between entries of a deduplicated set or roster.
pub const SET_CONNECTOR: &str = "|";

/// Connector between components of a composite date (`Year-Month-Day`).
pub const DATE_CONNECTOR: &str = "-";

/// Connector between pagination components.
pub const PAGE_CONNECTOR: &str = "|";

/// Connector between grant components (`id:agency:country`).
pub const GRANT_CONNECTOR: &str = ":";

/// Connector between abstract sections.
pub const SECTION_CONNECTOR: &str = "\n";

/// Connector between fragments of flattened mixed content.
pub const TEXT_CONNECTOR: &str = " ";

/// Tag paths from an article element (or its citation/processing halves)
/// to each field's source node. Paths descend one direct-child level per
/// `/`-separated segment.
pub mod paths {
    /// Citation half of an article element.
    pub const MEDLINE_CITATION: &str = "MedlineCitation";
    /// Processing-metadata half of an article element.
    pub const PUBMED_DATA: &str = "PubmedData";

    // Relative to MedlineCitation.
    pub const PMID: &str = "PMID";
    pub const DATE_COMPLETED: &str = "DateCompleted";
    pub const DATE_REVISED: &str = "DateRevised";
    pub const ISSN: &str = "Article/Journal/ISSN";
    pub const JOURNAL_TITLE: &str = "Article/Journal/Title";
    pub const ISO_ABBREVIATION: &str = "Article/Journal/ISOAbbreviation";
    pub const JOURNAL_ISSUE: &str = "Article/Journal/JournalIssue";
    pub const PUB_DATE: &str = "Article/Journal/JournalIssue/PubDate";
    pub const ARTICLE_TITLE: &str = "Article/ArticleTitle";
    pub const PAGINATION: &str = "Article/Pagination";
    pub const ABSTRACT: &str = "Article/Abstract";
    pub const LANGUAGE: &str = "Article/Language";
    pub const ELOCATION_ID: &str = "Article/ELocationID";
    pub const AUTHOR_LIST: &str = "Article/AuthorList";
    pub const GRANT_LIST: &str = "Article/GrantList";
    pub const MESH_HEADING_LIST: &str = "MeshHeadingList";

    // Relative to PubmedData.
    pub const ARTICLE_ID_LIST: &str = "ArticleIdList";
    pub const PUBLICATION_STATUS: &str = "PublicationStatus";
    pub const REFERENCE_LIST: &str = "ReferenceList";
}
