//! Record assembly: from a parsed document tree to extracted records.
//!
//! [`parse`] walks every `PubmedArticle` element in document order and
//! fills one [`Record`] per article. Each field is located with a
//! schema-aware direct-child path from [`crate::config::paths`]; an
//! absent sub-node leaves the field's empty default in place.

mod authors;
mod fields;

pub use authors::extract_authors;
pub use fields::{abstract_text, article_id_list, grant_list, mesh_heading_list, reference_list};

use roxmltree::{Document, Node};

use crate::config::{paths, DATE_CONNECTOR, PAGE_CONNECTOR, TEXT_CONNECTOR};
use crate::error::Result;
use crate::record::{pad_pmid, Record};
use crate::xml::{attr_text, child_text, find_by_path, find_child, has_tag, mixed_text};

/// Lazy, forward-only iterator over a document's article records.
///
/// Created by [`parse`]; yields one [`Record`] per `PubmedArticle`
/// element, in document order.
pub struct Records<'a, 'input> {
    descendants: roxmltree::Descendants<'a, 'input>,
}

impl Iterator for Records<'_, '_> {
    type Item = Record;

    fn next(&mut self) -> Option<Record> {
        self.descendants
            .find(|node| has_tag(*node, "PubmedArticle"))
            .map(extract_record)
    }
}

/// Iterate all article records in a parsed document.
///
/// The sequence is lazy and forward-only; the tree is read exactly once
/// and never modified. A document without article elements yields an
/// empty sequence.
pub fn parse<'a, 'input>(doc: &'a Document<'input>) -> Records<'a, 'input> {
    Records {
        descendants: doc.descendants(),
    }
}

/// Parse XML text and collect all article records.
///
/// This is the whole-input convenience entry point; parse failures are
/// fatal for the input (no partial records are produced).
pub fn extract_records(xml: &str) -> Result<Vec<Record>> {
    let doc = Document::parse(xml)?;
    let records: Vec<Record> = parse(&doc).collect();
    tracing::debug!(records = records.len(), "extraction finished");
    Ok(records)
}

/// Locate a sub-node by path from an optional starting node.
fn locate<'a, 'input>(
    node: Option<Node<'a, 'input>>,
    path: &str,
) -> Option<Node<'a, 'input>> {
    node.and_then(|n| find_by_path(n, path))
}

/// Fill one record from a `PubmedArticle` element.
fn extract_record(article: Node<'_, '_>) -> Record {
    let citation = find_child(article, paths::MEDLINE_CITATION);
    let data = find_child(article, paths::PUBMED_DATA);

    let elocation = locate(citation, paths::ELOCATION_ID);

    Record {
        pmid: pad_pmid(&mixed_text(locate(citation, paths::PMID), TEXT_CONNECTOR)),
        date_completed: child_text(
            locate(citation, paths::DATE_COMPLETED),
            &[],
            DATE_CONNECTOR,
            false,
        ),
        date_revised: child_text(
            locate(citation, paths::DATE_REVISED),
            &[],
            DATE_CONNECTOR,
            false,
        ),
        issn: mixed_text(locate(citation, paths::ISSN), TEXT_CONNECTOR),
        journal_title: mixed_text(locate(citation, paths::JOURNAL_TITLE), TEXT_CONNECTOR),
        iso_abbreviation: mixed_text(locate(citation, paths::ISO_ABBREVIATION), TEXT_CONNECTOR),
        volume_issue: child_text(
            locate(citation, paths::JOURNAL_ISSUE),
            &["Volume", "Issue"],
            DATE_CONNECTOR,
            false,
        ),
        pub_date: child_text(locate(citation, paths::PUB_DATE), &[], DATE_CONNECTOR, false),
        title: mixed_text(locate(citation, paths::ARTICLE_TITLE), TEXT_CONNECTOR),
        pagination: child_text(
            locate(citation, paths::PAGINATION),
            &[],
            PAGE_CONNECTOR,
            false,
        ),
        abstract_text: abstract_text(locate(citation, paths::ABSTRACT)),
        language: mixed_text(locate(citation, paths::LANGUAGE), TEXT_CONNECTOR),
        elocation_id: elocation
            .map(|node| {
                format!(
                    "{}:{}",
                    attr_text(Some(node), &["EIdType"], DATE_CONNECTOR, false),
                    mixed_text(Some(node), TEXT_CONNECTOR)
                )
            })
            .unwrap_or_default(),
        authors: extract_authors(locate(citation, paths::AUTHOR_LIST)),
        grants: grant_list(locate(citation, paths::GRANT_LIST)),
        mesh_headings: mesh_heading_list(locate(citation, paths::MESH_HEADING_LIST)),
        article_ids: article_id_list(locate(data, paths::ARTICLE_ID_LIST)),
        publication_status: mixed_text(locate(data, paths::PUBLICATION_STATUS), TEXT_CONNECTOR),
        references: reference_list(locate(data, paths::REFERENCE_LIST)),
    }
}
