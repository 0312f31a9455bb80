//! Author roster extraction.
//!
//! Besides the name forms, every author's identifier and affiliation
//! sub-elements are mined for embedded email addresses and ORCID
//! identifiers; whatever text remains is split into individual
//! affiliations. All three collections deduplicate in insertion order.

use regex::{Captures, Regex};
use roxmltree::Node;
use std::sync::LazyLock;

use crate::error::{ExtractorError, Result};
use crate::record::{AuthorEntry, OrderedSet};
use crate::xml::{attr_text, child_text, find_children, mixed_text};

/// Regex for an embedded email address.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\w.\-]+@[\w.\-]+").expect("valid regex"));

/// Regex for trailing dots and whitespace on a captured email.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static TRAILING_PUNCT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.\s]+$").expect("valid regex"));

/// Regex for the label some affiliations put before an email address.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static ELECTRONIC_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Electronic address:\s+").expect("valid regex"));

/// Regex for a bare ORCID identifier (`ORCID: XXXX-XXXX-XXXX-XXXX`).
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static ORCID_BARE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"ORCID:\s*(\w{4}-\w{4}-\w{4}-\w{4})\.*").expect("valid regex"));

/// Regex for a URL-form ORCID identifier (`ORCID: https://orcid.org/…`).
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static ORCID_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"ORCID:\s*https?://orcid\.org/(\w{4}-\w{4}-\w{4}-\w{4})").expect("valid regex")
});

/// Regex splitting a flattened affiliation string into entries.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static AFFILIATION_SPLIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[;|]").expect("valid regex"));

/// Extract the author roster from an `AuthorList` node.
///
/// A failure while mining one author's identifiers or affiliations leaves
/// that author's three trailing collections empty; the name fields are
/// kept and the roster continues.
pub fn extract_authors(list: Option<Node<'_, '_>>) -> Vec<AuthorEntry> {
    let Some(list) = list else {
        return Vec::new();
    };

    find_children(list, "Author").map(author_entry).collect()
}

/// Build one roster entry from an `Author` element.
fn author_entry(author: Node<'_, '_>) -> AuthorEntry {
    let mut emails = OrderedSet::new();

    let collective = child_text(Some(author), &["CollectiveName"], " ", false);
    let (full_name, initial_name) = if collective.is_empty() {
        (
            child_text(Some(author), &["LastName", "ForeName"], " ", false),
            child_text(Some(author), &["LastName", "Initials"], " ", false),
        )
    } else {
        let cleaned = scrub_emails(&collective, &mut emails);
        (cleaned.trim().to_string(), String::new())
    };

    match author_details(author, emails) {
        Ok((identifiers, affiliations, emails)) => AuthorEntry {
            full_name,
            initial_name,
            identifiers: identifiers.into_vec(),
            affiliations: affiliations.into_vec(),
            emails: emails.into_vec(),
        },
        Err(err) => {
            tracing::warn!(author = %full_name, error = %err, "author detail extraction failed, keeping name fields only");
            AuthorEntry {
                full_name,
                initial_name,
                ..AuthorEntry::default()
            }
        }
    }
}

/// Mine an author's `Identifier` and `AffiliationInfo` sub-elements.
///
/// Returns the identifier, affiliation and email sets for the entry.
fn author_details(
    author: Node<'_, '_>,
    mut emails: OrderedSet,
) -> Result<(OrderedSet, OrderedSet, OrderedSet)> {
    let mut identifiers = OrderedSet::new();
    let mut affiliations = OrderedSet::new();

    for ident in find_children(author, "Identifier") {
        let source = attr_text(Some(ident), &["Source"], "-", false);
        let value = mixed_text(Some(ident), "|");
        if !source.is_empty() && !value.is_empty() {
            scrub_identifiers(&format!("{source}:{value}"), &mut identifiers)?;
        }
    }

    for info in find_children(author, "AffiliationInfo") {
        let text = child_text(Some(info), &["Affiliation"], "|", false);
        let text = scrub_identifiers(&text, &mut identifiers)?;
        let text = scrub_emails(&text, &mut emails);
        split_affiliations(&text, &mut affiliations);
    }

    Ok((identifiers, affiliations, emails))
}

/// Collect embedded email addresses into `emails` and strip them from the
/// text, together with any `Electronic address:` label.
fn scrub_emails(text: &str, emails: &mut OrderedSet) -> String {
    for m in EMAIL_PATTERN.find_iter(text) {
        emails.insert(TRAILING_PUNCT.replace(m.as_str(), "").into_owned());
    }
    let cleaned = EMAIL_PATTERN.replace_all(text, "");
    ELECTRONIC_LABEL.replace_all(&cleaned, "").into_owned()
}

/// Collect ORCID identifiers (bare or URL form) into `identifiers` and
/// strip them from the text.
fn scrub_identifiers(text: &str, identifiers: &mut OrderedSet) -> Result<String> {
    for caps in ORCID_BARE.captures_iter(text) {
        identifiers.insert(format!("ORCID:{}", capture_group(&caps, 1)?));
    }
    let cleaned = ORCID_BARE.replace_all(text, "").into_owned();

    for caps in ORCID_URL.captures_iter(&cleaned) {
        identifiers.insert(format!("ORCID:{}", capture_group(&caps, 1)?));
    }
    Ok(ORCID_URL.replace_all(&cleaned, "").into_owned())
}

/// Split residual affiliation text on `;`/`|` into trimmed entries.
fn split_affiliations(text: &str, affiliations: &mut OrderedSet) {
    for part in AFFILIATION_SPLIT.split(text) {
        let trimmed = part.trim_matches(|c: char| c == '.' || c.is_whitespace());
        if !trimmed.is_empty() {
            affiliations.insert(trimmed);
        }
    }
}

/// Checked capture-group access.
fn capture_group(caps: &Captures<'_>, index: usize) -> Result<String> {
    caps.get(index)
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| ExtractorError::MalformedAuthor(format!("missing capture group {index}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use roxmltree::Document;

    fn authors_from(xml: &str) -> Vec<AuthorEntry> {
        let doc = Document::parse(xml).unwrap();
        extract_authors(Some(doc.root_element()))
    }

    #[test]
    fn test_personal_name_forms() {
        let authors = authors_from(
            r#"<AuthorList>
                <Author>
                    <LastName>Kirchner</LastName>
                    <ForeName>Julian</ForeName>
                    <Initials>J</Initials>
                </Author>
            </AuthorList>"#,
        );

        assert_eq!(authors.len(), 1);
        assert_eq!(authors[0].full_name, "Kirchner Julian");
        assert_eq!(authors[0].initial_name, "Kirchner J");
    }

    #[test]
    fn test_collective_name_with_embedded_email() {
        let authors = authors_from(
            r#"<AuthorList>
                <Author><CollectiveName>NumPy Consortium team@numpy.org</CollectiveName></Author>
            </AuthorList>"#,
        );

        assert_eq!(authors[0].full_name, "NumPy Consortium");
        assert_eq!(authors[0].initial_name, "");
        assert_eq!(authors[0].emails, vec!["team@numpy.org"]);
    }

    #[test]
    fn test_orcid_from_identifier_element() {
        let authors = authors_from(
            r#"<AuthorList>
                <Author>
                    <LastName>Kirchner</LastName>
                    <ForeName>Julian</ForeName>
                    <Identifier Source="ORCID">0000-0001-8224-3433</Identifier>
                </Author>
            </AuthorList>"#,
        );

        assert_eq!(authors[0].identifiers, vec!["ORCID:0000-0001-8224-3433"]);
    }

    #[test]
    fn test_orcid_in_affiliation_bare_form() {
        let authors = authors_from(
            r#"<AuthorList>
                <Author>
                    <LastName>Harris</LastName>
                    <AffiliationInfo>
                        <Affiliation>ORCID: 0000-0001-8224-3433. Quansight, Austin, TX, USA</Affiliation>
                    </AffiliationInfo>
                </Author>
            </AuthorList>"#,
        );

        assert_eq!(authors[0].identifiers, vec!["ORCID:0000-0001-8224-3433"]);
        assert_eq!(authors[0].affiliations, vec!["Quansight, Austin, TX, USA"]);
    }

    #[test]
    fn test_orcid_in_affiliation_url_form() {
        let authors = authors_from(
            r#"<AuthorList>
                <Author>
                    <LastName>Harris</LastName>
                    <AffiliationInfo>
                        <Affiliation>Quansight, Austin, TX, USA. ORCID: https://orcid.org/0000-0001-8224-3433</Affiliation>
                    </AffiliationInfo>
                </Author>
            </AuthorList>"#,
        );

        assert_eq!(authors[0].identifiers, vec!["ORCID:0000-0001-8224-3433"]);
        assert_eq!(authors[0].affiliations, vec!["Quansight, Austin, TX, USA"]);
    }

    #[test]
    fn test_email_with_electronic_address_label() {
        let authors = authors_from(
            r#"<AuthorList>
                <Author>
                    <LastName>Kirchner</LastName>
                    <AffiliationInfo>
                        <Affiliation>University of Dusseldorf, Germany. Electronic address: kirchner@uni-duesseldorf.de.</Affiliation>
                    </AffiliationInfo>
                </Author>
            </AuthorList>"#,
        );

        assert_eq!(authors[0].emails, vec!["kirchner@uni-duesseldorf.de"]);
        assert_eq!(authors[0].affiliations, vec!["University of Dusseldorf, Germany"]);
    }

    #[test]
    fn test_duplicate_affiliations_deduplicated() {
        let authors = authors_from(
            r#"<AuthorList>
                <Author>
                    <LastName>Schaarschmidt</LastName>
                    <AffiliationInfo>
                        <Affiliation>University of Dusseldorf, Germany.</Affiliation>
                        <Affiliation>University of Dusseldorf, Germany.</Affiliation>
                    </AffiliationInfo>
                </Author>
            </AuthorList>"#,
        );

        assert_eq!(authors[0].affiliations, vec!["University of Dusseldorf, Germany"]);
    }

    #[test]
    fn test_affiliation_split_on_semicolon_and_pipe() {
        let mut affiliations = OrderedSet::new();
        split_affiliations(
            "Google Research, Mountain View, CA, USA; Quansight, Austin, TX, USA",
            &mut affiliations,
        );

        assert_eq!(
            affiliations.into_vec(),
            vec![
                "Google Research, Mountain View, CA, USA",
                "Quansight, Austin, TX, USA"
            ]
        );
    }

    #[test]
    fn test_affiliation_split_drops_empty_fragments() {
        let mut affiliations = OrderedSet::new();
        split_affiliations("Quansight, Austin, TX, USA; ", &mut affiliations);

        assert_eq!(affiliations.into_vec(), vec!["Quansight, Austin, TX, USA"]);
    }

    #[test]
    fn test_scrub_emails_repeated_address_once() {
        let mut emails = OrderedSet::new();
        scrub_emails("a@x.org and again a@x.org", &mut emails);
        assert_eq!(emails.into_vec(), vec!["a@x.org"]);
    }

    #[test]
    fn test_multiple_identifier_elements_scanned() {
        let authors = authors_from(
            r#"<AuthorList>
                <Author>
                    <LastName>Harris</LastName>
                    <Identifier Source="ORCID">0000-0001-8224-3433</Identifier>
                    <Identifier Source="ORCID">0000-0002-1825-0097</Identifier>
                </Author>
            </AuthorList>"#,
        );

        assert_eq!(
            authors[0].identifiers,
            vec!["ORCID:0000-0001-8224-3433", "ORCID:0000-0002-1825-0097"]
        );
    }

    #[test]
    fn test_non_orcid_identifier_ignored() {
        // Only ORCID-shaped identifiers reach the set.
        let authors = authors_from(
            r#"<AuthorList>
                <Author>
                    <LastName>Harris</LastName>
                    <Identifier Source="GRID">grid.419254.a</Identifier>
                </Author>
            </AuthorList>"#,
        );

        assert!(authors[0].identifiers.is_empty());
    }

    #[test]
    fn test_missing_author_list() {
        assert!(extract_authors(None).is_empty());
    }

    #[test]
    fn test_empty_author_list() {
        let authors = authors_from("<AuthorList></AuthorList>");
        assert!(authors.is_empty());
    }
}
