//! Core record types for extracted articles.
//!
//! Every field an article can yield exists on [`Record`] with an explicit
//! empty default; downstream consumers never see an absent field.

use std::fmt;

use serde::Serialize;

use crate::config::{FIELD_CONNECTOR, PMID_WIDTH, SET_CONNECTOR};

/// Render a PMID as a fixed-width, zero-left-padded string.
///
/// # Examples
/// ```
/// use medrecord_extractor::record::pad_pmid;
///
/// assert_eq!(pad_pmid("1234"), "00001234");
/// assert_eq!(pad_pmid("31411183"), "31411183");
/// ```
#[must_use]
pub fn pad_pmid(raw: &str) -> String {
    let width = PMID_WIDTH;
    format!("{raw:0>width$}")
}

/// An insertion-ordered string set.
///
/// Keeps first-seen order, drops duplicates. Used for per-author
/// identifier, affiliation and email collection, where order must follow
/// the source document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderedSet {
    items: Vec<String>,
}

impl OrderedSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, ignoring it if already present.
    ///
    /// Returns `true` if the value was newly inserted.
    pub fn insert(&mut self, value: impl Into<String>) -> bool {
        let value = value.into();
        if self.items.contains(&value) {
            return false;
        }
        self.items.push(value);
        true
    }

    /// Number of distinct values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the set holds no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Consume the set, yielding values in insertion order.
    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        self.items
    }
}

/// One author of an article.
///
/// Either `full_name` holds a collective name (with `initial_name` empty),
/// or `full_name`/`initial_name` hold the last-name+fore-name and
/// last-name+initials forms of a personal name. The three list fields are
/// deduplicated, insertion-ordered sets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AuthorEntry {
    #[serde(rename = "FullName")]
    pub full_name: String,

    #[serde(rename = "InitialName")]
    pub initial_name: String,

    #[serde(rename = "Identifier")]
    pub identifiers: Vec<String>,

    #[serde(rename = "Affiliation")]
    pub affiliations: Vec<String>,

    #[serde(rename = "eMail")]
    pub emails: Vec<String>,
}

impl AuthorEntry {
    /// The five serialized sub-fields, list values pipe-joined.
    #[must_use]
    pub fn fields(&self) -> [String; 5] {
        [
            self.full_name.clone(),
            self.initial_name.clone(),
            self.identifiers.join(SET_CONNECTOR),
            self.affiliations.join(SET_CONNECTOR),
            self.emails.join(SET_CONNECTOR),
        ]
    }
}

/// One extracted article record.
///
/// Field order matches the fully-qualified serialization; missing source
/// data leaves the documented empty default in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Record {
    /// PubMed ID, zero-padded to eight characters.
    #[serde(rename = "PMID")]
    pub pmid: String,

    /// Completion date, `Year-Month-Day`.
    #[serde(rename = "DateCompleted")]
    pub date_completed: String,

    /// Revision date, `Year-Month-Day`.
    #[serde(rename = "DateRevised")]
    pub date_revised: String,

    /// Journal ISSN.
    #[serde(rename = "ISSN")]
    pub issn: String,

    /// Journal title.
    #[serde(rename = "JournalTitle")]
    pub journal_title: String,

    /// ISO journal title abbreviation.
    #[serde(rename = "ISOAbbreviation")]
    pub iso_abbreviation: String,

    /// Journal volume and issue, `volume-issue`.
    #[serde(rename = "VolumeIssue")]
    pub volume_issue: String,

    /// Journal publication date, `year-month`.
    #[serde(rename = "PubDate")]
    pub pub_date: String,

    /// Article title, inline markup flattened.
    #[serde(rename = "Title")]
    pub title: String,

    /// Article pagination.
    #[serde(rename = "Pagination")]
    pub pagination: String,

    /// Abstract text, sections newline-joined as `Label:text`.
    #[serde(rename = "Abstract")]
    pub abstract_text: String,

    /// Article language code.
    #[serde(rename = "Language")]
    pub language: String,

    /// Electronic location ID, `type:value`.
    #[serde(rename = "ELocationID")]
    pub elocation_id: String,

    /// Author roster.
    #[serde(rename = "AuthorList")]
    pub authors: Vec<AuthorEntry>,

    /// Grant roster, `id:agency:country` entries.
    #[serde(rename = "GrantList")]
    pub grants: Vec<String>,

    /// MeSH heading roster, `UID:text` entries.
    #[serde(rename = "MeshHeadingList")]
    pub mesh_headings: Vec<String>,

    /// Article identifier roster, `type:value` entries.
    #[serde(rename = "ArticleIdList")]
    pub article_ids: Vec<String>,

    /// Publication status.
    #[serde(rename = "PublicationStatus")]
    pub publication_status: String,

    /// Reference roster, `citation(type:value|…)` entries.
    #[serde(rename = "ReferenceList")]
    pub references: Vec<String>,
}

impl Record {
    /// Default serialization: the five-field subset, tab-joined.
    #[must_use]
    pub fn to_line(&self) -> String {
        [
            self.pmid.as_str(),
            self.journal_title.as_str(),
            self.volume_issue.as_str(),
            self.issn.as_str(),
            self.title.as_str(),
        ]
        .join(FIELD_CONNECTOR)
    }

    /// Fully-qualified serialization: the whole field set, tab-joined.
    ///
    /// Roster entries are pipe-joined; each author's five sub-fields are
    /// joined with `;` before the authors are pipe-joined.
    #[must_use]
    pub fn to_full_line(&self) -> String {
        let authors = self
            .authors
            .iter()
            .map(|a| a.fields().join(";"))
            .collect::<Vec<_>>()
            .join(SET_CONNECTOR);

        [
            self.pmid.clone(),
            self.date_completed.clone(),
            self.date_revised.clone(),
            self.issn.clone(),
            self.journal_title.clone(),
            self.iso_abbreviation.clone(),
            self.volume_issue.clone(),
            self.pub_date.clone(),
            self.title.clone(),
            self.pagination.clone(),
            self.abstract_text.clone(),
            self.language.clone(),
            self.elocation_id.clone(),
            authors,
            self.grants.join(SET_CONNECTOR),
            self.mesh_headings.join(SET_CONNECTOR),
            self.article_ids.join(SET_CONNECTOR),
            self.publication_status.clone(),
            self.references.join(SET_CONNECTOR),
        ]
        .join(FIELD_CONNECTOR)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_line())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> Record {
        Record {
            pmid: pad_pmid("1234"),
            issn: "0028-0836".to_string(),
            journal_title: "Nature".to_string(),
            volume_issue: "585-7824".to_string(),
            title: "Array programming with NumPy.".to_string(),
            ..Record::default()
        }
    }

    #[test]
    fn test_pad_pmid_short() {
        assert_eq!(pad_pmid("1234"), "00001234");
        assert_eq!(pad_pmid("1"), "00000001");
    }

    #[test]
    fn test_pad_pmid_full_width() {
        assert_eq!(pad_pmid("31411183"), "31411183");
    }

    #[test]
    fn test_pad_pmid_empty() {
        assert_eq!(pad_pmid(""), "00000000");
    }

    #[test]
    fn test_ordered_set_deduplicates() {
        let mut set = OrderedSet::new();
        assert!(set.insert("a@x.org"));
        assert!(!set.insert("a@x.org"));
        assert!(set.insert("b@x.org"));

        assert_eq!(set.len(), 2);
        assert_eq!(set.into_vec(), vec!["a@x.org", "b@x.org"]);
    }

    #[test]
    fn test_ordered_set_preserves_insertion_order() {
        let mut set = OrderedSet::new();
        set.insert("z");
        set.insert("a");
        set.insert("m");
        assert_eq!(set.into_vec(), vec!["z", "a", "m"]);
    }

    #[test]
    fn test_record_to_line() {
        let record = sample_record();
        assert_eq!(
            record.to_line(),
            "00001234\tNature\t585-7824\t0028-0836\tArray programming with NumPy."
        );
    }

    #[test]
    fn test_record_display_matches_default_line() {
        let record = sample_record();
        assert_eq!(record.to_string(), record.to_line());
    }

    #[test]
    fn test_record_to_full_line_field_count() {
        let record = sample_record();
        let line = record.to_full_line();
        assert_eq!(line.split('\t').count(), 19);
    }

    #[test]
    fn test_record_to_full_line_authors() {
        let mut record = sample_record();
        record.authors.push(AuthorEntry {
            full_name: "Harris Charles R".to_string(),
            initial_name: "Harris CR".to_string(),
            identifiers: vec!["ORCID:0000-0001-8224-3433".to_string()],
            affiliations: vec!["Quansight, Austin, TX, USA".to_string()],
            emails: Vec::new(),
        });

        let line = record.to_full_line();
        assert!(line.contains(
            "Harris Charles R;Harris CR;ORCID:0000-0001-8224-3433;Quansight, Austin, TX, USA;"
        ));
    }

    #[test]
    fn test_author_entry_fields_pipe_join() {
        let entry = AuthorEntry {
            full_name: "Kirchner Julian".to_string(),
            initial_name: "Kirchner J".to_string(),
            identifiers: vec!["ORCID:0000-0001-8224-3433".to_string()],
            affiliations: vec!["A".to_string(), "B".to_string()],
            emails: vec!["a@x.org".to_string()],
        };

        assert_eq!(
            entry.fields(),
            [
                "Kirchner Julian".to_string(),
                "Kirchner J".to_string(),
                "ORCID:0000-0001-8224-3433".to_string(),
                "A|B".to_string(),
                "a@x.org".to_string(),
            ]
        );
    }

    #[test]
    fn test_record_default_is_empty() {
        let record = Record::default();
        assert_eq!(record.to_line(), "\t\t\t\t");
        assert!(record.authors.is_empty());
        assert!(record.references.is_empty());
    }

    #[test]
    fn test_record_serializes_canonical_field_names() {
        let record = sample_record();
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["PMID"], "00001234");
        assert_eq!(json["JournalTitle"], "Nature");
        assert!(json["AuthorList"].is_array());
        assert!(json["ReferenceList"].is_array());
    }
}
