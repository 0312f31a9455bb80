//! Per-field extractors for roster and abstract subtrees.
//!
//! Each function accepts the (possibly absent) list node located by the
//! assembler and flattens its repeated substructures into strings.

use roxmltree::Node;

use crate::config::{GRANT_CONNECTOR, SECTION_CONNECTOR, SET_CONNECTOR, TEXT_CONNECTOR};
use crate::xml::{attr_text, child_text, element_children, find_child, find_children, has_tag, mixed_text};

/// Flatten an `Abstract` node into newline-joined sections.
///
/// Each element child contributes one section: `"Label:text"` when it
/// carries a `Label` attribute, bare text otherwise. Unlabeled children
/// such as `CopyrightInformation` are kept; inline markup is discarded.
pub fn abstract_text(node: Option<Node<'_, '_>>) -> String {
    let Some(node) = node else {
        return String::new();
    };

    let mut sections: Vec<String> = Vec::new();
    for child in element_children(node) {
        let label = attr_text(Some(child), &["Label"], "-", false);
        let content = mixed_text(Some(child), TEXT_CONNECTOR);
        if label.is_empty() && content.is_empty() {
            continue;
        }
        if label.is_empty() {
            sections.push(content);
        } else {
            sections.push(format!("{label}:{content}"));
        }
    }
    sections.join(SECTION_CONNECTOR)
}

/// Flatten a `GrantList` node into `id:agency:country`-shaped entries.
pub fn grant_list(node: Option<Node<'_, '_>>) -> Vec<String> {
    let Some(node) = node else {
        return Vec::new();
    };

    find_children(node, "Grant")
        .map(|grant| child_text(Some(grant), &[], GRANT_CONNECTOR, false))
        .collect()
}

/// Flatten a `MeshHeadingList` node into `UID:text` entries.
///
/// Every element child of a heading contributes one entry, so a heading
/// with qualifiers yields one entry per descriptor and qualifier.
pub fn mesh_heading_list(node: Option<Node<'_, '_>>) -> Vec<String> {
    let Some(node) = node else {
        return Vec::new();
    };

    find_children(node, "MeshHeading")
        .flat_map(element_children)
        .map(|term| {
            format!(
                "{}:{}",
                attr_text(Some(term), &["UI"], "-", false),
                mixed_text(Some(term), TEXT_CONNECTOR)
            )
        })
        .collect()
}

/// Flatten an `ArticleIdList` node into `type:value` entries.
pub fn article_id_list(node: Option<Node<'_, '_>>) -> Vec<String> {
    let Some(node) = node else {
        return Vec::new();
    };

    find_children(node, "ArticleId")
        .map(article_id_entry)
        .collect()
}

/// Flatten a `ReferenceList` node into `citation(type:value|…)` entries.
///
/// The identifier list's presence is checked as a direct child, but the
/// identifiers themselves are gathered from the whole reference subtree.
pub fn reference_list(node: Option<Node<'_, '_>>) -> Vec<String> {
    let Some(node) = node else {
        return Vec::new();
    };

    find_children(node, "Reference")
        .map(|reference| {
            let citation = child_text(Some(reference), &["Citation"], "-", false);

            let mut ids: Vec<String> = Vec::new();
            if find_child(reference, "ArticleIdList").is_some() {
                for aid in reference.descendants().filter(|n| has_tag(*n, "ArticleId")) {
                    ids.push(article_id_entry(aid));
                }
            }

            format!("{citation}({})", ids.join(SET_CONNECTOR))
        })
        .collect()
}

/// Render one `ArticleId` element as `type:value`.
fn article_id_entry(node: Node<'_, '_>) -> String {
    format!(
        "{}:{}",
        attr_text(Some(node), &["IdType"], "-", false),
        mixed_text(Some(node), TEXT_CONNECTOR)
    )
}
