//! Generic operations for navigating and flattening a parsed DOM tree.
//!
//! Navigation descends one direct-child level per step: a tag name that
//! recurs at an unrelated depth elsewhere in the document can never be
//! selected in place of the intended node.

use roxmltree::Node;

/// Get the tag name without namespace prefix.
pub fn tag_name<'a>(node: Node<'a, '_>) -> &'a str {
    node.tag_name().name()
}

/// Check if a node is an element with a specific tag name.
pub fn has_tag(node: Node<'_, '_>, tag: &str) -> bool {
    node.is_element() && tag_name(node) == tag
}

/// Find the first child element with the given tag name.
///
/// # Arguments
/// * `node` - Parent node to search in
/// * `tag` - Tag name to search for
///
/// # Returns
/// First matching child element, or `None` if not found
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use medrecord_extractor::xml::find_child;
///
/// let xml = r#"<Author><LastName>Kirchner</LastName><ForeName>Julian</ForeName></Author>"#;
/// let doc = Document::parse(xml).unwrap();
/// let author = doc.root_element();
///
/// assert!(find_child(author, "LastName").is_some());
/// assert!(find_child(author, "CollectiveName").is_none());
/// ```
pub fn find_child<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    node.children()
        .find(|child| child.is_element() && tag_name(*child) == tag)
}

/// Find all child elements with the given tag name.
///
/// # Arguments
/// * `node` - Parent node to search in
/// * `tag` - Tag name to search for
///
/// # Returns
/// Iterator over matching child elements, in document order
pub fn find_children<'a, 'input>(
    node: Node<'a, 'input>,
    tag: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children()
        .filter(move |child| child.is_element() && tag_name(*child) == tag)
}

/// Find a descendant element matching a path of tag names.
///
/// Each `/`-separated segment selects the first direct child element with
/// that tag name; the match becomes the current node for the next segment.
///
/// # Arguments
/// * `node` - Starting node
/// * `path` - Slash-separated path of tag names (e.g., "Article/Journal/ISSN")
///
/// # Returns
/// Matching element, or `None` if any segment has no match
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use medrecord_extractor::xml::find_by_path;
///
/// let xml = r#"<Article><Journal><ISSN>1097-0347</ISSN></Journal></Article>"#;
/// let doc = Document::parse(xml).unwrap();
/// let article = doc.root_element();
///
/// let issn = find_by_path(article, "Journal/ISSN");
/// assert!(issn.is_some());
/// assert_eq!(issn.unwrap().text(), Some("1097-0347"));
/// assert!(find_by_path(article, "Journal/Title").is_none());
/// ```
pub fn find_by_path<'a, 'input>(node: Node<'a, 'input>, path: &str) -> Option<Node<'a, 'input>> {
    let mut current = node;

    for part in path.split('/') {
        current = find_child(current, part)?;
    }

    Some(current)
}

/// Get all element children of a node.
pub fn element_children<'a, 'input>(
    node: Node<'a, 'input>,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(|child| child.is_element())
}

/// Get the direct text content of a node, trimmed.
///
/// Concatenates the node's text-node children only; text inside nested
/// elements is not included.
pub fn direct_text(node: Node<'_, '_>) -> String {
    node.children()
        .filter(|child| child.is_text())
        .filter_map(|child| child.text())
        .collect::<String>()
        .trim()
        .to_string()
}

/// Flatten direct child elements of a node into a connected string.
///
/// For each direct child element (filtered to `keys` when `keys` is
/// non-empty), takes its direct text content trimmed, skipping empty
/// values. With `with_keys`, each value is prefixed by its tag name and a
/// colon.
///
/// # Arguments
/// * `node` - Parent node, or `None` for an absent subtree
/// * `keys` - Child tag names to include; empty means all
/// * `connector` - String joining the collected values
/// * `with_keys` - Prefix each value with `tag:`
///
/// # Returns
/// Connected child values, or an empty string for a missing node
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use medrecord_extractor::xml::child_text;
///
/// let xml = r#"<DateCompleted><Year>2019</Year><Month>12</Month><Day>05</Day></DateCompleted>"#;
/// let doc = Document::parse(xml).unwrap();
///
/// assert_eq!(child_text(Some(doc.root_element()), &[], "-", false), "2019-12-05");
/// assert_eq!(child_text(None, &[], "-", false), "");
/// ```
pub fn child_text(
    node: Option<Node<'_, '_>>,
    keys: &[&str],
    connector: &str,
    with_keys: bool,
) -> String {
    let Some(node) = node else {
        return String::new();
    };

    let mut parts: Vec<String> = Vec::new();
    for child in element_children(node) {
        let name = tag_name(child);
        if !keys.is_empty() && !keys.contains(&name) {
            continue;
        }
        let content = direct_text(child);
        if content.is_empty() {
            continue;
        }
        if with_keys {
            parts.push(format!("{name}:{content}"));
        } else {
            parts.push(content);
        }
    }
    parts.join(connector)
}

/// Flatten a node's attributes into a connected string.
///
/// Attributes are visited in document order and filtered to `keys` when
/// `keys` is non-empty. With `with_keys`, each value is prefixed by the
/// attribute name and a colon.
pub fn attr_text(
    node: Option<Node<'_, '_>>,
    keys: &[&str],
    connector: &str,
    with_keys: bool,
) -> String {
    let Some(node) = node else {
        return String::new();
    };

    let mut parts: Vec<String> = Vec::new();
    for attr in node.attributes() {
        let name = attr.name();
        if !keys.is_empty() && !keys.contains(&name) {
            continue;
        }
        if with_keys {
            parts.push(format!("{}:{}", name, attr.value()));
        } else {
            parts.push(attr.value().to_string());
        }
    }
    parts.join(connector)
}

/// Flatten mixed content into a connected string, discarding inline markup.
///
/// Walks the node's direct children in document order: a text child is
/// trimmed and kept if non-empty; an element child contributes its own
/// direct text, so inline tags like `<sup>` or `<i>` lose their markup but
/// keep their text.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use medrecord_extractor::xml::mixed_text;
///
/// let xml = r#"<ArticleTitle>Impact of <sup>18</sup> F-FDG PET/MRI.</ArticleTitle>"#;
/// let doc = Document::parse(xml).unwrap();
///
/// assert_eq!(mixed_text(Some(doc.root_element()), " "), "Impact of 18 F-FDG PET/MRI.");
/// ```
pub fn mixed_text(node: Option<Node<'_, '_>>, connector: &str) -> String {
    let Some(node) = node else {
        return String::new();
    };

    let mut parts: Vec<String> = Vec::new();
    for child in node.children() {
        if child.is_text() {
            let content = child.text().unwrap_or_default().trim();
            if !content.is_empty() {
                parts.push(content.to_string());
            }
        } else if child.is_element() {
            let content = direct_text(child);
            if !content.is_empty() {
                parts.push(content);
            }
        }
    }
    parts.join(connector)
}
