//! Generic lookups over a parsed HTML tree.
//!
//! The tree is the arena built by `scraper`; every [`DomNode`] is a cheap copyable
//! handle into it. `parent()` is a plain back-reference into the arena, so upward
//! walks never own anything.

use ego_tree::NodeRef;
use scraper::Node;

/// A handle to one node of a parsed document.
pub type DomNode<'a> = NodeRef<'a, Node>;

/// The node categories the search engine distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Element,
    Text,
    Document,
    Other,
}

/// Classify a node.
pub fn kind(node: DomNode<'_>) -> NodeKind {
    match node.value() {
        Node::Element(_) => NodeKind::Element,
        Node::Text(_) => NodeKind::Text,
        Node::Document | Node::Fragment => NodeKind::Document,
        _ => NodeKind::Other,
    }
}

/// Text payload of a Text node, `None` for every other kind.
pub fn text_data<'a>(node: DomNode<'a>) -> Option<&'a str> {
    node.value().as_text().map(|text| &**text)
}

/// True if `node` is an element carrying `attr` with exactly `value`.
///
/// Comparison is byte-for-byte: `class="a b"` does not have class `a`.
pub fn has_attr(node: DomNode<'_>, attr: &str, value: &str) -> bool {
    node.value()
        .as_element()
        .and_then(|element| element.attr(attr))
        .is_some_and(|found| found == value)
}

/// True if `node` is an element with the given tag name.
pub fn is_element_named(node: DomNode<'_>, tag: &str) -> bool {
    node.value()
        .as_element()
        .is_some_and(|element| element.name() == tag)
}

/// First node in document order whose `id` attribute equals `id`.
///
/// Absence is a normal outcome, not an error.
pub fn find_by_id<'a>(root: DomNode<'a>, id: &str) -> Option<DomNode<'a>> {
    root.descendants().find(|node| has_attr(*node, "id", id))
}

/// Every node whose `class` attribute is exactly `class`, in document order.
///
/// This is whole-value equality, not token membership: a node with
/// `class="body conbody extra"` is not returned for `"body conbody"`.
pub fn find_all_by_class<'a>(root: DomNode<'a>, class: &str) -> Vec<DomNode<'a>> {
    root.descendants()
        .filter(|node| has_attr(*node, "class", class))
        .collect()
}

/// Concatenated text of every Text node under `node` (inclusive), pre-order.
///
/// Leading and trailing newlines are trimmed; other whitespace is kept as found.
pub fn flatten_text(node: DomNode<'_>) -> String {
    let mut out = String::new();
    flatten_text_into(node, &mut out);
    out
}

/// Append the flattened text of `node` to `out`.
///
/// Each text fragment is trimmed of newlines before it is appended. Since every
/// trimmed fragment begins and ends with a non-newline character, the
/// concatenation never gains leading or trailing newlines either.
pub fn flatten_text_into(node: DomNode<'_>, out: &mut String) {
    for text in node.descendants().filter_map(text_data) {
        out.push_str(trim_newlines(text));
    }
}

/// Strip `\n` (and only `\n`) from both ends.
pub fn trim_newlines(s: &str) -> &str {
    s.trim_matches('\n')
}
