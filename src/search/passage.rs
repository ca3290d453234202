//! Contextual passage extraction.
//!
//! A text node matching any search term is expanded to its nearest enclosing
//! paragraph element, followed by the paragraph's trailing siblings up to (but
//! not including) the next sibling marked with the boundary class.

use crate::config::Markup;
use crate::dom::{self, DomNode};
use crate::search::SearchTerms;
use ego_tree::iter::Descendants;
use scraper::Node;
use tracing::trace;

/// One expanded match.
#[derive(Debug, Clone)]
pub struct Passage<'a> {
    /// The paragraph element the passage is anchored on.
    pub paragraph: DomNode<'a>,
    /// Flattened paragraph text plus trailing siblings, newline-trimmed.
    pub text: String,
}

/// Lazy pre-order iterator over the passages of a subtree.
///
/// Text nodes without a paragraph ancestor, and paragraphs that flatten to
/// nothing, are skipped silently.
pub struct Passages<'a, 'q> {
    nodes: Descendants<'a, Node>,
    terms: &'q SearchTerms,
    markup: &'q Markup,
}

impl<'a, 'q> Passages<'a, 'q> {
    pub fn new(root: DomNode<'a>, terms: &'q SearchTerms, markup: &'q Markup) -> Self {
        Self {
            nodes: root.descendants(),
            terms,
            markup,
        }
    }
}

impl<'a> Iterator for Passages<'a, '_> {
    type Item = Passage<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        for node in self.nodes.by_ref() {
            let Some(data) = dom::text_data(node) else {
                continue;
            };
            if !self.terms.matches(data) {
                continue;
            }

            let Some(paragraph) = enclosing_block(node, &self.markup.paragraph_tag) else {
                trace!("Match {:?} has no <{}> ancestor", data, self.markup.paragraph_tag);
                continue;
            };

            let text = expand_passage(paragraph, &self.markup.boundary_class);
            if text.is_empty() {
                continue;
            }

            return Some(Passage { paragraph, text });
        }
        None
    }
}

/// Nearest ancestor of `node` that is an element named `tag`.
pub fn enclosing_block<'a>(node: DomNode<'a>, tag: &str) -> Option<DomNode<'a>> {
    node.ancestors().find(|ancestor| dom::is_element_named(*ancestor, tag))
}

/// Flattened text of `paragraph` and each following sibling, stopping before
/// the first sibling whose class is exactly `boundary_class`.
///
/// The result carries no leading or trailing newlines.
pub fn expand_passage(paragraph: DomNode<'_>, boundary_class: &str) -> String {
    let mut text = dom::flatten_text(paragraph);
    for sibling in paragraph
        .next_siblings()
        .take_while(|sibling| !dom::has_attr(*sibling, "class", boundary_class))
    {
        dom::flatten_text_into(sibling, &mut text);
    }
    text
}

/// Newline-joined passages for every match under `root`, in pre-order.
///
/// `None` means nothing under `root` matched; callers treat that as an empty
/// contribution, not a failure.
pub fn search_with(root: DomNode<'_>, terms: &SearchTerms, markup: &Markup) -> Option<String> {
    let mut joined = String::new();
    for passage in Passages::new(root, terms, markup) {
        if !joined.is_empty() {
            joined.push('\n');
        }
        joined.push_str(&passage.text);
    }
    (!joined.is_empty()).then_some(joined)
}

/// [`search_with`] using the default corpus markup conventions.
pub fn search(root: DomNode<'_>, terms: &SearchTerms) -> Option<String> {
    search_with(root, terms, &Markup::default())
}
