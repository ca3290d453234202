//! Contextual term search over parsed documents.
//!
//! Matching is a case-insensitive substring test against each text node. A
//! match is widened to a passage: its enclosing paragraph plus the paragraph's
//! trailing siblings up to the next enumerated-item boundary.

pub mod passage;
pub mod terms;

pub use passage::{Passage, Passages, enclosing_block, expand_passage, search, search_with};
pub use terms::{SearchTerms, check_string};
