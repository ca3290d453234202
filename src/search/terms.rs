//! Search term sets and case-insensitive substring matching.

use std::fmt;

/// An ordered, OR-matched, case-insensitive set of search terms.
///
/// Terms are upper-cased once on construction. An empty term is the
/// "match everything" sentinel: it is a substring of every string.
#[derive(Clone, PartialEq, Eq)]
pub struct SearchTerms {
    original: Vec<String>,
    upper: Vec<String>,
}

impl SearchTerms {
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let original: Vec<String> = terms.into_iter().map(Into::into).collect();
        let upper = original.iter().map(|t| t.to_uppercase()).collect();
        Self { original, upper }
    }

    /// The sentinel set `[""]`, used to retrieve whole sections unfiltered.
    pub fn everything() -> Self {
        Self::new([""])
    }

    /// Split a comma-separated query the way the question-answering front end
    /// emits it (`"foo, bar, foo bar"`).
    ///
    /// Entries are trimmed and blank entries dropped. A query with no non-blank
    /// entry becomes [`SearchTerms::everything`].
    pub fn parse_list(query: &str) -> Self {
        let terms: Vec<&str> = query
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect();
        if terms.is_empty() {
            Self::everything()
        } else {
            Self::new(terms)
        }
    }

    /// True if any entry is the empty-string sentinel.
    pub fn matches_everything(&self) -> bool {
        self.original.iter().any(String::is_empty)
    }

    /// True if `text` contains any term, ignoring case.
    pub fn matches(&self, text: &str) -> bool {
        if self.upper.is_empty() {
            return false;
        }
        let haystack = text.to_uppercase();
        self.upper.iter().any(|term| haystack.contains(term.as_str()))
    }

    pub fn as_slice(&self) -> &[String] {
        &self.original
    }
}

impl fmt::Debug for SearchTerms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.original).finish()
    }
}

impl fmt::Display for SearchTerms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.original.join(", "))
    }
}

/// One-shot form of [`SearchTerms::matches`] for callers holding plain strings.
pub fn check_string<S: AsRef<str>>(text: &str, terms: &[S]) -> bool {
    let haystack = text.to_uppercase();
    terms
        .iter()
        .any(|term| haystack.contains(&term.as_ref().to_uppercase()))
}
