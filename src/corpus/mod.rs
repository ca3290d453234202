//! Part-level operations over the HTML corpus.
//!
//! A part search loads every searchable document of the part, runs the
//! contextual search inside each document's content container, and joins the
//! non-empty results in file-name order. Per-document load failures and empty
//! results are absorbed here; only "no document matched anything" becomes
//! [`SearchError::NotFound`].

pub mod layout;

pub use layout::{PartDocuments, PartLayout};

use crate::config::{Config, Markup};
use crate::document::DocumentLoader;
use crate::dom;
use crate::error::{LoadError, SearchError};
use crate::search::{SearchTerms, search_with};
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// One line of the part catalogue: title plus optional scope statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartSummary {
    pub part: u32,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
}

impl fmt::Display for PartSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.scope {
            Some(scope) => write!(f, "{}: {}", self.title, scope),
            None => f.write_str(&self.title),
        }
    }
}

/// Entry point for searching and describing parts of the corpus.
#[derive(Debug)]
pub struct Corpus {
    layout: PartLayout,
    markup: Markup,
    loader: DocumentLoader,
}

impl Corpus {
    pub fn new(dir: impl Into<PathBuf>, markup: Markup) -> Self {
        Self {
            layout: PartLayout::new(dir),
            markup,
            loader: DocumentLoader::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.corpus_dir.clone(), config.markup.clone())
    }

    /// Search a single document.
    ///
    /// Returns the empty string when the document has no content container or
    /// nothing in it matches. With the match-everything sentinel the whole
    /// flattened content is returned.
    pub fn search_document(&self, path: &Path, terms: &SearchTerms) -> Result<String, LoadError> {
        let doc = self.loader.load(path)?;
        let Some(content) = doc.content(&self.markup) else {
            debug!("{}: no '{}' container", doc.path().display(), self.markup.container_class);
            return Ok(String::new());
        };

        if terms.matches_everything() {
            return Ok(dom::flatten_text(content));
        }

        Ok(search_with(content, terms, &self.markup).unwrap_or_default())
    }

    /// Search every document of `part` and join the non-empty results.
    pub fn search_part(&self, part: u32, terms: &SearchTerms) -> Result<String, SearchError> {
        let paths = self.searchable_documents(part)?;
        let results = paths.into_iter().map(|path| {
            let result = self.search_document(&path, terms);
            (path, result)
        });
        aggregate(part, terms, results)
    }

    /// [`Corpus::search_part`] with per-document work on Tokio's blocking pool.
    ///
    /// Results are awaited in file-name order, so the output is identical.
    pub async fn search_part_concurrent(
        self: &Arc<Self>,
        part: u32,
        terms: &SearchTerms,
    ) -> Result<String, SearchError> {
        let paths = self.searchable_documents(part)?;

        let handles: Vec<_> = paths
            .into_iter()
            .map(|path| {
                let corpus = Arc::clone(self);
                let terms = terms.clone();
                tokio::task::spawn_blocking(move || {
                    let result = corpus.search_document(&path, &terms);
                    (path, result)
                })
            })
            .collect();

        let mut results = Vec::with_capacity(handles.len());
        for handle in handles {
            let outcome = handle
                .await
                .map_err(|e| SearchError::Task(e.to_string()))?;
            results.push(outcome);
        }

        aggregate(part, terms, results)
    }

    /// [`Corpus::search_part`], retrieving the whole part when nothing matches
    /// and `whole_part` is set.
    pub fn search_part_with_fallback(
        &self,
        part: u32,
        terms: &SearchTerms,
        whole_part: bool,
    ) -> Result<String, SearchError> {
        match self.search_part(part, terms) {
            Err(e) if retry_whole_part(&e, terms, whole_part) => {
                info!("No matches in part {}, retrieving the whole part", part);
                self.search_part(part, &SearchTerms::everything())
            }
            other => other,
        }
    }

    /// Concurrent form of [`Corpus::search_part_with_fallback`].
    pub async fn search_part_concurrent_with_fallback(
        self: &Arc<Self>,
        part: u32,
        terms: &SearchTerms,
        whole_part: bool,
    ) -> Result<String, SearchError> {
        match self.search_part_concurrent(part, terms).await {
            Err(e) if retry_whole_part(&e, terms, whole_part) => {
                info!("No matches in part {}, retrieving the whole part", part);
                self.search_part_concurrent(part, &SearchTerms::everything()).await
            }
            other => other,
        }
    }

    /// Text of the part's title element.
    pub fn part_title(&self, part: u32) -> Result<String, SearchError> {
        let path = self.layout.title_path(part);
        let doc = self
            .loader
            .load(&path)
            .map_err(|e| missing_as_not_found(part, "title document", e))?;
        let title = doc
            .title(&self.markup)
            .ok_or_else(|| SearchError::not_found(part, "title element"))?;
        Ok(dom::flatten_text(title))
    }

    /// Text of the part's scope statement.
    pub fn part_scope(&self, part: u32) -> Result<String, SearchError> {
        let path = self.layout.scope_path(part);
        let doc = self
            .loader
            .load(&path)
            .map_err(|e| missing_as_not_found(part, "scope document", e))?;
        let content = doc
            .content(&self.markup)
            .ok_or_else(|| SearchError::not_found(part, "scope content"))?;
        Ok(dom::flatten_text(content))
    }

    /// Title plus scope. A missing scope is tolerated, a missing title is not.
    pub fn part_summary(&self, part: u32) -> Result<PartSummary, SearchError> {
        let title = self.part_title(part)?;
        let scope = match self.part_scope(part) {
            Ok(scope) => Some(scope),
            Err(e) => {
                debug!("Part {} has no usable scope: {}", part, e);
                None
            }
        };
        Ok(PartSummary { part, title, scope })
    }

    /// Summaries of parts `1..=N`, where `N` is the number of title pages.
    ///
    /// Stops at the first part whose title cannot be resolved.
    pub fn part_summaries(&self) -> Vec<PartSummary> {
        let count = self.layout.part_count();
        let mut summaries = Vec::with_capacity(count);
        for part in (1..).take(count) {
            match self.part_summary(part) {
                Ok(summary) => summaries.push(summary),
                Err(e) => {
                    debug!("Stopping part enumeration at {}: {}", part, e);
                    break;
                }
            }
        }
        summaries
    }

    fn searchable_documents(&self, part: u32) -> Result<Vec<PathBuf>, SearchError> {
        let paths = self.layout.resolve(part).searchable();
        if paths.is_empty() {
            return Err(SearchError::not_found(part, "documents"));
        }
        Ok(paths)
    }
}

/// Only a miss on real terms is retried; the sentinel already covers the part.
fn retry_whole_part(err: &SearchError, terms: &SearchTerms, whole_part: bool) -> bool {
    whole_part && err.is_not_found() && !terms.matches_everything()
}

fn missing_as_not_found(part: u32, what: &str, err: LoadError) -> SearchError {
    if err.is_missing() {
        SearchError::not_found(part, what)
    } else {
        SearchError::Load(err)
    }
}

/// Join per-document results in the order given.
fn aggregate<I>(part: u32, terms: &SearchTerms, results: I) -> Result<String, SearchError>
where
    I: IntoIterator<Item = (PathBuf, Result<String, LoadError>)>,
{
    let mut joined = String::new();
    let mut matched = 0usize;

    for (path, result) in results {
        match result {
            Ok(text) if text.is_empty() => {
                debug!("{}: no match", path.display());
            }
            Ok(text) => {
                if !joined.is_empty() {
                    joined.push('\n');
                }
                joined.push_str(&text);
                matched += 1;
            }
            Err(e) => warn!("Skipping {}: {}", path.display(), e),
        }
    }

    if joined.is_empty() {
        info!("Part {}: no document matched {}", part, terms);
        return Err(SearchError::not_found(part, format!("text matching {terms}")));
    }

    info!("Part {}: {} documents matched {}", part, matched, terms);
    Ok(joined)
}
