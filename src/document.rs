//! Document ingestion: read, minify, parse.
//!
//! Minification is load-bearing for matching. Un-minified corpus files split a
//! single sentence across many whitespace-laden text nodes.
//!
//! Class lookups run against the minified markup, where runs of whitespace in
//! `class` values are already collapsed: `"body  conbody"` in a source file is
//! exactly `"body conbody"` here.

use crate::config::Markup;
use crate::dom::{self, DomNode};
use crate::error::LoadError;
use scraper::Html;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// A parsed corpus document. The tree lives as long as this value.
pub struct LoadedDocument {
    path: PathBuf,
    html: Html,
}

impl LoadedDocument {
    /// Path the document was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The document node at the top of the tree.
    pub fn root(&self) -> DomNode<'_> {
        self.html.tree.root()
    }

    /// First element whose class is exactly the configured container class.
    pub fn content(&self, markup: &Markup) -> Option<DomNode<'_>> {
        dom::find_all_by_class(self.root(), &markup.container_class)
            .into_iter()
            .next()
    }

    /// Element carrying the configured title id.
    pub fn title(&self, markup: &Markup) -> Option<DomNode<'_>> {
        dom::find_by_id(self.root(), &markup.title_id)
    }
}

impl fmt::Debug for LoadedDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadedDocument")
            .field("path", &self.path)
            .field("nodes", &self.html.tree.nodes().count())
            .finish()
    }
}

/// Turns corpus files into trees.
pub struct DocumentLoader {
    minify: minify_html::Cfg,
}

impl Default for DocumentLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DocumentLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentLoader").finish_non_exhaustive()
    }
}

impl DocumentLoader {
    pub fn new() -> Self {
        let mut minify = minify_html::Cfg::new();
        // Keep explicit end tags so sibling structure matches the source.
        minify.keep_closing_tags = true;
        Self { minify }
    }

    /// Read and parse the document at `path`.
    pub fn load(&self, path: &Path) -> Result<LoadedDocument, LoadError> {
        let raw = std::fs::read(path).map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Read {} ({} bytes)", path.display(), raw.len());
        self.parse(path, &raw)
    }

    /// Minify and parse already-read markup. `path` is only used for reporting.
    pub fn parse(&self, path: &Path, raw: &[u8]) -> Result<LoadedDocument, LoadError> {
        let parse_error = |reason: String| LoadError::Parse {
            path: path.to_path_buf(),
            reason,
        };

        std::str::from_utf8(raw).map_err(|e| parse_error(format!("source is not UTF-8: {e}")))?;

        let minified = self.minify(raw);
        let markup = String::from_utf8(minified)
            .map_err(|e| parse_error(format!("minified markup is not UTF-8: {e}")))?;

        let html = Html::parse_document(&markup);
        if !html.errors.is_empty() {
            trace!(
                "{}: parser recovered from {} markup errors",
                path.display(),
                html.errors.len()
            );
        }
        let has_body_content = html
            .tree
            .root()
            .descendants()
            .find(|node| dom::is_element_named(*node, "body"))
            .is_some_and(|body| body.has_children());
        if !has_body_content {
            return Err(parse_error("document has no body content".to_string()));
        }

        Ok(LoadedDocument {
            path: path.to_path_buf(),
            html,
        })
    }

    /// Collapse insignificant whitespace and formatting.
    pub fn minify(&self, raw: &[u8]) -> Vec<u8> {
        minify_html::minify(raw, &self.minify)
    }
}
