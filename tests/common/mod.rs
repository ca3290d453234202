//! Shared test fixtures for integration tests.
//!
//! [`TempCorpus`] is a temporary corpus directory populated with small HTML
//! documents following the `Part_<n>.html` / `<n>.000.html` / `<n>.<k>.html`
//! naming convention. It is removed when dropped.

use far_search::{Corpus, Markup};
use rstest::fixture;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary corpus directory for test isolation.
#[allow(dead_code)] // Methods used across different integration test crates
pub struct TempCorpus {
    _temp: TempDir,
    root: PathBuf,
}

#[allow(dead_code)] // Methods used across different integration test crates
impl TempCorpus {
    /// Creates a new empty corpus directory.
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let root = temp.path().to_path_buf();
        Self { _temp: temp, root }
    }

    /// Returns the corpus directory.
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Writes a raw file into the corpus.
    ///
    /// # Panics
    /// Panics if file creation fails.
    pub fn create_file(&self, name: &str, content: impl AsRef<[u8]>) {
        std::fs::write(self.root.join(name), content)
            .unwrap_or_else(|e| panic!("Failed to write file '{}': {}", name, e));
    }

    /// Writes a section document whose content container holds `body`.
    pub fn create_section(&self, name: &str, body: &str) {
        self.create_file(name, section_html(body));
    }

    /// Writes `Part_<n>.html` with the given title.
    pub fn create_title(&self, part: u32, title: &str) {
        self.create_file(
            &format!("Part_{part}.html"),
            format!(
                r#"<!DOCTYPE html>
<html>
  <head><title>Part {part}</title></head>
  <body>
    <h1 class="title topictitle1" id="ariaid-title1">{title}</h1>
    <div class="body"><p>Table of contents</p></div>
  </body>
</html>"#
            ),
        );
    }

    /// Writes `<n>.000.html` with the given scope statement.
    pub fn create_scope(&self, part: u32, scope: &str) {
        self.create_section(&format!("{part}.000.html"), &format!("<p>{scope}</p>"));
    }

    /// A corpus handle over this directory with default markup conventions.
    pub fn corpus(&self) -> Corpus {
        Corpus::new(&self.root, Markup::default())
    }
}

impl Default for TempCorpus {
    fn default() -> Self {
        Self::new()
    }
}

/// Wraps `body` in a full document with a `body conbody` container.
pub fn section_html(body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en-us">
  <head>
    <meta charset="UTF-8">
    <title>Section</title>
  </head>
  <body>
    <article class="nested0" id="ariaid-title1">
      <h1 class="title topictitle1">Section heading</h1>
      <div class="body conbody">
        {body}
      </div>
    </article>
  </body>
</html>"#
    )
}

/// Part 1 of a miniature corpus: title, scope, two subparts, three sections.
#[fixture]
#[allow(dead_code)]
pub fn sample_corpus() -> TempCorpus {
    let corpus = TempCorpus::new();
    corpus.create_title(1, "PART 1 - FEDERAL ACQUISITION REGULATIONS SYSTEM");
    corpus.create_scope(1, "This part sets forth basic policies and general information.");
    corpus.create_file("Subpart_1.1.html", "<p>Subpart 1.1 - Purpose, Authority, Issuance</p>");
    corpus.create_file("Subpart_1.6.html", "<p>Subpart 1.6 - Career Development</p>");
    corpus.create_section(
        "1.101.html",
        r#"<p>The Federal Acquisition Regulations System is established for the
        codification and publication of uniform policies.</p>"#,
    );
    corpus.create_section(
        "1.602-1.html",
        r#"<p class="ListL1">(a) Contracting officers have authority to enter into
        contracts.</p>
        <p class="ListL2">(1) Only within the limits of their warrants.</p>
        <p class="ListL2">(2) Subject to agency procedures.</p>
        <p class="ListL1">(b) No contract shall be entered into unless all
        requirements of law have been met.</p>
        <p class="ListL2">(1) This trailing item is excluded.</p>"#,
    );
    corpus.create_section(
        "1.603-1.html",
        r#"<p>Agency heads should select and appoint contracting officers.</p>"#,
    );
    corpus
}
