//! File-naming convention of the HTML corpus.
//!
//! For part `n` the corpus directory holds:
//! - `Part_<n>.html`: part title page
//! - `<n>.000.html`: part scope
//! - `Subpart_<n>.<k>.html`: subpart navigation pages
//! - `<n>.<k><suffix>.html`: section documents (`1.101.html`, `1.602-1.html`, ...)

use regex::Regex;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Documents making up one part, each list in ascending file-name order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartDocuments {
    pub title: Option<PathBuf>,
    pub scope: Option<PathBuf>,
    pub subparts: Vec<PathBuf>,
    pub sections: Vec<PathBuf>,
}

impl PartDocuments {
    /// Documents a part search walks: the scope document and every section,
    /// in ascending file-name order.
    pub fn searchable(&self) -> Vec<PathBuf> {
        let mut paths: Vec<PathBuf> = self.scope.iter().chain(&self.sections).cloned().collect();
        paths.sort();
        paths.dedup();
        paths
    }
}

/// Resolves part numbers to files inside a corpus directory.
#[derive(Debug, Clone)]
pub struct PartLayout {
    dir: PathBuf,
}

impl PartLayout {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn title_path(&self, part: u32) -> PathBuf {
        self.dir.join(format!("Part_{part}.html"))
    }

    pub fn scope_path(&self, part: u32) -> PathBuf {
        self.dir.join(format!("{part}.000.html"))
    }

    /// Number of `Part_<n>.html` title pages in the corpus.
    pub fn part_count(&self) -> usize {
        let pattern = Regex::new(r"^Part_\d+\.html$").expect("static regex");
        self.glob(&pattern).len()
    }

    /// Classify every file belonging to `part`.
    pub fn resolve(&self, part: u32) -> PartDocuments {
        let scope_name = format!("{part}.000.html");
        let title_name = format!("Part_{part}.html");
        let subpart = Regex::new(&format!(r"^Subpart_{part}\.\d+\.html$")).expect("part regex");
        let section = Regex::new(&format!(r"^{part}\.\d.*\.html$")).expect("part regex");

        let mut docs = PartDocuments::default();
        for name in self.file_names() {
            let path = self.dir.join(&name);
            if name == title_name {
                docs.title = Some(path);
            } else if name == scope_name {
                docs.scope = Some(path);
            } else if subpart.is_match(&name) {
                docs.subparts.push(path);
            } else if section.is_match(&name) {
                docs.sections.push(path);
            }
        }

        debug!(
            "Part {}: title={}, scope={}, {} subparts, {} sections",
            part,
            docs.title.is_some(),
            docs.scope.is_some(),
            docs.subparts.len(),
            docs.sections.len()
        );
        docs
    }

    /// Paths of files whose name matches `pattern`, ascending.
    ///
    /// Nothing matching, or an unreadable directory, yields an empty list.
    pub fn glob(&self, pattern: &Regex) -> Vec<PathBuf> {
        self.file_names()
            .into_iter()
            .filter(|name| pattern.is_match(name))
            .map(|name| self.dir.join(name))
            .collect()
    }

    /// Names of the regular files directly inside the corpus directory, sorted.
    fn file_names(&self) -> Vec<String> {
        let walker = ignore::WalkBuilder::new(&self.dir)
            .max_depth(Some(1))
            .standard_filters(false)
            .build();

        let mut names = Vec::new();
        for entry in walker {
            match entry {
                Ok(entry) => {
                    if entry.depth() == 0 || !entry.file_type().is_some_and(|t| t.is_file()) {
                        continue;
                    }
                    if let Some(name) = entry.file_name().to_str() {
                        names.push(name.to_string());
                    }
                }
                Err(e) => warn!("Skipping corpus entry in {}: {}", self.dir.display(), e),
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;
    use tempfile::TempDir;

    fn corpus(files: &[&str]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for name in files {
            std::fs::write(dir.path().join(name), "<p>x</p>").unwrap();
        }
        dir
    }

    fn names(paths: &[PathBuf]) -> Vec<String> {
        paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn resolve_classifies_files_of_one_part() {
        let dir = corpus(&[
            "Part_1.html",
            "1.000.html",
            "Subpart_1.1.html",
            "Subpart_1.6.html",
            "1.602-1.html",
            "1.101.html",
            "1.6.html",
            "Part_10.html",
            "10.000.html",
            "10.001.html",
            "12.101.html",
            "notes.txt",
        ]);
        let docs = PartLayout::new(dir.path()).resolve(1);

        check!(docs.title == Some(dir.path().join("Part_1.html")));
        check!(docs.scope == Some(dir.path().join("1.000.html")));
        check!(names(&docs.subparts) == ["Subpart_1.1.html", "Subpart_1.6.html"]);
        check!(names(&docs.sections) == ["1.101.html", "1.6.html", "1.602-1.html"]);
        check!(
            names(&docs.searchable())
                == ["1.000.html", "1.101.html", "1.6.html", "1.602-1.html"]
        );
    }

    #[test]
    fn part_numbers_do_not_prefix_match() {
        let dir = corpus(&["1.101.html", "10.101.html", "Subpart_10.1.html"]);
        let docs = PartLayout::new(dir.path()).resolve(10);
        check!(names(&docs.sections) == ["10.101.html"]);
        check!(names(&docs.subparts) == ["Subpart_10.1.html"]);
        check!(docs.scope.is_none());
        check!(docs.title.is_none());
    }

    #[test]
    fn unknown_part_and_missing_directory_resolve_empty() {
        let dir = corpus(&["Part_1.html"]);
        check!(PartLayout::new(dir.path()).resolve(7) == PartDocuments::default());
        let missing = PartLayout::new(dir.path().join("absent"));
        check!(missing.resolve(1) == PartDocuments::default());
    }

    #[test]
    fn part_count_only_counts_title_pages() {
        let dir = corpus(&["Part_1.html", "Part_2.html", "Part_x.html", "Subpart_1.1.html"]);
        check!(PartLayout::new(dir.path()).part_count() == 2);
    }

    #[test]
    fn paths_are_built_from_the_convention() {
        let layout = PartLayout::new("/corpus");
        check!(layout.title_path(3) == PathBuf::from("/corpus/Part_3.html"));
        check!(layout.scope_path(3) == PathBuf::from("/corpus/3.000.html"));
    }
}
