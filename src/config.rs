//! Configuration file loading and markup conventions.
//!
//! Settings are read from the first TOML file found among an explicit
//! `--config` path, `./far-search.toml`, and `<config_dir>/far-search/config.toml`.
//! Every field has a default, so running without any file is normal.

use crate::error::Result;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Name of the per-directory configuration file.
pub const LOCAL_CONFIG_FILE: &str = "far-search.toml";

/// Default location of the HTML corpus, relative to the working directory.
pub const DEFAULT_CORPUS_DIR: &str = "src/FARhtml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory holding `Part_<n>.html`, `<n>.000.html`, `<n>.<k>.html`, ...
    pub corpus_dir: PathBuf,
    pub markup: Markup,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            corpus_dir: PathBuf::from(DEFAULT_CORPUS_DIR),
            markup: Markup::default(),
        }
    }
}

/// Structural conventions of the corpus markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Markup {
    /// Tag of the block a match is anchored on.
    pub paragraph_tag: String,
    /// Class marking the start of the next enumerated item.
    pub boundary_class: String,
    /// Exact class of the element holding a document's body content.
    pub container_class: String,
    /// Id of the part title element in `Part_<n>.html`.
    pub title_id: String,
}

impl Default for Markup {
    fn default() -> Self {
        Self {
            paragraph_tag: "p".to_string(),
            boundary_class: "ListL1".to_string(),
            container_class: "body conbody".to_string(),
            title_id: "ariaid-title1".to_string(),
        }
    }
}

impl Config {
    /// Parse a configuration from TOML text.
    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("Failed to parse configuration")
    }

    /// Read a configuration file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml(&contents)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Load the configuration.
    ///
    /// An explicit path must exist. Otherwise the first existing candidate is
    /// used, falling back to defaults when there is none.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        Self::load_first(&candidate_paths())
    }

    /// Replace the corpus directory when one was given on the command line.
    #[must_use]
    pub fn with_corpus_dir(mut self, dir: Option<PathBuf>) -> Self {
        if let Some(dir) = dir {
            self.corpus_dir = dir;
        }
        self
    }

    fn load_first(candidates: &[PathBuf]) -> Result<Self> {
        for candidate in candidates {
            if candidate.is_file() {
                debug!("Loading configuration from {}", candidate.display());
                return Self::from_file(candidate);
            }
        }

        debug!("No configuration file found, using defaults");
        Ok(Self::default())
    }
}

fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(LOCAL_CONFIG_FILE)];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("far-search").join("config.toml"));
    }
    paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::{check, let_assert};
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn empty_file_yields_defaults() {
        let_assert!(Ok(config) = Config::from_toml(""));
        check!(config == Config::default());
        check!(config.markup.boundary_class == "ListL1");
        check!(config.corpus_dir == PathBuf::from("src/FARhtml"));
    }

    #[test]
    fn partial_markup_table_keeps_other_defaults() {
        let_assert!(
            Ok(config) = Config::from_toml(
                r#"
corpus_dir = "/data/far"

[markup]
boundary_class = "ListL2"
"#
            )
        );
        check!(config.corpus_dir == PathBuf::from("/data/far"));
        check!(config.markup.boundary_class == "ListL2");
        check!(config.markup.paragraph_tag == "p");
        check!(config.markup.container_class == "body conbody");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        check!(Config::from_toml("corpus = \"x\"").is_err());
    }

    #[test]
    fn explicit_path_is_loaded_and_must_exist() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[markup]\ntitle_id = \"title\"").unwrap();

        let_assert!(Ok(config) = Config::load(Some(file.path())));
        check!(config.markup.title_id == "title");

        check!(Config::load(Some(Path::new("/definitely/not/here.toml"))).is_err());
    }

    #[test]
    fn first_existing_candidate_wins() {
        let dir = TempDir::new().unwrap();
        let local = dir.path().join(LOCAL_CONFIG_FILE);
        let user = dir.path().join("config.toml");
        std::fs::write(&user, "corpus_dir = \"/user/far\"").unwrap();

        let candidates = [local.clone(), user];
        let_assert!(Ok(config) = Config::load_first(&candidates));
        check!(config.corpus_dir == PathBuf::from("/user/far"));

        std::fs::write(&local, "corpus_dir = \"/local/far\"").unwrap();
        let_assert!(Ok(config) = Config::load_first(&candidates));
        check!(config.corpus_dir == PathBuf::from("/local/far"));
    }

    #[test]
    fn no_candidate_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let candidates = [dir.path().join(LOCAL_CONFIG_FILE), dir.path().join("config.toml")];
        let_assert!(Ok(config) = Config::load_first(&candidates));
        check!(config == Config::default());
    }

    #[test]
    fn corpus_dir_override_replaces_configured_dir() {
        let_assert!(Ok(config) = Config::from_toml("corpus_dir = \"/data/far\""));
        let kept = config.clone().with_corpus_dir(None);
        check!(kept.corpus_dir == PathBuf::from("/data/far"));

        let overridden = config.with_corpus_dir(Some(PathBuf::from("/tmp/far")));
        check!(overridden.corpus_dir == PathBuf::from("/tmp/far"));
        check!(overridden.markup == Markup::default());
    }
}
