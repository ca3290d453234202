//! Error handling types and utilities.

use std::path::PathBuf;

/// A specialized Result type for far-search glue code.
///
/// This is an alias for `anyhow::Result` with context added via `.context()` and
/// `.with_context()` methods in the binary and configuration layers.
pub type Result<T> = anyhow::Result<T>;

/// Error returned when a single corpus document cannot be turned into a tree.
///
/// Fatal to that document only; part-level searches log it and move on.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Source file missing or unreadable.
    #[error("Failed to read document {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Markup could not be decoded or parsed after minification.
    #[error("Failed to parse document {}: {reason}", path.display())]
    Parse { path: PathBuf, reason: String },
}

impl LoadError {
    /// Path of the document that failed to load.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Read { path, .. } | Self::Parse { path, .. } => path.as_path(),
        }
    }

    /// Whether the underlying file simply does not exist.
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Read { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}

/// Error returned by part-level operations.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The definitive "nothing here" outcome. Never retried.
    #[error("Part {part}: {what} not found")]
    NotFound { part: u32, what: String },
    /// A metadata document exists but could not be loaded.
    #[error(transparent)]
    Load(#[from] LoadError),
    /// A concurrent search task panicked or was cancelled.
    #[error("Search task failed: {0}")]
    Task(String),
}

impl SearchError {
    pub(crate) fn not_found(part: u32, what: impl Into<String>) -> Self {
        Self::NotFound {
            part,
            what: what.into(),
        }
    }

    /// True for the aggregate "no match anywhere" / "no such element" outcome.
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
