pub mod cli;
pub mod config;
pub mod corpus;
pub mod document;
pub mod dom;
pub mod error;
pub mod logging;
pub mod search;

pub use config::{Config, Markup};
pub use corpus::{Corpus, PartSummary};
pub use document::{DocumentLoader, LoadedDocument};
pub use error::{LoadError, SearchError};
pub use search::SearchTerms;
