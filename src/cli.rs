use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "far-search")]
#[command(
    about = "Find regulation passages in an HTML corpus by part and search terms",
    long_about = None
)]
pub struct Cli {
    /// Configuration file (defaults to ./far-search.toml, then the user config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Corpus directory, overriding the configuration file
    #[arg(short = 'd', long, global = true)]
    pub corpus_dir: Option<PathBuf>,

    /// Debug-level logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print passages of a part matching any of the terms
    Search {
        part: u32,
        /// Comma-separated terms, e.g. "bond, surety, performance bond". Empty for the whole part
        terms: String,
        /// Retry with the whole part when nothing matches
        #[arg(long)]
        whole_part_fallback: bool,
        /// Load and search documents on a worker pool
        #[arg(long)]
        concurrent: bool,
    },
    /// Print a part's title
    Title { part: u32 },
    /// Print a part's scope statement
    Scope { part: u32 },
    /// List every part with its title and scope
    Parts {
        #[arg(long)]
        json: bool,
    },
}
