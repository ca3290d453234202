use anyhow::Context;
use clap::Parser;
use far_search::cli::{Cli, Commands};
use far_search::error::Result;
use far_search::logging::{self, LogOptions};
use far_search::{Config, Corpus, SearchTerms};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init(LogOptions {
        verbose: cli.verbose,
        json: cli.log_json,
    });

    run(cli).await.inspect_err(|e| {
        tracing::error!("{:#}", e);
    })
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?.with_corpus_dir(cli.corpus_dir);
    tracing::debug!("Using corpus at {}", config.corpus_dir.display());

    let corpus = Arc::new(Corpus::from_config(&config));

    match cli.command {
        Commands::Search {
            part,
            terms,
            whole_part_fallback,
            concurrent,
        } => {
            let terms = SearchTerms::parse_list(&terms);
            tracing::info!("Searching part {} for {}", part, terms);

            let found = if concurrent {
                corpus
                    .search_part_concurrent_with_fallback(part, &terms, whole_part_fallback)
                    .await
            } else {
                corpus.search_part_with_fallback(part, &terms, whole_part_fallback)
            };
            let text = found.with_context(|| format!("Search of part {} failed", part))?;
            println!("{}", text);
        }
        Commands::Title { part } => {
            println!("{}", corpus.part_title(part)?);
        }
        Commands::Scope { part } => {
            println!("{}", corpus.part_scope(part)?);
        }
        Commands::Parts { json } => {
            let summaries = corpus.part_summaries();
            if summaries.is_empty() {
                anyhow::bail!("No parts found in {}", config.corpus_dir.display());
            }
            if json {
                println!("{}", serde_json::to_string_pretty(&summaries)?);
            } else {
                for summary in &summaries {
                    println!("{}", summary);
                }
            }
        }
    }

    Ok(())
}
