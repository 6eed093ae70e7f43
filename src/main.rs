//! pubcloud - Scrape PubMed titles and render per-decade word clouds
//!
//! pubcloud provides:
//! - PubMed retrieval via the NCBI E-utilities API (esearch/esummary)
//! - Title normalization (cleaning, stopword removal, optional stemming)
//! - Decade bucketing and word-frequency cloud rendering
//! - Unified output format (jsonl/json/md/raw)

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod cloud;
mod flows;
mod nlp;
mod pubmed;
mod report;
mod store;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    let default_level = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    cli::run(cli)
}
