//! Fetch flow - query PubMed and persist articles as CSV

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use tracing::info;

use crate::cli::FetchArgs;
use crate::pubmed::PubMedClient;
use crate::report::model::{ResultItem, ResultSet};
use crate::report::render::{RenderConfig, Renderer};
use crate::store::{csv, Article};

/// Query PubMed and return the fetched articles.
pub fn fetch_articles(query: &str, args: &FetchArgs) -> Result<Vec<Article>> {
    let client = PubMedClient::new(args.email.clone(), args.api_key.clone())
        .context("Failed to build PubMed client")?;

    info!(query, max_results = args.max_results, "searching PubMed");
    let pmids = client
        .search_ids(query, args.max_results, args.page_size)
        .context("PubMed search failed")?;
    info!(found = pmids.len(), "collected PMIDs");

    let bar = ProgressBar::new(pmids.len() as u64).with_style(
        ProgressStyle::with_template("{msg} [{bar:40}] {pos}/{len}")
            .expect("valid progress template")
            .progress_chars("=> "),
    );
    bar.set_message("Fetching summaries");

    let articles = client
        .summaries(&pmids, |batch| bar.inc(batch as u64))
        .context("PubMed summary fetch failed")?;
    bar.finish_and_clear();

    Ok(articles)
}

/// Run the fetch command
pub fn run_fetch(
    query: &str,
    out: &Path,
    args: &FetchArgs,
    render_config: RenderConfig,
) -> Result<()> {
    let articles = fetch_articles(query, args)?;

    csv::write_articles(out, &articles)?;
    info!(count = articles.len(), path = %out.display(), "wrote articles CSV");

    let mut result_set: ResultSet = articles
        .iter()
        .map(|a| ResultItem::article(a.title.clone(), a.decade()))
        .collect();
    result_set.sort();

    let renderer = Renderer::with_config(render_config);
    println!("{}", renderer.render(&result_set));

    Ok(())
}
