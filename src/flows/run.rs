//! Run flow - the full fetch / tokenize / render pipeline

use anyhow::Result;
use std::path::Path;
use tracing::info;

use crate::cli::{CloudArgs, FetchArgs, TokenizeArgs};
use crate::flows::{cloud::render_decades, fetch::fetch_articles};
use crate::report::render::{RenderConfig, Renderer};
use crate::store::csv;

/// Run the end-to-end pipeline: fetch articles, persist them as CSV, then
/// render one cloud image per decade.
pub fn run_pipeline(
    query: &str,
    out: &Path,
    fetch: &FetchArgs,
    tokenize: &TokenizeArgs,
    cloud: &CloudArgs,
    render_config: RenderConfig,
) -> Result<()> {
    let articles = fetch_articles(query, fetch)?;

    csv::write_articles(out, &articles)?;
    info!(count = articles.len(), path = %out.display(), "wrote articles CSV");

    let result_set = render_decades(&articles, tokenize, cloud)?;

    let renderer = Renderer::with_config(render_config);
    println!("{}", renderer.render(&result_set));

    Ok(())
}
