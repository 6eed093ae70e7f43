//! Tokens flow - emit normalized tokens per article

use anyhow::Result;
use std::path::Path;
use tracing::debug;

use crate::cli::TokenizeArgs;
use crate::flows::build_tokenizer;
use crate::report::model::{ResultItem, ResultSet};
use crate::report::render::{RenderConfig, Renderer};
use crate::store::csv;

/// Run the tokens command
pub fn run_tokens(input: &Path, args: &TokenizeArgs, render_config: RenderConfig) -> Result<()> {
    let articles = csv::read_articles(input)?;
    let tokenizer = build_tokenizer(args)?;

    let mut result_set = ResultSet::new();
    for article in &articles {
        let tokens = tokenizer.tokenize(&article.title);
        debug!(pmid = %article.pmid, count = tokens.len(), "tokenized title");
        result_set.push(ResultItem::tokens(
            article.title.clone(),
            article.decade(),
            &tokens,
        ));
    }
    result_set.sort();

    let renderer = Renderer::with_config(render_config);
    println!("{}", renderer.render(&result_set));

    Ok(())
}
