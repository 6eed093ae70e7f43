//! Cloud flow - render one word-frequency image per decade

use anyhow::{Context, Result};
use image::Rgb;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::Path;
use tracing::info;

use crate::cli::{CloudArgs, TokenizeArgs};
use crate::cloud::frequency::word_frequencies;
use crate::cloud::image_filename;
use crate::cloud::render::{CloudConfig, WordCloudRenderer};
use crate::flows::{build_tokenizer, stats::tokens_by_decade};
use crate::report::model::{ResultItem, ResultSet};
use crate::report::render::{RenderConfig, Renderer};
use crate::store::Article;

/// Render one image per decade represented in the articles.
pub fn render_decades(
    articles: &[Article],
    tokenize: &TokenizeArgs,
    cloud: &CloudArgs,
) -> Result<ResultSet> {
    let tokenizer = build_tokenizer(tokenize)?;
    let buckets = tokens_by_decade(articles, &tokenizer);

    let font_bytes = fs::read(&cloud.font)
        .with_context(|| format!("Failed to read font file: {:?}", cloud.font))?;

    let config = CloudConfig {
        width: cloud.width,
        height: cloud.height,
        min_font_size: cloud.min_font_size,
        max_font_size: cloud.max_font_size,
        seed: cloud.seed,
        background: Rgb([255, 255, 255]),
        foreground: Rgb([0, 0, 0]),
    };

    let mut renderer = WordCloudRenderer::new(config, font_bytes)?;
    if let Some(mask_path) = &cloud.mask {
        let mask = image::open(mask_path)
            .with_context(|| format!("Failed to open mask image: {:?}", mask_path))?;
        renderer = renderer.with_mask(mask);
    }

    fs::create_dir_all(&cloud.out_dir)
        .with_context(|| format!("Failed to create output directory: {:?}", cloud.out_dir))?;

    let bar = ProgressBar::new(buckets.len() as u64).with_style(
        ProgressStyle::with_template("{msg} [{bar:40}] {pos}/{len}")
            .expect("valid progress template")
            .progress_chars("=> "),
    );
    bar.set_message("Rendering clouds");

    let mut result_set = ResultSet::new();
    for (decade, token_lists) in &buckets {
        let frequencies = word_frequencies(
            token_lists.iter().flatten().cloned(),
            cloud.max_words,
        );

        let path = cloud.out_dir.join(image_filename(*decade));
        let placed = renderer.render_to_file(&frequencies, &path)?;
        info!(decade, words = placed.len(), path = %path.display(), "wrote cloud");

        result_set.push(
            ResultItem::cloud(path.to_string_lossy().replace('\\', "/"), *decade).with_data(
                serde_json::json!({
                    "words_placed": placed.len(),
                    "words_considered": frequencies.len(),
                }),
            ),
        );
        bar.inc(1);
    }
    bar.finish_and_clear();

    result_set.sort();
    Ok(result_set)
}

/// Run the cloud command
pub fn run_cloud(
    input: &Path,
    tokenize: &TokenizeArgs,
    cloud: &CloudArgs,
    render_config: RenderConfig,
) -> Result<()> {
    let articles = crate::store::csv::read_articles(input)?;
    let result_set = render_decades(&articles, tokenize, cloud)?;

    let renderer = Renderer::with_config(render_config);
    println!("{}", renderer.render(&result_set));

    Ok(())
}
