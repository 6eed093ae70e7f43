//! Stats flow - per-decade token statistics

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::Path;
use tracing::warn;

use crate::cli::TokenizeArgs;
use crate::cloud::frequency::word_frequencies;
use crate::flows::build_tokenizer;
use crate::nlp::tokenizer::Tokenizer;
use crate::report::model::{ResultItem, ResultSet};
use crate::report::render::{RenderConfig, Renderer};
use crate::store::{csv, Article};

/// Aggregate statistics for one decade bucket.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DecadeStats {
    /// Decade bucket (e.g. 1990).
    pub decade: i32,
    /// Articles published in this decade.
    pub articles: usize,
    /// Total normalized tokens.
    pub tokens: usize,
    /// Distinct normalized tokens.
    pub unique_tokens: usize,
    /// Most frequent words with their counts.
    pub top_words: Vec<(String, usize)>,
}

/// Tokenize articles and group token lists by decade.
///
/// Articles without a recognizable publication year are skipped with a
/// warning.
pub fn tokens_by_decade(
    articles: &[Article],
    tokenizer: &Tokenizer,
) -> BTreeMap<i32, Vec<Vec<String>>> {
    let mut buckets: BTreeMap<i32, Vec<Vec<String>>> = BTreeMap::new();

    for article in articles {
        let Some(decade) = article.decade() else {
            warn!(pmid = %article.pmid, date = %article.publication_date,
                "skipping article with unparseable publication date");
            continue;
        };
        buckets
            .entry(decade)
            .or_default()
            .push(tokenizer.tokenize(&article.title));
    }

    buckets
}

/// Compute per-decade statistics.
pub fn decade_stats(
    buckets: &BTreeMap<i32, Vec<Vec<String>>>,
    top: usize,
) -> Vec<DecadeStats> {
    buckets
        .iter()
        .map(|(decade, token_lists)| {
            let flat: Vec<&String> = token_lists.iter().flatten().collect();
            let unique: HashSet<&String> = flat.iter().copied().collect();
            let top_words = word_frequencies(flat.iter().map(|t| t.to_string()), top);

            DecadeStats {
                decade: *decade,
                articles: token_lists.len(),
                tokens: flat.len(),
                unique_tokens: unique.len(),
                top_words,
            }
        })
        .collect()
}

/// Run the stats command
pub fn run_stats(
    input: &Path,
    top: usize,
    args: &TokenizeArgs,
    render_config: RenderConfig,
) -> Result<()> {
    let articles = csv::read_articles(input)?;
    let tokenizer = build_tokenizer(args)?;

    let buckets = tokens_by_decade(&articles, &tokenizer);
    let stats = decade_stats(&buckets, top);

    let mut result_set = ResultSet::new();
    for s in &stats {
        result_set.push(ResultItem::decade(s.decade).with_data(serde_json::json!({
            "articles": s.articles,
            "tokens": s.tokens,
            "unique_tokens": s.unique_tokens,
            "top_words": s.top_words,
        })));
    }
    result_set.sort();

    let renderer = Renderer::with_config(render_config);
    println!("{}", renderer.render(&result_set));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::tokenizer::TokenizerConfig;

    fn articles() -> Vec<Article> {
        vec![
            Article::new("1", "the bilingual brain", "1995-01-01"),
            Article::new("2", "bilingual language development", "1998 Nov"),
            Article::new("3", "aphasia therapy outcomes", "2004-06-01"),
            Article::new("4", "undated title", "n.d."),
        ]
    }

    fn tokenizer() -> Tokenizer {
        Tokenizer::new(TokenizerConfig {
            remove_stopwords: false,
            ..Default::default()
        })
    }

    #[test]
    fn test_tokens_by_decade_buckets() {
        let buckets = tokens_by_decade(&articles(), &tokenizer());

        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[&1990].len(), 2);
        assert_eq!(buckets[&2000].len(), 1);
    }

    #[test]
    fn test_tokens_by_decade_skips_undated() {
        let buckets = tokens_by_decade(&articles(), &tokenizer());
        let total: usize = buckets.values().map(|v| v.len()).sum();
        assert_eq!(total, 3);
    }

    #[test]
    fn test_decade_stats_counts() {
        let buckets = tokens_by_decade(&articles(), &tokenizer());
        let stats = decade_stats(&buckets, 3);

        assert_eq!(stats.len(), 2);
        let nineties = &stats[0];
        assert_eq!(nineties.decade, 1990);
        assert_eq!(nineties.articles, 2);
        // "the bilingual brain" + "bilingual language development"
        assert_eq!(nineties.tokens, 6);
        assert_eq!(nineties.unique_tokens, 5);
        assert_eq!(nineties.top_words[0], ("bilingual".to_string(), 2));
    }

    #[test]
    fn test_decade_stats_top_limit() {
        let buckets = tokens_by_decade(&articles(), &tokenizer());
        let stats = decade_stats(&buckets, 1);
        assert_eq!(stats[0].top_words.len(), 1);
    }
}
