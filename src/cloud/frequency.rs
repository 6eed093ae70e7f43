//! Word frequency counting for cloud layout

use std::collections::HashMap;

/// Count word occurrences and keep the `max_words` most frequent.
///
/// Sorted by count descending; ties break lexicographically so output is
/// deterministic across runs.
pub fn word_frequencies<I, S>(tokens: I, max_words: usize) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut counts: HashMap<String, usize> = HashMap::new();
    for token in tokens {
        *counts.entry(token.into()).or_insert(0) += 1;
    }

    let mut frequencies: Vec<(String, usize)> = counts.into_iter().collect();
    frequencies.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    frequencies.truncate(max_words);
    frequencies
}
