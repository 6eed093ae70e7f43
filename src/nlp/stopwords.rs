//! Stopword filtering
//!
//! Wraps the `stop-words` crate lists with support for caller-supplied
//! extra words (e.g. the search keyword itself, which would otherwise
//! dominate every cloud).

use std::collections::HashSet;

use crate::nlp::Language;

/// A filter for removing stopwords from token lists.
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    stopwords: HashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::new(Language::English)
    }
}

impl StopwordFilter {
    /// Create a filter with the built-in list for the given language.
    pub fn new(language: Language) -> Self {
        let stopwords = stop_words::get(language.stopword_language())
            .into_iter()
            .map(|w| w.to_lowercase())
            .collect();
        Self { stopwords }
    }

    /// Create an empty filter (no filtering).
    pub fn empty() -> Self {
        Self {
            stopwords: HashSet::new(),
        }
    }

    /// Add extra stopwords to the filter.
    pub fn add_words<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.stopwords.insert(word.as_ref().to_lowercase());
        }
    }

    /// Check if a word is a stopword (case-insensitive).
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(&word.to_lowercase())
    }

    /// Drop stopwords from a token list.
    pub fn filter(&self, tokens: Vec<String>) -> Vec<String> {
        tokens
            .into_iter()
            .filter(|t| !self.is_stopword(t))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_stopwords() {
        let filter = StopwordFilter::new(Language::English);
        assert!(filter.is_stopword("the"));
        assert!(filter.is_stopword("and"));
        assert!(!filter.is_stopword("bilingual"));
    }

    #[test]
    fn test_swedish_stopwords() {
        let filter = StopwordFilter::new(Language::Swedish);
        assert!(filter.is_stopword("och"));
        assert!(!filter.is_stopword("tvåspråkighet"));
    }

    #[test]
    fn test_empty_filter() {
        let filter = StopwordFilter::empty();
        assert!(filter.is_empty());
        assert!(!filter.is_stopword("the"));
    }

    #[test]
    fn test_extra_words() {
        let mut filter = StopwordFilter::new(Language::English);
        filter.add_words(["Bilingual", "language"]);
        assert!(filter.is_stopword("bilingual"));
        assert!(filter.is_stopword("LANGUAGE"));
    }

    #[test]
    fn test_filter_tokens() {
        let filter = StopwordFilter::new(Language::English);
        let tokens = vec![
            "the".to_string(),
            "bilingual".to_string(),
            "brain".to_string(),
        ];
        assert_eq!(filter.filter(tokens), vec!["bilingual", "brain"]);
    }
}
