//! Title tokenizer - the normalization pipeline
//!
//! Transforms a title string into a list of normalized tokens:
//!
//! 1. Clean the text (emoji, contractions, punctuation, digits), unless
//!    disabled.
//! 2. Lowercase (on by default).
//! 3. Split on whitespace.
//! 4. Remove stopwords (on by default).
//! 5. Stem each token with the language's Snowball stemmer (off by
//!    default).
//!
//! The pipeline is stateless per call; the tokenizer only holds its
//! configuration, stopword set and stemmer.

use rust_stemmers::Stemmer;

use crate::nlp::clean::{clean, CleanConfig};
use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::Language;

/// Tokenizer configuration.
#[derive(Debug, Clone)]
pub struct TokenizerConfig {
    pub language: Language,
    pub lowercase: bool,
    pub remove_stopwords: bool,
    pub stem: bool,
    pub clean: bool,
    pub clean_config: CleanConfig,
    /// Extra stopwords on top of the built-in language list.
    pub extra_stopwords: Vec<String>,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            language: Language::English,
            lowercase: true,
            remove_stopwords: true,
            stem: false,
            clean: true,
            clean_config: CleanConfig::default(),
            extra_stopwords: Vec::new(),
        }
    }
}

/// Tokenizes and normalizes title strings.
pub struct Tokenizer {
    config: TokenizerConfig,
    stopwords: StopwordFilter,
    stemmer: Option<Stemmer>,
}

impl Tokenizer {
    pub fn new(config: TokenizerConfig) -> Self {
        let mut stopwords = if config.remove_stopwords {
            StopwordFilter::new(config.language)
        } else {
            StopwordFilter::empty()
        };
        stopwords.add_words(&config.extra_stopwords);

        let stemmer = config
            .stem
            .then(|| Stemmer::create(config.language.stemmer_algorithm()));

        Self {
            config,
            stopwords,
            stemmer,
        }
    }

    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }

    /// Normalize a single title into tokens.
    pub fn tokenize(&self, title: &str) -> Vec<String> {
        let cleaned;
        let text = if self.config.clean {
            cleaned = clean(title, &self.config.clean_config);
            cleaned.as_str()
        } else {
            title
        };

        let mut tokens: Vec<String> = text
            .split_whitespace()
            .map(|w| {
                if self.config.lowercase {
                    w.to_lowercase()
                } else {
                    w.to_string()
                }
            })
            .filter(|w| !self.stopwords.is_stopword(w))
            .collect();

        if let Some(stemmer) = &self.stemmer {
            for token in &mut tokens {
                *token = stemmer.stem(token).into_owned();
            }
        }

        tokens
    }

    /// Normalize a batch of titles.
    pub fn transform<'a, I>(&self, titles: I) -> Vec<Vec<String>>
    where
        I: IntoIterator<Item = &'a str>,
    {
        titles.into_iter().map(|t| self.tokenize(t)).collect()
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(TokenizerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_default() {
        let tokenizer = Tokenizer::default();
        let tokens = tokenizer.tokenize("The Bilingual Brain: A Review of Aphasia");
        assert!(tokens.contains(&"bilingual".to_string()));
        assert!(tokens.contains(&"brain".to_string()));
        assert!(tokens.contains(&"aphasia".to_string()));
        assert!(!tokens.contains(&"the".to_string()));
        assert!(!tokens.contains(&"a".to_string()));
        assert!(!tokens.contains(&"of".to_string()));
    }

    #[test]
    fn test_tokenize_digits_become_number() {
        let tokenizer = Tokenizer::new(TokenizerConfig {
            remove_stopwords: false,
            ..Default::default()
        });
        let tokens = tokenizer.tokenize("a study of 122 children");
        assert_eq!(tokens, vec!["a", "study", "of", "number", "children"]);
    }

    #[test]
    fn test_tokenize_keeps_stopwords_when_disabled() {
        let tokenizer = Tokenizer::new(TokenizerConfig {
            remove_stopwords: false,
            ..Default::default()
        });
        let tokens = tokenizer.tokenize("the brain");
        assert_eq!(tokens, vec!["the", "brain"]);
    }

    #[test]
    fn test_tokenize_stemming() {
        let tokenizer = Tokenizer::new(TokenizerConfig {
            stem: true,
            remove_stopwords: false,
            ..Default::default()
        });
        let tokens = tokenizer.tokenize("children learning languages");
        assert_eq!(tokens, vec!["children", "learn", "languag"]);
    }

    #[test]
    fn test_tokenize_no_clean() {
        let tokenizer = Tokenizer::new(TokenizerConfig {
            clean: false,
            ..Default::default()
        });
        let tokens = tokenizer.tokenize("brain: review");
        // Punctuation is preserved when cleaning is skipped.
        assert_eq!(tokens, vec!["brain:", "review"]);
    }

    #[test]
    fn test_tokenize_extra_stopwords() {
        let tokenizer = Tokenizer::new(TokenizerConfig {
            extra_stopwords: vec!["bilingual".to_string(), "language".to_string()],
            ..Default::default()
        });
        let tokens = tokenizer.tokenize("Bilingual language development in infants");
        assert_eq!(tokens, vec!["development", "infants"]);
    }

    #[test]
    fn test_tokenize_no_lowercase() {
        let tokenizer = Tokenizer::new(TokenizerConfig {
            lowercase: false,
            remove_stopwords: false,
            ..Default::default()
        });
        let tokens = tokenizer.tokenize("Bilingual Brain");
        assert_eq!(tokens, vec!["Bilingual", "Brain"]);
    }

    #[test]
    fn test_tokenize_swedish() {
        let tokenizer = Tokenizer::new(TokenizerConfig {
            language: Language::Swedish,
            ..Default::default()
        });
        let tokens = tokenizer.tokenize("Tvåspråkighet och hjärnan");
        assert!(tokens.contains(&"tvåspråkighet".to_string()));
        assert!(!tokens.contains(&"och".to_string()));
    }

    #[test]
    fn test_transform_batch() {
        let tokenizer = Tokenizer::default();
        let out = tokenizer.transform(["The brain", "A language study"]);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0], vec!["brain"]);
    }

    #[test]
    fn test_tokenize_empty() {
        let tokenizer = Tokenizer::default();
        assert!(tokenizer.tokenize("").is_empty());
        assert!(tokenizer.tokenize("   ").is_empty());
    }
}
