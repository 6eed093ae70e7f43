//! Text normalization - cleaning, tokenization, stopwords, stemming

pub mod clean;
pub mod contractions;
pub mod stopwords;
pub mod tokenizer;

use std::fmt;
use std::str::FromStr;

/// Languages supported by the normalization pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    Swedish,
}

impl Language {
    /// Stopword list identifier for the `stop-words` crate.
    pub fn stopword_language(&self) -> stop_words::LANGUAGE {
        match self {
            Language::English => stop_words::LANGUAGE::English,
            Language::Swedish => stop_words::LANGUAGE::Swedish,
        }
    }

    /// Snowball stemmer for this language.
    pub fn stemmer_algorithm(&self) -> rust_stemmers::Algorithm {
        match self {
            Language::English => rust_stemmers::Algorithm::English,
            Language::Swedish => rust_stemmers::Algorithm::Swedish,
        }
    }

    /// List all supported languages
    pub fn available() -> &'static [&'static str] {
        &["english", "swedish"]
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Language::English => "english",
            Language::Swedish => "swedish",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "english" | "en" => Ok(Language::English),
            "swedish" | "sv" => Ok(Language::Swedish),
            _ => Err(format!(
                "Unknown language: {}. Available: {}",
                s,
                Language::available().join(", ")
            )),
        }
    }
}
