//! Command handlers - each pipeline stage as a flow

pub mod cloud;
pub mod fetch;
pub mod run;
pub mod stats;
pub mod tokens;

use anyhow::{anyhow, Result};

use crate::cli::TokenizeArgs;
use crate::nlp::clean::CleanConfig;
use crate::nlp::tokenizer::{Tokenizer, TokenizerConfig};
use crate::nlp::Language;

/// Build a tokenizer from CLI arguments.
pub fn build_tokenizer(args: &TokenizeArgs) -> Result<Tokenizer> {
    let language: Language = args.language.parse().map_err(|e: String| anyhow!(e))?;

    let config = TokenizerConfig {
        language,
        lowercase: true,
        remove_stopwords: !args.keep_stopwords,
        stem: args.stem,
        clean: !args.no_clean,
        clean_config: CleanConfig {
            replace_numbers: !args.keep_numbers,
            ..Default::default()
        },
        extra_stopwords: args.stopwords.clone(),
    };

    Ok(Tokenizer::new(config))
}
