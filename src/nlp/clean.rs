//! Text cleaning passes applied before tokenization
//!
//! A linear sequence of string transformations: demojize, expand
//! contractions, optionally strip non-ASCII, strip punctuation, replace
//! digit runs with the word "number", map underscores to spaces, trim.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::nlp::contractions;

static PUNCT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]").expect("valid punct regex"));
static DIGITS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").expect("valid digits regex"));
static NON_ASCII_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\x00-\x7F]").expect("valid ascii regex"));

/// Options for the cleaning pass.
#[derive(Debug, Clone)]
pub struct CleanConfig {
    /// Replace emoji with their registry names.
    pub fix_emojis: bool,
    /// Expand English contractions.
    pub fix_contractions: bool,
    /// Drop all non-ASCII characters.
    pub remove_non_ascii: bool,
    /// Strip characters that are neither word characters nor whitespace.
    pub remove_punct: bool,
    /// Replace digit runs with the word "number".
    pub replace_numbers: bool,
}

impl Default for CleanConfig {
    fn default() -> Self {
        Self {
            fix_emojis: true,
            fix_contractions: true,
            remove_non_ascii: false,
            remove_punct: true,
            replace_numbers: true,
        }
    }
}

/// Longest emoji sequence considered, in codepoints. Covers ZWJ family
/// sequences, flags and skin-tone variants.
const MAX_EMOJI_CHARS: usize = 8;

/// Longest emoji match at the start of `s`, with its byte length.
fn match_emoji(s: &str) -> Option<(&'static emojis::Emoji, usize)> {
    let mut boundaries = Vec::with_capacity(MAX_EMOJI_CHARS);
    let mut end = 0;
    for c in s.chars().take(MAX_EMOJI_CHARS) {
        end += c.len_utf8();
        boundaries.push(end);
    }

    for &end in boundaries.iter().rev() {
        if let Some(emoji) = emojis::get(&s[..end]) {
            return Some((emoji, end));
        }
    }
    None
}

/// Replace each emoji with its name, padded with spaces so the name
/// tokenizes as separate words ("🧠" becomes "brain"). Multi-codepoint
/// sequences (flags, ZWJ families, skin tones) match longest-first so they
/// resolve to one name instead of falling through codepoint by codepoint.
pub fn demojize(text: &str) -> String {
    if text.is_ascii() {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(c) = rest.chars().next() {
        if let Some((emoji, len)) = match_emoji(rest) {
            out.push(' ');
            out.push_str(emoji.name());
            out.push(' ');
            rest = &rest[len..];
        } else {
            out.push(c);
            rest = &rest[c.len_utf8()..];
        }
    }
    out
}

/// Run the configured cleaning passes over a single title.
pub fn clean(text: &str, config: &CleanConfig) -> String {
    let mut text = text.to_string();

    if config.fix_emojis {
        text = demojize(&text);
    }

    if config.fix_contractions {
        text = contractions::expand(&text);
    }

    if config.remove_non_ascii {
        text = NON_ASCII_RE.replace_all(&text, "").into_owned();
    }

    if config.remove_punct {
        text = PUNCT_RE.replace_all(&text, "").into_owned();
    }

    if config.replace_numbers {
        text = DIGITS_RE.replace_all(&text, "number").into_owned();
    }

    // Underscores become spaces so snake_case survives as separate words.
    text = text.replace('_', " ");

    text.trim().to_string()
}
