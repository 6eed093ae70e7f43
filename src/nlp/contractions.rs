//! English contraction expansion
//!
//! Expands common English contractions before punctuation stripping, so
//! "can't" survives as "cannot" instead of collapsing into "cant".

use once_cell::sync::Lazy;
use std::collections::HashMap;

static CONTRACTIONS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("ain't", "are not"),
        ("aren't", "are not"),
        ("can't", "cannot"),
        ("could've", "could have"),
        ("couldn't", "could not"),
        ("didn't", "did not"),
        ("doesn't", "does not"),
        ("don't", "do not"),
        ("hadn't", "had not"),
        ("hasn't", "has not"),
        ("haven't", "have not"),
        ("he'd", "he would"),
        ("he'll", "he will"),
        ("he's", "he is"),
        ("here's", "here is"),
        ("how's", "how is"),
        ("i'd", "i would"),
        ("i'll", "i will"),
        ("i'm", "i am"),
        ("i've", "i have"),
        ("isn't", "is not"),
        ("it'd", "it would"),
        ("it'll", "it will"),
        ("it's", "it is"),
        ("let's", "let us"),
        ("mightn't", "might not"),
        ("might've", "might have"),
        ("mustn't", "must not"),
        ("must've", "must have"),
        ("needn't", "need not"),
        ("shan't", "shall not"),
        ("she'd", "she would"),
        ("she'll", "she will"),
        ("she's", "she is"),
        ("should've", "should have"),
        ("shouldn't", "should not"),
        ("that'll", "that will"),
        ("that's", "that is"),
        ("there's", "there is"),
        ("they'd", "they would"),
        ("they'll", "they will"),
        ("they're", "they are"),
        ("they've", "they have"),
        ("wasn't", "was not"),
        ("we'd", "we would"),
        ("we'll", "we will"),
        ("we're", "we are"),
        ("we've", "we have"),
        ("weren't", "were not"),
        ("what'll", "what will"),
        ("what's", "what is"),
        ("when's", "when is"),
        ("where's", "where is"),
        ("who'll", "who will"),
        ("who's", "who is"),
        ("why's", "why is"),
        ("won't", "will not"),
        ("would've", "would have"),
        ("wouldn't", "would not"),
        ("you'd", "you would"),
        ("you'll", "you will"),
        ("you're", "you are"),
        ("you've", "you have"),
    ])
});

/// Expand contractions word by word, case-insensitively.
///
/// Whitespace runs are collapsed to single spaces; titles never carry
/// meaningful whitespace structure.
pub fn expand(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let lower = word.to_lowercase();
            match CONTRACTIONS.get(lower.as_str()) {
                Some(expanded) => (*expanded).to_string(),
                None => word.to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_basic() {
        assert_eq!(expand("it's a test"), "it is a test");
        assert_eq!(expand("don't stop"), "do not stop");
    }

    #[test]
    fn test_expand_case_insensitive() {
        assert_eq!(expand("It's Won't"), "it is will not");
    }

    #[test]
    fn test_expand_leaves_other_words() {
        assert_eq!(expand("children's language"), "children's language");
    }

    #[test]
    fn test_expand_empty() {
        assert_eq!(expand(""), "");
    }
}
