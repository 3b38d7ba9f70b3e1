//! Deterministic text normalization feeding the TF-IDF vectorizer.
//!
//! The token string produced here must match what the model artifacts were
//! trained on, quirks included: emoticons are pulled out before punctuation
//! is collapsed and glued back onto the end of the text with no separator.

use std::sync::LazyLock;

use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};

use crate::stopwords::is_stop_word;

static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid tag regex"));
static EMOTICON_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?::|;|=)(?:-)?(?:\)|\(|D|P)").expect("valid emoticon regex")
});
static NON_WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\W+").expect("valid non-word regex"));
static STEMMER: LazyLock<Stemmer> = LazyLock::new(|| Stemmer::create(Algorithm::English));

/// Maps raw review text to a space-separated string of stems.
///
/// 1. Drop anything shaped like an HTML tag.
/// 2. Collect emoticons (`:)`, `;-(`, `=D`, ...) from what remains.
/// 3. Lowercase, collapse each run of non-word characters to one space, and
///    append the emoticons concatenated with their `-` removed.
/// 4. Split on whitespace, drop stop words, stem the rest.
///
/// Stemming is Snowball English (Porter2). Vocabularies fitted on classic
/// Porter stems are not compatible: `fairly` becomes `fair` here, not `fairli`.
#[must_use]
pub fn normalize(text: &str) -> String {
    let stripped = TAG_RE.replace_all(text, "");

    let emoticons: String = EMOTICON_RE
        .find_iter(&stripped)
        .map(|m| m.as_str())
        .collect::<String>()
        .replace('-', "");

    let mut reassembled = NON_WORD_RE
        .replace_all(&stripped.to_lowercase(), " ")
        .into_owned();
    reassembled.push_str(&emoticons);

    reassembled
        .split_whitespace()
        .filter(|token| !is_stop_word(token))
        .map(|token| STEMMER.stem(token))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_gives_empty_output() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn punctuation_only_gives_empty_output() {
        assert_eq!(normalize("!!! ... ???"), "");
    }

    #[test]
    fn html_emoticons_and_stop_words_are_handled() {
        let out = normalize("I LOVE this!! :) <b>great</b>");
        let tokens: Vec<&str> = out.split(' ').collect();
        assert!(tokens.contains(&"love"), "got: {out}");
        assert!(out.contains("great"), "got: {out}");
        assert!(out.contains(":)"), "got: {out}");
        assert!(!tokens.contains(&"this"), "got: {out}");
        assert!(!tokens.contains(&"i"), "got: {out}");
        assert!(!out.contains('<'), "got: {out}");
    }

    #[test]
    fn emoticons_are_appended_without_separator() {
        assert_eq!(normalize("Nice :) bad :("), "nice bad :):(");
    }

    #[test]
    fn emoticon_dash_is_removed() {
        let out = normalize("works fine ;-)");
        assert!(out.ends_with(";)"), "got: {out}");
        assert!(!out.contains('-'), "got: {out}");
    }

    #[test]
    fn stop_words_are_removed_and_words_stemmed() {
        assert_eq!(normalize("The battery is not good"), "batteri good");
    }

    #[test]
    fn inflections_share_a_stem() {
        assert_eq!(normalize("loved"), normalize("loving"));
        assert_eq!(normalize("works"), "work");
    }

    #[test]
    fn stems_follow_porter2() {
        assert_eq!(normalize("fairly"), "fair");
    }

    #[test]
    fn normalize_is_deterministic() {
        let text = "Fast delivery, but the box was damaged :(";
        assert_eq!(normalize(text), normalize(text));
    }

    #[test]
    fn normalize_is_idempotent_on_normalized_text() {
        for text in ["great product works well", "<p>Great</p> product, LOVE it", "bad"] {
            let once = normalize(text);
            assert_eq!(normalize(&once), once, "input: {text}");
        }
    }

    #[test]
    fn unclosed_angle_bracket_is_kept_as_text() {
        assert_eq!(normalize("size < expected"), "size expect");
    }
}
