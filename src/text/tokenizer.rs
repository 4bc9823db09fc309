//! Word, sentence and syllable tokenization
//!
//! All analyzers consume the same [`Document`]: the raw text plus its lower-cased
//! whitespace tokens and its punctuation-delimited sentences. Tokens keep any
//! punctuation attached to them (`"sat."` stays `"sat."`); only the sentence splitter
//! treats `.`, `!` and `?` specially.

use crate::error::AnalysisError;
use regex::Regex;
use std::sync::OnceLock;

fn sentence_split_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[.!?]+").expect("valid sentence split pattern"))
}

fn sentence_segment_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^.!?]+[.!?]*").expect("valid sentence segment pattern"))
}

fn syllable_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^aeiouy]*[aeiouy]+").expect("valid syllable pattern"))
}

/// Immutable analysis input with its derived token lists
#[derive(Debug, Clone)]
pub struct Document {
    text: String,
    words: Vec<String>,
    sentences: Vec<String>,
}

impl Document {
    /// Tokenize `text`. Fails with [`AnalysisError::EmptyInput`] when it is blank.
    pub fn new(text: impl Into<String>) -> Result<Self, AnalysisError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(AnalysisError::EmptyInput);
        }
        let words = tokenize_words(&text);
        let sentences = split_sentences(&text);
        Ok(Self {
            text,
            words,
            sentences,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Lower-cased whitespace tokens, never empty strings
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Trimmed sentences without their terminators, never empty strings
    pub fn sentences(&self) -> &[String] {
        &self.sentences
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn sentence_count(&self) -> usize {
        self.sentences.len()
    }

    /// Character count of the raw text, whitespace and punctuation included
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}

/// Lower-case and split on runs of whitespace
pub fn tokenize_words(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Split on runs of `.`, `!`, `?`; segments that are blank after trimming are dropped
pub fn split_sentences(text: &str) -> Vec<String> {
    sentence_split_re()
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Like [`split_sentences`] but each sentence keeps its terminal punctuation.
/// A trailing fragment without a terminator is kept as its own sentence.
pub fn segment_sentences(text: &str) -> Vec<String> {
    sentence_segment_re()
        .find_iter(text)
        .map(|m| m.as_str().trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Words with surrounding punctuation stripped, original casing preserved
pub fn extract_terms(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

/// Heuristic syllable count over the whole text.
///
/// Letters outside `a-z` are discarded, then every run of consonants followed by
/// vowels (`y` counts as a vowel) is one syllable. Silent endings and diphthongs are
/// not special-cased, so "cake" counts 2 and "area" counts 1.
pub fn count_syllables(text: &str) -> usize {
    let letters: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase())
        .collect();
    syllable_re().find_iter(&letters).count()
}


#[cfg(test)]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    fn prose_like() -> impl Strategy<Value = String> {
        prop::collection::vec(
            prop::sample::select(vec![
                "the", "Cat", "sat", ".", "!", "?", "...", " ", "  ", "\n", "\t", ",", "good",
                "very", "why", "Please", "x",
            ]),
            0..40,
        )
        .prop_map(|parts| parts.join(""))
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn words_never_empty(ref input in ".{0,300}") {
            prop_assert!(tokenize_words(input).iter().all(|w| !w.is_empty()));
        }

        #[test]
        fn sentences_never_empty(ref input in ".{0,300}") {
            prop_assert!(split_sentences(input).iter().all(|s| !s.trim().is_empty()));
            prop_assert!(segment_sentences(input).iter().all(|s| !s.trim().is_empty()));
        }

        #[test]
        fn prose_tokens_are_lowercase(ref input in prose_like()) {
            for word in tokenize_words(input) {
                prop_assert_eq!(word.clone(), word.to_lowercase());
                prop_assert!(!word.chars().any(char::is_whitespace));
            }
        }
    }
}
