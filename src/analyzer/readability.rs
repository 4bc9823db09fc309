//! Readability: Flesch reading ease and sentence/word length averages
//!
//! Formula: `206.835 - 1.015 * (words/sentences) - 84.6 * (syllables/words)`
//!
//! Higher is easier. Syllables come from the heuristic counter in
//! [`crate::text::count_syllables`], so the index is an approximation.

use super::Analyzer;
use crate::error::AnalysisError;
use crate::text::{count_syllables, round_half_up, round_to, Document};
use crate::{ReadabilityLevel, ReadabilityResult};

/// Analyzer for readability metrics
pub struct ReadabilityScorer;

impl ReadabilityScorer {
    pub fn new() -> Self {
        Self
    }

    /// Flesch reading-ease index, rounded half-up to an integer
    pub fn flesch_kincaid(
        word_count: usize,
        sentence_count: usize,
        syllable_count: usize,
    ) -> Result<i64, AnalysisError> {
        if sentence_count == 0 {
            return Err(AnalysisError::degenerate("Flesch-Kincaid index", "sentence count"));
        }
        if word_count == 0 {
            return Err(AnalysisError::degenerate("Flesch-Kincaid index", "word count"));
        }
        let words = word_count as f64;
        let words_per_sentence = words / sentence_count as f64;
        let syllables_per_word = syllable_count as f64 / words;
        Ok(round_half_up(
            206.835 - 1.015 * words_per_sentence - 84.6 * syllables_per_word,
        ))
    }
}

impl Default for ReadabilityScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for ReadabilityScorer {
    type Output = ReadabilityResult;

    fn name(&self) -> &'static str {
        "readability"
    }

    fn analyze(&self, doc: &Document) -> Result<ReadabilityResult, AnalysisError> {
        let words = doc.word_count();
        let sentences = doc.sentence_count();
        let syllables = count_syllables(doc.text());

        let index = Self::flesch_kincaid(words, sentences, syllables)?;

        Ok(ReadabilityResult {
            flesch_kincaid: index,
            level: ReadabilityLevel::from_index(index),
            avg_sentence_length: round_to(words as f64 / sentences as f64, 1),
            // raw character count, whitespace and punctuation included
            avg_word_length: round_to(doc.char_count() as f64 / words as f64, 1),
            total_words: words,
            total_sentences: sentences,
            total_syllables: syllables,
            syllables_per_word: round_to(syllables as f64 / words as f64, 1),
        })
    }
}
