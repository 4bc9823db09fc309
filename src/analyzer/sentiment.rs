//! Lexicon-based sentiment polarity

use super::Analyzer;
use crate::error::AnalysisError;
use crate::text::{split_sentences, Document};
use crate::{SentimentDistribution, SentimentLabel, SentimentResult};
use std::collections::HashSet;

const POSITIVE_WORDS: [&str; 8] = [
    "good", "great", "awesome", "excellent", "happy", "love", "wonderful", "fantastic",
];

const NEGATIVE_WORDS: [&str; 8] = [
    "bad", "poor", "terrible", "awful", "hate", "horrible", "disappointing", "sad",
];

const INTENSIFIERS: [&str; 5] = ["very", "extremely", "really", "quite", "absolutely"];

/// Scores each sentence against small fixed word lists.
///
/// Matching is exact on lower-cased whitespace tokens: no stemming, no negation
/// handling, and a token with punctuation attached (`"good,"`) does not match.
pub struct SentimentScorer {
    positive: HashSet<&'static str>,
    negative: HashSet<&'static str>,
    intensifiers: HashSet<&'static str>,
}

impl SentimentScorer {
    pub fn new() -> Self {
        Self {
            positive: POSITIVE_WORDS.into_iter().collect(),
            negative: NEGATIVE_WORDS.into_iter().collect(),
            intensifiers: INTENSIFIERS.into_iter().collect(),
        }
    }

    /// Polarity of one sentence: -1, 0 or 1.
    ///
    /// An intensifier doubles the weight of the next word only. The doubled weight
    /// decides which side wins in mixed sentences; only the sign is returned.
    pub fn score_sentence(&self, sentence: &str) -> f64 {
        let (raw, _) = sentence
            .to_lowercase()
            .split_whitespace()
            .fold((0i32, 1i32), |(score, multiplier), word| {
                if self.intensifiers.contains(word) {
                    (score, 2)
                } else if self.positive.contains(word) {
                    (score + multiplier, 1)
                } else if self.negative.contains(word) {
                    (score - multiplier, 1)
                } else {
                    (score, 1)
                }
            });

        match raw.signum() {
            1 => 1.0,
            -1 => -1.0,
            _ => 0.0,
        }
    }

    /// Score every sentence and average them
    pub fn analyze_text(&self, text: &str) -> Result<SentimentResult, AnalysisError> {
        let sentences = split_sentences(&text.to_lowercase());
        self.analyze_sentences(&sentences)
    }

    fn analyze_sentences(&self, sentences: &[String]) -> Result<SentimentResult, AnalysisError> {
        if sentences.is_empty() {
            return Err(AnalysisError::degenerate("sentiment score", "sentence count"));
        }

        let per_sentence: Vec<f64> = sentences.iter().map(|s| self.score_sentence(s)).collect();
        let score = per_sentence.iter().sum::<f64>() / per_sentence.len() as f64;

        let distribution = per_sentence.iter().fold(
            SentimentDistribution::default(),
            |mut dist, &s| {
                if s > 0.0 {
                    dist.positive += 1;
                } else if s < 0.0 {
                    dist.negative += 1;
                } else {
                    dist.neutral += 1;
                }
                dist
            },
        );

        Ok(SentimentResult {
            score,
            label: SentimentLabel::from_score(score),
            per_sentence,
            distribution,
        })
    }
}

impl Default for SentimentScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for SentimentScorer {
    type Output = SentimentResult;

    fn name(&self) -> &'static str {
        "sentiment"
    }

    fn analyze(&self, doc: &Document) -> Result<SentimentResult, AnalysisError> {
        self.analyze_sentences(doc.sentences())
    }
}
