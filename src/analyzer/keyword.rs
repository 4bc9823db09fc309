//! Keyword density and term-frequency ranking

use super::Analyzer;
use crate::error::AnalysisError;
use crate::text::{round_to, Document};
use crate::{DensityResult, KeywordResult, TermScore};
use std::collections::{HashMap, HashSet};

/// Common English function words excluded from term ranking
pub const STOP_WORDS: [&str; 20] = [
    "the", "be", "to", "of", "and", "a", "in", "that", "have", "i", "it", "for", "not", "on",
    "with", "he", "as", "you", "do", "at",
];

/// Number of ranked terms reported
pub const TOP_TERMS: usize = 10;

/// Analyzer for keyword density and the most frequent terms
pub struct KeywordAnalyzer {
    keywords: Vec<String>,
    stop_words: HashSet<&'static str>,
}

impl KeywordAnalyzer {
    pub fn new() -> Self {
        Self {
            keywords: Vec::new(),
            stop_words: STOP_WORDS.into_iter().collect(),
        }
    }

    /// Keywords to measure. They are lower-cased and trimmed, blank ones are
    /// dropped and duplicates are kept.
    pub fn with_keywords<S: AsRef<str>>(mut self, keywords: &[S]) -> Self {
        self.keywords = keywords
            .iter()
            .map(|k| k.as_ref().trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();
        self
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Percentage of tokens exactly equal to each keyword, in keyword order.
    /// Tokens keep attached punctuation, so `"cat."` does not count for `"cat"`.
    pub fn density(
        words: &[String],
        keywords: &[String],
    ) -> Result<Vec<DensityResult>, AnalysisError> {
        if words.is_empty() {
            return Err(AnalysisError::degenerate("keyword density", "word count"));
        }
        let total = words.len() as f64;

        Ok(keywords
            .iter()
            .map(|keyword| {
                let count = words.iter().filter(|w| *w == keyword).count();
                DensityResult {
                    keyword: keyword.clone(),
                    count,
                    density: round_to(count as f64 / total * 100.0, 2),
                }
            })
            .collect())
    }

    /// Top terms by raw frequency, stop words excluded.
    ///
    /// `score` is `frequency / total words`: plain term frequency with no
    /// inverse-document-frequency factor. Ties keep first-occurrence order.
    pub fn rank(&self, words: &[String]) -> Result<Vec<TermScore>, AnalysisError> {
        if words.is_empty() {
            return Err(AnalysisError::degenerate("term frequency", "word count"));
        }
        let total = words.len() as f64;

        let (mut counts, _) = words
            .iter()
            .filter(|w| !self.stop_words.contains(w.as_str()))
            .fold(
                (Vec::<(&str, usize)>::new(), HashMap::<&str, usize>::new()),
                |(mut counts, mut index), word| {
                    let seen = index.get(word.as_str()).copied();
                    match seen {
                        Some(i) => counts[i].1 += 1,
                        None => {
                            index.insert(word.as_str(), counts.len());
                            counts.push((word.as_str(), 1));
                        }
                    }
                    (counts, index)
                },
            );

        // sort_by is stable: equal frequencies stay in first-seen order
        counts.sort_by(|a, b| b.1.cmp(&a.1));

        Ok(counts
            .into_iter()
            .take(TOP_TERMS)
            .map(|(term, frequency)| TermScore {
                term: term.to_string(),
                frequency,
                score: round_to(frequency as f64 / total, 3),
            })
            .collect())
    }
}

impl Default for KeywordAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for KeywordAnalyzer {
    type Output = KeywordResult;

    fn name(&self) -> &'static str {
        "keywords"
    }

    fn analyze(&self, doc: &Document) -> Result<KeywordResult, AnalysisError> {
        Ok(KeywordResult {
            density: Self::density(doc.words(), &self.keywords)?,
            tfidf: self.rank(doc.words())?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::tokenize_words;

    fn words(text: &str) -> Vec<String> {
        tokenize_words(text)
    }

    #[test]
    fn test_density_counts_exact_tokens_only() {
        let w = words("The cat sat. The cat ran!");
        let result = KeywordAnalyzer::density(&w, &["cat".to_string()]).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].count, 2);
        assert_eq!(result[0].density, 33.33);
    }

    #[test]
    fn test_density_absent_keyword_is_zero() {
        let w = words("alpha beta gamma");
        let result = KeywordAnalyzer::density(&w, &["delta".to_string()]).unwrap();
        assert_eq!(result[0].count, 0);
        assert_eq!(result[0].density, 0.0);
    }

    #[test]
    fn test_density_keeps_keyword_order_and_duplicates() {
        let w = words("rust go rust zig");
        let keywords = vec!["zig".to_string(), "rust".to_string(), "zig".to_string()];
        let result = KeywordAnalyzer::density(&w, &keywords).unwrap();
        let names: Vec<&str> = result.iter().map(|d| d.keyword.as_str()).collect();
        assert_eq!(names, vec!["zig", "rust", "zig"]);
        assert_eq!(result[1].density, 50.0);
        assert_eq!(result[0].density, result[2].density);
    }

    #[test]
    fn test_density_without_words_is_degenerate() {
        let err = KeywordAnalyzer::density(&[], &["x".to_string()]).unwrap_err();
        assert!(matches!(err, AnalysisError::DivisionDegenerate { .. }));
    }

    #[test]
    fn test_with_keywords_normalizes() {
        let analyzer = KeywordAnalyzer::new().with_keywords(&["  Rust ", "SEO"]);
        assert_eq!(analyzer.keywords(), &["rust".to_string(), "seo".to_string()]);
    }

    #[test]
    fn test_with_keywords_drops_blank() {
        let analyzer = KeywordAnalyzer::new().with_keywords(&[" ", "", "Cat"]);
        assert_eq!(analyzer.keywords(), &["cat".to_string()]);
    }

    #[test]
    fn test_rank_excludes_stop_words() {
        let w = words("the cat and the dog of the house");
        let ranked = KeywordAnalyzer::new().rank(&w).unwrap();
        let terms: Vec<&str> = ranked.iter().map(|t| t.term.as_str()).collect();
        assert_eq!(terms, vec!["cat", "dog", "house"]);
        assert!(ranked.iter().all(|t| !STOP_WORDS.contains(&t.term.as_str())));
    }

    #[test]
    fn test_rank_orders_by_frequency_with_stable_ties() {
        let w = words("pear apple pear fig apple pear kiwi");
        let ranked = KeywordAnalyzer::new().rank(&w).unwrap();
        assert_eq!(ranked[0].term, "pear");
        assert_eq!(ranked[0].frequency, 3);
        assert_eq!(ranked[1].term, "apple");
        assert_eq!(ranked[2].term, "fig");
        assert_eq!(ranked[3].term, "kiwi");
        // 3 / 7 = 0.428571...
        assert_eq!(ranked[0].score, 0.429);
    }

    #[test]
    fn test_rank_score_uses_total_word_count() {
        // 4 words total, 2 of them stop words
        let w = words("the cat of cat");
        let ranked = KeywordAnalyzer::new().rank(&w).unwrap();
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].score, 0.5);
    }

    #[test]
    fn test_rank_caps_at_ten_strictly_descending() {
        let mut text = String::new();
        for i in 0..15 {
            for _ in 0..(15 - i) {
                text.push_str(&format!("term{} ", i));
            }
        }
        let ranked = KeywordAnalyzer::new().rank(&words(&text)).unwrap();
        assert_eq!(ranked.len(), TOP_TERMS);
        assert!(ranked.windows(2).all(|p| p[0].frequency > p[1].frequency));
    }

    #[test]
    fn test_analyze_document() {
        let doc = Document::new("Rust is fast. Rust is safe.").unwrap();
        let result = KeywordAnalyzer::new()
            .with_keywords(&["rust"])
            .analyze(&doc)
            .unwrap();
        assert_eq!(result.density[0].count, 2);
        assert_eq!(result.tfidf[0].term, "rust");
        assert_eq!(result.tfidf[0].frequency, 2);
    }
}
