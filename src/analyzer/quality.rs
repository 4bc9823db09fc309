//! Content-quality findings reported next to the scores.
//!
//! Findings never change a score. Config can re-level or switch off each rule.

use crate::{CombinedResult, Issue, Rule, Severity};

/// Recommended minimum document length, in words
pub const MIN_WORDS: usize = 300;

/// Average sentence length above which sentences read as too long
pub const MAX_AVG_SENTENCE_LENGTH: f64 = 25.0;

/// Keyword density above which a keyword counts as stuffed, in percent
pub const MAX_KEYWORD_DENSITY: f64 = 5.0;

pub struct QualityChecker;

impl QualityChecker {
    pub fn new() -> Self {
        Self
    }

    pub fn check(&self, result: &CombinedResult) -> Vec<Issue> {
        let mut issues = Vec::new();

        if result.word_count < MIN_WORDS {
            issues.push(Issue {
                rule: Rule::ContentTooShort,
                severity: Severity::Warning,
                message: format!(
                    "Content length is below recommended minimum ({} words, found {})",
                    MIN_WORDS, result.word_count
                ),
                suggestion: Some("Expand the content with more detail or examples".to_string()),
            });
        }

        if let Some(readability) = result.readability.value() {
            if readability.avg_sentence_length > MAX_AVG_SENTENCE_LENGTH {
                issues.push(Issue {
                    rule: Rule::LongSentences,
                    severity: Severity::Warning,
                    message: format!(
                        "Average sentence length is too high ({:.1} words)",
                        readability.avg_sentence_length
                    ),
                    suggestion: Some("Aim for 15-20 words per sentence".to_string()),
                });
            }
        }

        if let Some(keywords) = result.keywords.value() {
            for entry in keywords
                .density
                .iter()
                .filter(|d| d.density > MAX_KEYWORD_DENSITY)
            {
                issues.push(Issue {
                    rule: Rule::KeywordStuffing,
                    severity: Severity::Warning,
                    message: format!(
                        "High keyword density ({:.1}%) for \"{}\"",
                        entry.density, entry.keyword
                    ),
                    suggestion: Some(format!(
                        "Use \"{}\" less often or replace some uses with synonyms",
                        entry.keyword
                    )),
                });
            }
        }

        issues
    }
}

impl Default for QualityChecker {
    fn default() -> Self {
        Self::new()
    }
}
