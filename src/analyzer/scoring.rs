//! Score calculation for content quality

use crate::text::round_half_up;
use crate::{
    AnalysisSummary, CombinedResult, Grade, KeywordResult, LinguisticResult, ReadabilityResult,
    SentimentLabel,
};

/// Keyword density band that earns no penalty, in percent
const DENSITY_FLOOR: f64 = 1.0;
const DENSITY_CEILING: f64 = 5.0;
const PENALTY_PER_EXCESS_POINT: f64 = 10.0;
const PENALTY_PER_MISSING_POINT: f64 = 20.0;

/// Readability index outside this band costs points
const READABLE_MIN: i64 = 30;
const READABLE_MAX: i64 = 70;
const PENALTY_EXTREME_READABILITY: f64 = 20.0;
const MAX_AVG_SENTENCE_LENGTH: f64 = 25.0;
const PENALTY_LONG_SENTENCES: f64 = 15.0;

const MIN_LEXICAL_DENSITY: f64 = 40.0;
const PENALTY_LOW_LEXICAL_DENSITY: f64 = 20.0;
const PENALTY_MISSING_SENTENCE_TYPE: f64 = 10.0;

/// Sub-scores below this get a recommendation
const RECOMMENDATION_THRESHOLD: u8 = 70;

/// Calculator for content quality scores
pub struct ScoreCalculator;

impl ScoreCalculator {
    /// Build the summary for a combined result. A failed section scores 0.
    pub fn summarize(result: &CombinedResult) -> AnalysisSummary {
        let keyword_score = Self::keyword_score(result.keywords.value());
        let readability_score = Self::readability_score(result.readability.value());
        let content_score = Self::content_score(result.linguistic.value());
        let sentiment_score = result.sentiment.value().map_or(0.0, |s| s.score);

        AnalysisSummary {
            overall_score: Self::overall(keyword_score, readability_score, content_score),
            keyword_score,
            readability_score,
            content_score,
            sentiment_score,
            sentiment_label: Self::sentiment_label(sentiment_score),
        }
    }

    /// Score keyword placement. Only the first keyword is considered.
    pub fn keyword_score(keywords: Option<&KeywordResult>) -> u8 {
        let Some(first) = keywords.and_then(|k| k.density.first()) else {
            return 0;
        };

        let mut score = 100.0;
        if first.density > DENSITY_CEILING {
            score -= (first.density - DENSITY_CEILING) * PENALTY_PER_EXCESS_POINT;
        }
        if first.density < DENSITY_FLOOR {
            score -= (DENSITY_FLOOR - first.density) * PENALTY_PER_MISSING_POINT;
        }
        clamp_score(score)
    }

    pub fn readability_score(readability: Option<&ReadabilityResult>) -> u8 {
        let Some(metrics) = readability else {
            return 0;
        };

        let mut score = 100.0;
        if metrics.flesch_kincaid < READABLE_MIN || metrics.flesch_kincaid > READABLE_MAX {
            score -= PENALTY_EXTREME_READABILITY;
        }
        if metrics.avg_sentence_length > MAX_AVG_SENTENCE_LENGTH {
            score -= PENALTY_LONG_SENTENCES;
        }
        clamp_score(score)
    }

    pub fn content_score(linguistic: Option<&LinguisticResult>) -> u8 {
        let Some(metrics) = linguistic else {
            return 0;
        };

        let mut score = 100.0;
        if metrics.vocabulary.lexical_density < MIN_LEXICAL_DENSITY {
            score -= PENALTY_LOW_LEXICAL_DENSITY;
        }
        if metrics.grammar.sentence_types.has_empty_bucket() {
            score -= PENALTY_MISSING_SENTENCE_TYPE;
        }
        clamp_score(score)
    }

    /// Rounded mean of the three sub-scores; sentiment is not part of it
    pub fn overall(keyword: u8, readability: u8, content: u8) -> u8 {
        let sum = keyword as f64 + readability as f64 + content as f64;
        clamp_score(sum / 3.0)
    }

    pub fn sentiment_label(score: f64) -> SentimentLabel {
        SentimentLabel::from_score(score)
    }

    /// Get a description of the grade
    pub fn grade_description(grade: Grade) -> &'static str {
        match grade {
            Grade::A => "Excellent - Content is well balanced and easy to read",
            Grade::B => "Good - Content is solid but has room for improvement",
            Grade::C => "Fair - Content works but needs tightening",
            Grade::D => "Poor - Content has significant quality issues",
            Grade::F => "Failing - Content needs major revision",
        }
    }

    /// Get recommendations based on sub-scores
    pub fn recommendations(summary: &AnalysisSummary) -> Vec<String> {
        let mut recs = Vec::new();

        if summary.keyword_score < RECOMMENDATION_THRESHOLD {
            recs.push(
                "Keep the primary keyword between 1% and 5% of the words".to_string(),
            );
        }

        if summary.readability_score < RECOMMENDATION_THRESHOLD {
            recs.push("Use shorter sentences and simpler words".to_string());
        }

        if summary.content_score < RECOMMENDATION_THRESHOLD {
            recs.push(
                "Vary vocabulary and mix statements, questions and calls to action".to_string(),
            );
        }

        if summary.sentiment_score < 0.0 {
            recs.push("Tone reads negative - consider more positive wording".to_string());
        }

        if recs.is_empty() {
            recs.push("Content is in good shape!".to_string());
        }

        recs
    }
}

fn clamp_score(score: f64) -> u8 {
    round_half_up(score).clamp(0, 100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ClauseCounts, DensityResult, GrammarStats, ReadabilityLevel, SentenceTypeCounts,
        TaggerStatus, VocabularyStats,
    };

    fn keywords_with_density(density: f64) -> KeywordResult {
        KeywordResult {
            density: vec![DensityResult {
                keyword: "rust".to_string(),
                count: 1,
                density,
            }],
            tfidf: vec![],
        }
    }

    fn readability(index: i64, avg_sentence_length: f64) -> ReadabilityResult {
        ReadabilityResult {
            flesch_kincaid: index,
            level: ReadabilityLevel::from_index(index),
            avg_sentence_length,
            avg_word_length: 5.0,
            total_words: 100,
            total_sentences: 5,
            total_syllables: 150,
            syllables_per_word: 1.5,
        }
    }

    fn linguistic(lexical_density: f64, imperative: usize) -> LinguisticResult {
        LinguisticResult {
            grammar: GrammarStats {
                sentence_types: SentenceTypeCounts {
                    declarative: 4,
                    interrogative: 1,
                    exclamatory: 1,
                    imperative,
                },
                verb_tenses: None,
                clauses: ClauseCounts::default(),
            },
            parts_of_speech: None,
            vocabulary: VocabularyStats {
                total_words: 100,
                unique_words: 50,
                lexical_density,
                average_word_length: 4.5,
                long_word_count: 10,
            },
            tagger: TaggerStatus::Disabled,
        }
    }

    #[test]
    fn test_keyword_score_in_band() {
        assert_eq!(ScoreCalculator::keyword_score(Some(&keywords_with_density(3.0))), 100);
        assert_eq!(ScoreCalculator::keyword_score(Some(&keywords_with_density(1.0))), 100);
        assert_eq!(ScoreCalculator::keyword_score(Some(&keywords_with_density(5.0))), 100);
    }

    #[test]
    fn test_keyword_score_stuffing_penalty() {
        // 100 - (8 - 5) * 10
        assert_eq!(ScoreCalculator::keyword_score(Some(&keywords_with_density(8.0))), 70);
        // 100 - 28.33 * 10 clamps to 0
        assert_eq!(ScoreCalculator::keyword_score(Some(&keywords_with_density(33.33))), 0);
    }

    #[test]
    fn test_keyword_score_absence_penalty() {
        // 100 - (1 - 0) * 20
        assert_eq!(ScoreCalculator::keyword_score(Some(&keywords_with_density(0.0))), 80);
        // 100 - 0.5 * 20
        assert_eq!(ScoreCalculator::keyword_score(Some(&keywords_with_density(0.5))), 90);
    }

    #[test]
    fn test_keyword_score_only_first_keyword_counts() {
        let mut result = keywords_with_density(3.0);
        result.density.push(DensityResult {
            keyword: "seo".to_string(),
            count: 40,
            density: 40.0,
        });
        assert_eq!(ScoreCalculator::keyword_score(Some(&result)), 100);
    }

    #[test]
    fn test_keyword_score_without_keywords_is_zero() {
        let empty = KeywordResult {
            density: vec![],
            tfidf: vec![],
        };
        assert_eq!(ScoreCalculator::keyword_score(Some(&empty)), 0);
        assert_eq!(ScoreCalculator::keyword_score(None), 0);
    }

    #[test]
    fn test_readability_score_penalties() {
        assert_eq!(ScoreCalculator::readability_score(Some(&readability(60, 15.0))), 100);
        assert_eq!(ScoreCalculator::readability_score(Some(&readability(29, 15.0))), 80);
        assert_eq!(ScoreCalculator::readability_score(Some(&readability(71, 15.0))), 80);
        assert_eq!(ScoreCalculator::readability_score(Some(&readability(60, 25.1))), 85);
        assert_eq!(ScoreCalculator::readability_score(Some(&readability(119, 30.0))), 65);
        // band edges are inclusive
        assert_eq!(ScoreCalculator::readability_score(Some(&readability(30, 25.0))), 100);
        assert_eq!(ScoreCalculator::readability_score(Some(&readability(70, 25.0))), 100);
    }

    #[test]
    fn test_content_score_penalties() {
        assert_eq!(ScoreCalculator::content_score(Some(&linguistic(55.0, 1))), 100);
        assert_eq!(ScoreCalculator::content_score(Some(&linguistic(39.9, 1))), 80);
        assert_eq!(ScoreCalculator::content_score(Some(&linguistic(55.0, 0))), 90);
        assert_eq!(ScoreCalculator::content_score(Some(&linguistic(10.0, 0))), 70);
    }

    #[test]
    fn test_overall_rounds_mean() {
        // (100 + 80 + 90) / 3 = 90
        assert_eq!(ScoreCalculator::overall(100, 80, 90), 90);
        // 251 / 3 = 83.67
        assert_eq!(ScoreCalculator::overall(100, 80, 71), 84);
        // 250 / 3 = 83.33
        assert_eq!(ScoreCalculator::overall(100, 80, 70), 83);
        assert_eq!(ScoreCalculator::overall(0, 0, 0), 0);
    }

    #[test]
    fn test_recommendations_low_scores() {
        let summary = AnalysisSummary {
            overall_score: 40,
            keyword_score: 30,
            readability_score: 50,
            content_score: 40,
            sentiment_score: -0.5,
            sentiment_label: SentimentLabel::VeryNegative,
        };
        let recs = ScoreCalculator::recommendations(&summary);
        assert_eq!(recs.len(), 4);
        assert!(recs[0].contains("keyword"));
        assert!(recs[1].contains("shorter sentences"));
        assert!(recs[2].contains("vocabulary"));
        assert!(recs[3].contains("negative"));
    }

    #[test]
    fn test_recommendations_high_scores() {
        let summary = AnalysisSummary {
            overall_score: 95,
            keyword_score: 100,
            readability_score: 85,
            content_score: 100,
            sentiment_score: 0.25,
            sentiment_label: SentimentLabel::Positive,
        };
        let recs = ScoreCalculator::recommendations(&summary);
        assert_eq!(recs.len(), 1);
        assert!(recs[0].contains("good shape"));
    }

    #[test]
    fn test_grade_description_all_grades() {
        assert!(ScoreCalculator::grade_description(Grade::A).contains("Excellent"));
        assert!(ScoreCalculator::grade_description(Grade::B).contains("Good"));
        assert!(ScoreCalculator::grade_description(Grade::C).contains("Fair"));
        assert!(ScoreCalculator::grade_description(Grade::D).contains("Poor"));
        assert!(ScoreCalculator::grade_description(Grade::F).contains("Failing"));
    }
}
