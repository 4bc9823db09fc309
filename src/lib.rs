//! Lucid: Content Quality Analyzer
//!
//! This library computes heuristic quality metrics over plain text (keyword density,
//! term frequency, sentiment polarity, grammar and vocabulary statistics, readability)
//! and folds them into a single 0-100 content score.

pub mod analyzer;
pub mod config;
pub mod error;
pub mod reporter;
pub mod tagger;
pub mod text;
pub mod watcher;

pub use error::{AnalysisError, ErrorKind};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;
use tagger::PosTag;

/// Density of one keyword among all word tokens
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DensityResult {
    pub keyword: String,
    /// Tokens exactly equal to the keyword
    pub count: usize,
    /// Percentage of all tokens (2 decimal places)
    pub density: f64,
}

/// A ranked term
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TermScore {
    pub term: String,
    pub frequency: usize,
    /// frequency / total words (3 decimal places)
    pub score: f64,
}

/// Keyword analyzer output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordResult {
    /// One entry per requested keyword, in request order
    pub density: Vec<DensityResult>,
    /// Top terms by frequency (named for compatibility; there is no IDF factor)
    pub tfidf: Vec<TermScore>,
}

/// Sentiment label derived from a mean polarity score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SentimentLabel {
    VeryPositive,
    Positive,
    Neutral,
    Negative,
    VeryNegative,
}

impl SentimentLabel {
    pub fn from_score(score: f64) -> Self {
        if score > 0.5 {
            SentimentLabel::VeryPositive
        } else if score > 0.0 {
            SentimentLabel::Positive
        } else if score == 0.0 {
            SentimentLabel::Neutral
        } else if score > -0.5 {
            SentimentLabel::Negative
        } else {
            SentimentLabel::VeryNegative
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SentimentLabel::VeryPositive => write!(f, "Very Positive"),
            SentimentLabel::Positive => write!(f, "Positive"),
            SentimentLabel::Neutral => write!(f, "Neutral"),
            SentimentLabel::Negative => write!(f, "Negative"),
            SentimentLabel::VeryNegative => write!(f, "Very Negative"),
        }
    }
}

/// Number of sentences on each side of zero
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentDistribution {
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
}

/// Sentiment analyzer output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentResult {
    /// Mean of per-sentence scores, in [-1, 1]
    pub score: f64,
    pub label: SentimentLabel,
    /// One of -1, 0, 1 per sentence
    pub per_sentence: Vec<f64>,
    pub distribution: SentimentDistribution,
}

/// Presentation banding of the readability index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReadabilityLevel {
    VeryDifficult,
    Difficult,
    FairlyDifficult,
    Standard,
    Easy,
}

impl ReadabilityLevel {
    pub fn from_index(index: i64) -> Self {
        match index {
            i if i < 30 => ReadabilityLevel::VeryDifficult,
            i if i < 50 => ReadabilityLevel::Difficult,
            i if i < 60 => ReadabilityLevel::FairlyDifficult,
            i if i < 70 => ReadabilityLevel::Standard,
            _ => ReadabilityLevel::Easy,
        }
    }
}

impl std::fmt::Display for ReadabilityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReadabilityLevel::VeryDifficult => write!(f, "Very Difficult"),
            ReadabilityLevel::Difficult => write!(f, "Difficult"),
            ReadabilityLevel::FairlyDifficult => write!(f, "Fairly Difficult"),
            ReadabilityLevel::Standard => write!(f, "Standard"),
            ReadabilityLevel::Easy => write!(f, "Easy"),
        }
    }
}

/// Readability analyzer output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadabilityResult {
    pub flesch_kincaid: i64,
    pub level: ReadabilityLevel,
    /// Words per sentence (1 decimal place)
    pub avg_sentence_length: f64,
    /// Raw character count per word (1 decimal place)
    pub avg_word_length: f64,
    pub total_words: usize,
    pub total_sentences: usize,
    pub total_syllables: usize,
    /// 1 decimal place
    pub syllables_per_word: f64,
}

/// Sentence counts by type. Imperatives are also counted under their punctuation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentenceTypeCounts {
    pub declarative: usize,
    pub interrogative: usize,
    pub exclamatory: usize,
    pub imperative: usize,
}

impl SentenceTypeCounts {
    /// True when at least one sentence type never occurs
    pub fn has_empty_bucket(&self) -> bool {
        [
            self.declarative,
            self.interrogative,
            self.exclamatory,
            self.imperative,
        ]
        .contains(&0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerbTenseCounts {
    pub present: usize,
    pub past: usize,
    pub future: usize,
}

/// Heuristic clause buckets; compound and complex may overlap
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClauseCounts {
    pub simple: usize,
    pub compound: usize,
    pub complex: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrammarStats {
    pub sentence_types: SentenceTypeCounts,
    /// Only available when a tagger ran
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verb_tenses: Option<VerbTenseCounts>,
    pub clauses: ClauseCounts,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyStats {
    pub total_words: usize,
    /// Distinct terms, case-insensitive
    pub unique_words: usize,
    /// unique / total as a percentage (1 decimal place)
    pub lexical_density: f64,
    /// 1 decimal place
    pub average_word_length: f64,
    pub long_word_count: usize,
}

/// Whether part-of-speech statistics came from a tagger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum TaggerStatus {
    Used { name: String },
    Unavailable { reason: String },
    Disabled,
}

/// Lexical analyzer output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinguisticResult {
    pub grammar: GrammarStats,
    /// Word-class counts, only available when a tagger ran
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parts_of_speech: Option<BTreeMap<PosTag, usize>>,
    pub vocabulary: VocabularyStats,
    pub tagger: TaggerStatus,
}

/// Why an analyzer section has no result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionFailure {
    pub kind: ErrorKind,
    pub message: String,
}

/// Output of one analyzer: its result, or the flagged failure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "data", rename_all = "lowercase")]
pub enum Section<T> {
    Complete(T),
    Failed(SectionFailure),
}

impl<T> Section<T> {
    pub fn value(&self) -> Option<&T> {
        match self {
            Section::Complete(v) => Some(v),
            Section::Failed(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&SectionFailure> {
        match self {
            Section::Complete(_) => None,
            Section::Failed(f) => Some(f),
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, Section::Complete(_))
    }
}

impl<T> From<Result<T, AnalysisError>> for Section<T> {
    fn from(result: Result<T, AnalysisError>) -> Self {
        match result {
            Ok(v) => Section::Complete(v),
            Err(e) => Section::Failed(SectionFailure {
                kind: e.kind(),
                message: e.to_string(),
            }),
        }
    }
}

/// Combined output of the four analyzers for one text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinedResult {
    pub word_count: usize,
    pub sentence_count: usize,
    pub keywords: Section<KeywordResult>,
    pub sentiment: Section<SentimentResult>,
    pub linguistic: Section<LinguisticResult>,
    pub readability: Section<ReadabilityResult>,
}

impl CombinedResult {
    /// Fold the sections into scores
    pub fn summary(&self) -> AnalysisSummary {
        analyzer::ScoreCalculator::summarize(self)
    }

    /// Names of the sections that failed
    pub fn failed_sections(&self) -> Vec<&'static str> {
        [
            ("keywords", self.keywords.is_complete()),
            ("sentiment", self.sentiment.is_complete()),
            ("linguistic", self.linguistic.is_complete()),
            ("readability", self.readability.is_complete()),
        ]
        .into_iter()
        .filter(|(_, complete)| !complete)
        .map(|(name, _)| name)
        .collect()
    }
}

/// Composite scores. Sentiment is reported but not part of the overall mean.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisSummary {
    /// round(mean(keyword, readability, content))
    pub overall_score: u8,
    pub keyword_score: u8,
    pub readability_score: u8,
    pub content_score: u8,
    pub sentiment_score: f64,
    pub sentiment_label: SentimentLabel,
}

/// Letter grade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    pub fn from_score(score: u8) -> Self {
        match score {
            90..=100 => Grade::A,
            80..=89 => Grade::B,
            70..=79 => Grade::C,
            60..=69 => Grade::D,
            _ => Grade::F,
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Grade::A => write!(f, "A"),
            Grade::B => write!(f, "B"),
            Grade::C => write!(f, "C"),
            Grade::D => write!(f, "D"),
            Grade::F => write!(f, "F"),
        }
    }
}

/// Severity levels for issues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

/// Content quality rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rule {
    /// Fewer words than the recommended minimum
    ContentTooShort,
    /// Average sentence length above the recommended maximum
    LongSentences,
    /// A keyword makes up too large a share of the text
    KeywordStuffing,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::ContentTooShort => write!(f, "content-too-short"),
            Rule::LongSentences => write!(f, "long-sentences"),
            Rule::KeywordStuffing => write!(f, "keyword-stuffing"),
        }
    }
}

/// An issue found during analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    /// Rule that found this issue
    pub rule: Rule,
    /// Severity of the issue
    pub severity: Severity,
    /// Human-readable message
    pub message: String,
    /// Suggested fix (if available)
    pub suggestion: Option<String>,
}

/// The main result of analyzing one document
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentReport {
    /// Path of the analyzed document (`-` for stdin)
    pub file_path: PathBuf,
    /// Keywords the document was measured against
    pub keywords: Vec<String>,
    pub grade: Grade,
    pub summary: AnalysisSummary,
    pub analysis: CombinedResult,
    /// Findings after config severity overrides
    pub issues: Vec<Issue>,
}

/// Public API: analyze a text against keywords with the default engine
/// (built-in tagger enabled).
pub fn analyze_text<S: AsRef<str>>(
    text: &str,
    keywords: &[S],
) -> Result<CombinedResult, AnalysisError> {
    analyzer::AnalysisEngine::new().analyze(text, keywords)
}

/// Public API: analyze a document file with config lookup.
///
/// * `path` - path to the document
/// * `work_dir` - directory where the config search starts
/// * `config_path` - optional path to .lucidrc.json; if None, searches from work_dir
pub fn analyze_file(
    path: &std::path::Path,
    work_dir: &std::path::Path,
    config_path: Option<&std::path::Path>,
) -> anyhow::Result<ContentReport> {
    let config = crate::config::load_config(work_dir, config_path)?;
    let engine = analyzer::AnalysisEngine::new();
    engine.analyze_file(path, Some(&config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_from_score() {
        assert_eq!(Grade::from_score(100), Grade::A);
        assert_eq!(Grade::from_score(90), Grade::A);
        assert_eq!(Grade::from_score(89), Grade::B);
        assert_eq!(Grade::from_score(70), Grade::C);
        assert_eq!(Grade::from_score(60), Grade::D);
        assert_eq!(Grade::from_score(59), Grade::F);
        assert_eq!(Grade::from_score(0), Grade::F);
    }

    #[test]
    fn test_sentence_types_empty_bucket() {
        let full = SentenceTypeCounts {
            declarative: 3,
            interrogative: 1,
            exclamatory: 1,
            imperative: 1,
        };
        assert!(!full.has_empty_bucket());
        let missing = SentenceTypeCounts {
            imperative: 0,
            ..full
        };
        assert!(missing.has_empty_bucket());
    }

    #[test]
    fn test_section_from_error_flags_kind() {
        let section: Section<u8> = Err(AnalysisError::TaggerUnavailable("gone".into())).into();
        let failure = section.failure().unwrap();
        assert_eq!(failure.kind, ErrorKind::TaggerUnavailable);
        assert!(failure.message.contains("gone"));
        assert!(section.value().is_none());
    }

    #[test]
    fn test_section_serializes_with_status_tag() {
        let ok: Section<u8> = Section::Complete(7);
        assert_eq!(
            serde_json::to_string(&ok).unwrap(),
            r#"{"status":"complete","data":7}"#
        );
        let failed: Section<u8> = Err(AnalysisError::EmptyInput).into();
        let json = serde_json::to_string(&failed).unwrap();
        assert!(json.contains(r#""status":"failed""#));
        assert!(json.contains(r#""kind":"empty-input""#));
    }

    #[test]
    fn test_rule_display_matches_serde() {
        for rule in [Rule::ContentTooShort, Rule::LongSentences, Rule::KeywordStuffing] {
            let json = serde_json::to_string(&rule).unwrap();
            assert_eq!(json, format!("\"{}\"", rule));
        }
    }

    #[test]
    fn test_sentiment_label_display() {
        assert_eq!(SentimentLabel::VeryPositive.to_string(), "Very Positive");
        assert_eq!(SentimentLabel::Neutral.to_string(), "Neutral");
    }
}
