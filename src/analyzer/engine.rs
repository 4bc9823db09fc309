//! Analysis engine - fans a document out to the four analyzers and joins the results

use crate::config::{Config, RuleSeverity, TaggerSetting};
use crate::tagger::{PartOfSpeechTagger, RuleBasedTagger};
use crate::text::Document;
use crate::{AnalysisError, CombinedResult, ContentReport, Grade, Issue, Section};
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use super::{
    Analyzer, KeywordAnalyzer, LexicalAnalyzer, QualityChecker, ReadabilityScorer,
    SentimentScorer,
};

/// Main analysis engine. Holds no per-call state; every `analyze` is independent.
pub struct AnalysisEngine {
    /// Tagger handed to the lexical analyzer
    tagger: Option<Arc<dyn PartOfSpeechTagger>>,
}

impl AnalysisEngine {
    /// Create a new analysis engine with the built-in tagger
    pub fn new() -> Self {
        Self {
            tagger: Some(Arc::new(RuleBasedTagger::new())),
        }
    }

    /// Skip part-of-speech tagging
    pub fn without_tagger(mut self) -> Self {
        self.tagger = None;
        self
    }

    pub fn with_tagger(mut self, tagger: Arc<dyn PartOfSpeechTagger>) -> Self {
        self.tagger = Some(tagger);
        self
    }

    /// Analyze a text against keywords.
    ///
    /// Fails only with [`AnalysisError::EmptyInput`]. Any other analyzer failure is
    /// recorded in its own section while the other three still complete.
    pub fn analyze<S: AsRef<str>>(
        &self,
        text: &str,
        keywords: &[S],
    ) -> Result<CombinedResult, AnalysisError> {
        self.analyze_with_tagger(text, keywords, self.tagger.clone())
    }

    fn analyze_with_tagger<S: AsRef<str>>(
        &self,
        text: &str,
        keywords: &[S],
        tagger: Option<Arc<dyn PartOfSpeechTagger>>,
    ) -> Result<CombinedResult, AnalysisError> {
        let doc = Document::new(text)?;

        let keyword = KeywordAnalyzer::new().with_keywords(keywords);
        let sentiment = SentimentScorer::new();
        let lexical = match tagger {
            Some(t) => LexicalAnalyzer::new().with_tagger(t),
            None => LexicalAnalyzer::new(),
        };
        let readability = ReadabilityScorer::new();

        let ((keywords, sentiment), (linguistic, readability)) = rayon::join(
            || {
                rayon::join(
                    || run_section(&keyword, &doc),
                    || run_section(&sentiment, &doc),
                )
            },
            || {
                rayon::join(
                    || run_section(&lexical, &doc),
                    || run_section(&readability, &doc),
                )
            },
        );

        Ok(CombinedResult {
            word_count: doc.word_count(),
            sentence_count: doc.sentence_count(),
            keywords,
            sentiment,
            linguistic,
            readability,
        })
    }

    /// Analyze a document file and return the report
    pub fn analyze_file(&self, path: &Path, config: Option<&Config>) -> Result<ContentReport> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read document: {}", path.display()))?;
        self.analyze_source(&text, path, config)
    }

    /// Analyze in-memory text (e.g. stdin). `virtual_path` is used for config
    /// overrides and in the report.
    pub fn analyze_source(
        &self,
        text: &str,
        virtual_path: &Path,
        config: Option<&Config>,
    ) -> Result<ContentReport> {
        let effective = config.map(|c| c.effective_for_file(virtual_path));
        let keywords = effective
            .as_ref()
            .map(|e| e.keywords.clone())
            .unwrap_or_default();
        let tagger = match effective.as_ref().map(|e| e.tagger) {
            Some(TaggerSetting::Off) => None,
            _ => self.tagger.clone(),
        };

        let analysis = self
            .analyze_with_tagger(text, &keywords[..], tagger)
            .with_context(|| format!("Failed to analyze {}", virtual_path.display()))?;

        let failed = analysis.failed_sections();
        if !failed.is_empty() {
            log::warn!(
                "{}: partial result, failed sections: {}",
                virtual_path.display(),
                failed.join(", ")
            );
        }

        let summary = analysis.summary();
        let issues = QualityChecker::new().check(&analysis);
        let issues = self.apply_config_to_issues(issues, config, virtual_path);

        Ok(ContentReport {
            file_path: virtual_path.to_path_buf(),
            keywords,
            grade: Grade::from_score(summary.overall_score),
            summary,
            analysis,
            issues,
        })
    }

    /// Apply config to filter and adjust issue severity
    fn apply_config_to_issues(
        &self,
        issues: Vec<Issue>,
        config: Option<&Config>,
        path: &Path,
    ) -> Vec<Issue> {
        let Some(config) = config else {
            return issues;
        };

        // overrides already folded in
        let effective = config.effective_for_file(path);

        issues
            .into_iter()
            .filter_map(|mut issue| {
                match effective.rules.get(&issue.rule.to_string()) {
                    Some(RuleSeverity::Off) => return None,
                    Some(rs) => {
                        if let Some(sev) = rs.to_severity() {
                            issue.severity = sev;
                        }
                    }
                    None => {}
                }
                Some(issue)
            })
            .collect()
    }

    /// Analyze multiple documents sequentially
    pub fn analyze_many(&self, paths: &[&Path], config: Option<&Config>) -> Vec<Result<ContentReport>> {
        paths.iter().map(|p| self.analyze_file(p, config)).collect()
    }

    /// Analyze multiple documents in parallel using rayon
    pub fn analyze_parallel(
        &self,
        paths: &[PathBuf],
        config: Option<&Config>,
    ) -> Vec<Result<ContentReport>> {
        use rayon::prelude::*;

        paths.par_iter().map(|p| self.analyze_file(p, config)).collect()
    }

    /// Get aggregate stats from multiple reports
    pub fn aggregate_stats(reports: &[ContentReport]) -> AggregateStats {
        if reports.is_empty() {
            return AggregateStats::default();
        }

        let total_score: u32 = reports
            .iter()
            .map(|r| r.summary.overall_score as u32)
            .sum();
        let average_score = (total_score / reports.len() as u32) as u8;

        AggregateStats {
            documents_analyzed: reports.len(),
            average_score,
            average_grade: Grade::from_score(average_score),
            total_words: reports.iter().map(|r| r.analysis.word_count).sum(),
            total_issues: reports.iter().map(|r| r.issues.len()).sum(),
            partial_results: reports
                .iter()
                .filter(|r| !r.analysis.failed_sections().is_empty())
                .count(),
        }
    }
}

impl Default for AnalysisEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Run one analyzer and flag its failure instead of propagating it
fn run_section<A: Analyzer>(analyzer: &A, doc: &Document) -> Section<A::Output> {
    let started = Instant::now();
    let result = analyzer.analyze(doc);
    match result {
        Ok(_) => log::debug!("{} finished in {:?}", analyzer.name(), started.elapsed()),
        Err(ref e) => log::warn!("{} failed: {}", analyzer.name(), e),
    }
    result.into()
}

/// Aggregate statistics from multiple document analyses
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateStats {
    pub documents_analyzed: usize,
    /// Mean overall score across all documents
    pub average_score: u8,
    pub average_grade: Grade,
    pub total_words: usize,
    pub total_issues: usize,
    /// Documents where at least one section failed
    pub partial_results: usize,
}

impl Default for AggregateStats {
    fn default() -> Self {
        Self {
            documents_analyzed: 0,
            average_score: 0,
            average_grade: Grade::F,
            total_words: 0,
            total_issues: 0,
            partial_results: 0,
        }
    }
}
