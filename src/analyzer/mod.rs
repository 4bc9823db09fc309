//! Analyzer module - content quality analysis engine

pub mod engine;
pub mod keyword;
pub mod linguistic;
pub mod quality;
pub mod readability;
pub mod scoring;
pub mod sentiment;

pub use engine::AnalysisEngine;
pub use keyword::KeywordAnalyzer;
pub use linguistic::LexicalAnalyzer;
pub use quality::QualityChecker;
pub use readability::ReadabilityScorer;
pub use scoring::ScoreCalculator;
pub use sentiment::SentimentScorer;

use crate::error::AnalysisError;
use crate::text::Document;

/// Trait for the independent analyzers the engine fans out over
pub trait Analyzer: Send + Sync {
    type Output: Send;

    /// Name of the analyzer (used in logs)
    fn name(&self) -> &'static str;

    /// Analyze a tokenized document
    fn analyze(&self, doc: &Document) -> Result<Self::Output, AnalysisError>;
}
