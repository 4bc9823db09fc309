//! Part-of-speech tagging contract
//!
//! The lexical analyzer needs grammatical categories for its part-of-speech and
//! verb-tense counts. Anything implementing [`PartOfSpeechTagger`] can provide them;
//! the crate ships [`RuleBasedTagger`] and tests inject their own stubs.

mod rule_based;

pub use rule_based::RuleBasedTagger;

use crate::error::AnalysisError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Grammatical category attached to a term. A term may carry several
/// (a past-tense verb is both `Verb` and `PastTense`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PosTag {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Pronoun,
    Preposition,
    PresentTense,
    PastTense,
    FutureTense,
}

impl PosTag {
    /// Word-class tags, reported as the parts-of-speech distribution
    pub const WORD_CLASSES: [PosTag; 6] = [
        PosTag::Noun,
        PosTag::Verb,
        PosTag::Adjective,
        PosTag::Adverb,
        PosTag::Pronoun,
        PosTag::Preposition,
    ];
}

impl std::fmt::Display for PosTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PosTag::Noun => write!(f, "nouns"),
            PosTag::Verb => write!(f, "verbs"),
            PosTag::Adjective => write!(f, "adjectives"),
            PosTag::Adverb => write!(f, "adverbs"),
            PosTag::Pronoun => write!(f, "pronouns"),
            PosTag::Preposition => write!(f, "prepositions"),
            PosTag::PresentTense => write!(f, "present"),
            PosTag::PastTense => write!(f, "past"),
            PosTag::FutureTense => write!(f, "future"),
        }
    }
}

/// Output of a tagger run over a whole text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaggedText {
    /// Sentences as segmented by the tagger, terminal punctuation kept
    pub sentences: Vec<String>,
    /// Terms in document order, punctuation stripped, original casing
    pub terms: Vec<String>,
    counts: BTreeMap<PosTag, usize>,
}

impl TaggedText {
    pub fn new(sentences: Vec<String>, terms: Vec<String>) -> Self {
        Self {
            sentences,
            terms,
            counts: BTreeMap::new(),
        }
    }

    /// Record one occurrence of `tag`
    pub fn tag(&mut self, tag: PosTag) {
        *self.counts.entry(tag).or_insert(0) += 1;
    }

    /// Builder form of [`TaggedText::tag`] that sets an absolute count
    pub fn with_count(mut self, tag: PosTag, count: usize) -> Self {
        self.counts.insert(tag, count);
        self
    }

    pub fn count_by_tag(&self, tag: PosTag) -> usize {
        self.counts.get(&tag).copied().unwrap_or(0)
    }
}

/// Capability the lexical analyzer depends on. Implementations may be slow (model
/// loading, remote calls) and may fail; failures are reported as
/// [`AnalysisError::TaggerUnavailable`] and the analyzer falls back to heuristics.
pub trait PartOfSpeechTagger: Send + Sync {
    /// Name shown in reports
    fn name(&self) -> &str;

    fn tag_text(&self, text: &str) -> Result<TaggedText, AnalysisError>;
}
