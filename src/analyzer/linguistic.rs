//! Grammar, part-of-speech and vocabulary statistics

use super::Analyzer;
use crate::error::AnalysisError;
use crate::tagger::{PartOfSpeechTagger, PosTag, TaggedText};
use crate::text::{extract_terms, round_to, segment_sentences, Document};
use crate::{
    ClauseCounts, GrammarStats, LinguisticResult, SentenceTypeCounts, TaggerStatus,
    VerbTenseCounts, VocabularyStats,
};
use regex::Regex;
use std::collections::{BTreeMap, HashSet};
use std::sync::{Arc, OnceLock};

/// Terms longer than this many characters count as long words
pub const LONG_WORD_LEN: usize = 6;

struct GrammarPatterns {
    declarative: Regex,
    interrogative: Regex,
    exclamatory: Regex,
    imperative: Regex,
    compound: Regex,
    complex: Regex,
}

fn patterns() -> &'static GrammarPatterns {
    static PATTERNS: OnceLock<GrammarPatterns> = OnceLock::new();
    PATTERNS.get_or_init(|| GrammarPatterns {
        declarative: Regex::new(r"\.\s*$").expect("valid declarative pattern"),
        interrogative: Regex::new(r"\?\s*$").expect("valid interrogative pattern"),
        exclamatory: Regex::new(r"!\s*$").expect("valid exclamatory pattern"),
        imperative: Regex::new(r"^(Please |Let |Do |Don't)")
            .expect("valid imperative pattern"),
        compound: Regex::new(r"(?i)[,;]|\b(and|or|but|nor|for|so|yet)\b")
            .expect("valid compound clause pattern"),
        complex: Regex::new(r"(?i)\b(because|although|if|when|while|unless|after|before)\b")
            .expect("valid complex clause pattern"),
    })
}

/// Analyzer for grammar and vocabulary statistics.
///
/// Part-of-speech and verb-tense counts need a [`PartOfSpeechTagger`]. Without one
/// (or when it fails) the analyzer still reports sentence types, clauses and
/// vocabulary, computed from its own sentence segmentation and raw terms.
pub struct LexicalAnalyzer {
    tagger: Option<Arc<dyn PartOfSpeechTagger>>,
}

impl LexicalAnalyzer {
    /// Analyzer without a tagger (heuristic statistics only)
    pub fn new() -> Self {
        Self { tagger: None }
    }

    pub fn with_tagger(mut self, tagger: Arc<dyn PartOfSpeechTagger>) -> Self {
        self.tagger = Some(tagger);
        self
    }

    fn run_tagger(&self, text: &str) -> (Option<TaggedText>, TaggerStatus) {
        let Some(ref tagger) = self.tagger else {
            return (None, TaggerStatus::Disabled);
        };
        match tagger.tag_text(text) {
            Ok(tagged) => (
                Some(tagged),
                TaggerStatus::Used {
                    name: tagger.name().to_string(),
                },
            ),
            Err(e) => {
                log::warn!(
                    "tagger '{}' failed, falling back to heuristic grammar stats: {}",
                    tagger.name(),
                    e
                );
                (
                    None,
                    TaggerStatus::Unavailable {
                        reason: e.to_string(),
                    },
                )
            }
        }
    }

    /// Classify sentences by terminal punctuation and imperative openers
    pub fn sentence_types(sentences: &[String]) -> SentenceTypeCounts {
        let p = patterns();
        let count = |re: &Regex| sentences.iter().filter(|s| re.is_match(s)).count();
        SentenceTypeCounts {
            declarative: count(&p.declarative),
            interrogative: count(&p.interrogative),
            exclamatory: count(&p.exclamatory),
            imperative: count(&p.imperative),
        }
    }

    /// Clause buckets overlap: a sentence with both a comma and "because" is
    /// compound and complex at once.
    ///
    /// Conjunctions match as whole words in any case, and a comma or semicolon
    /// alone marks a sentence compound. A plain substring search would instead
    /// count "order", "word" or "life" as conjunctions, so these counts differ
    /// from substring-based tools on such sentences.
    pub fn clauses(sentences: &[String]) -> ClauseCounts {
        let p = patterns();
        sentences
            .iter()
            .fold(ClauseCounts::default(), |mut counts, sentence| {
                let compound = p.compound.is_match(sentence);
                let complex = p.complex.is_match(sentence);
                if compound {
                    counts.compound += 1;
                }
                if complex {
                    counts.complex += 1;
                }
                if !compound && !complex {
                    counts.simple += 1;
                }
                counts
            })
    }

    pub fn vocabulary(terms: &[String]) -> Result<VocabularyStats, AnalysisError> {
        if terms.is_empty() {
            return Err(AnalysisError::degenerate("lexical density", "term count"));
        }
        let total = terms.len();
        let unique: HashSet<String> = terms.iter().map(|t| t.to_lowercase()).collect();
        let letters: usize = terms.iter().map(|t| t.chars().count()).sum();

        Ok(VocabularyStats {
            total_words: total,
            unique_words: unique.len(),
            lexical_density: round_to(unique.len() as f64 / total as f64 * 100.0, 1),
            average_word_length: round_to(letters as f64 / total as f64, 1),
            long_word_count: terms
                .iter()
                .filter(|t| t.chars().count() > LONG_WORD_LEN)
                .count(),
        })
    }

    fn verb_tenses(tagged: &TaggedText) -> VerbTenseCounts {
        VerbTenseCounts {
            present: tagged.count_by_tag(PosTag::PresentTense),
            past: tagged.count_by_tag(PosTag::PastTense),
            future: tagged.count_by_tag(PosTag::FutureTense),
        }
    }

    fn parts_of_speech(tagged: &TaggedText) -> BTreeMap<PosTag, usize> {
        PosTag::WORD_CLASSES
            .iter()
            .map(|&tag| (tag, tagged.count_by_tag(tag)))
            .collect()
    }
}

impl Default for LexicalAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for LexicalAnalyzer {
    type Output = LinguisticResult;

    fn name(&self) -> &'static str {
        "linguistic"
    }

    fn analyze(&self, doc: &Document) -> Result<LinguisticResult, AnalysisError> {
        let (tagged, tagger) = self.run_tagger(doc.text());

        let (sentences, terms) = match tagged {
            Some(ref t) => (t.sentences.clone(), t.terms.clone()),
            None => (segment_sentences(doc.text()), extract_terms(doc.text())),
        };

        let grammar = GrammarStats {
            sentence_types: Self::sentence_types(&sentences),
            verb_tenses: tagged.as_ref().map(Self::verb_tenses),
            clauses: Self::clauses(&sentences),
        };

        Ok(LinguisticResult {
            grammar,
            parts_of_speech: tagged.as_ref().map(Self::parts_of_speech),
            vocabulary: Self::vocabulary(&terms)?,
            tagger,
        })
    }
}
