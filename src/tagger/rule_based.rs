//! Built-in heuristic tagger: closed-class word lists plus suffix rules

use super::{PartOfSpeechTagger, PosTag, TaggedText};
use crate::error::AnalysisError;
use crate::text::{extract_terms, segment_sentences};

const PRONOUNS: &[&str] = &[
    "i", "me", "my", "mine", "you", "your", "yours", "he", "him", "his", "she", "her", "hers",
    "it", "its", "we", "us", "our", "ours", "they", "them", "their", "theirs", "myself",
    "yourself", "himself", "herself", "itself", "ourselves", "themselves", "who", "whom",
];

const SUBJECT_PRONOUNS: &[&str] = &["i", "you", "we", "they", "he", "she", "it"];

const PREPOSITIONS: &[&str] = &[
    "about", "above", "across", "after", "against", "along", "among", "around", "at", "before",
    "behind", "below", "beneath", "beside", "between", "beyond", "by", "during", "except",
    "for", "from", "in", "inside", "into", "near", "of", "off", "on", "onto", "outside", "over",
    "since", "through", "throughout", "to", "toward", "towards", "under", "until", "upon",
    "with", "within", "without",
];

const FUNCTION_WORDS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "each", "every", "some", "any", "no",
    "not", "another", "and", "or", "but", "nor", "so", "yet", "if", "because", "although",
    "when", "while", "unless", "than", "then", "as", "what", "which", "where", "why", "how",
    "please", "let",
];

const PRESENT_VERBS: &[&str] = &["is", "are", "am", "has", "have", "do", "does", "can", "must"];

const PAST_VERBS: &[&str] = &[
    "was", "were", "had", "did", "went", "said", "made", "came", "took", "saw", "ran", "sat",
    "got", "knew", "thought", "told", "found", "gave", "became", "left", "felt", "brought",
    "began", "kept", "held", "wrote", "stood", "heard", "meant", "met", "paid", "sent", "built",
    "could", "would", "should",
];

const ADVERBS: &[&str] = &[
    "very", "really", "quite", "often", "never", "always", "too", "also", "just", "still",
    "soon", "now", "here", "there", "almost", "already", "extremely", "absolutely", "well",
];

const ADJECTIVES: &[&str] = &[
    "good", "great", "bad", "new", "old", "big", "small", "long", "short", "high", "low",
    "large", "little", "young", "important", "different", "easy", "hard", "clear", "happy",
    "sad", "poor", "awesome", "excellent", "wonderful", "fantastic", "terrible", "awful",
    "horrible", "disappointing", "best", "worst", "fast", "slow", "simple", "full",
];

const ADJECTIVE_SUFFIXES: &[&str] = &["ful", "ous", "ive", "able", "ible", "less", "ish"];

/// Deterministic tagger that needs no model files
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedTagger;

impl RuleBasedTagger {
    pub fn new() -> Self {
        Self
    }

    /// Tags for a single lower-cased term given the previous term
    fn classify(term: &str, prev: Option<&str>) -> Vec<PosTag> {
        if PRONOUNS.contains(&term) {
            return vec![PosTag::Pronoun];
        }
        if PREPOSITIONS.contains(&term) {
            return vec![PosTag::Preposition];
        }
        if FUNCTION_WORDS.contains(&term) {
            return vec![];
        }
        if term == "will" || term == "shall" || term == "won't" || term.ends_with("'ll") {
            return vec![PosTag::FutureTense];
        }
        if matches!(prev, Some("will") | Some("shall") | Some("won't")) {
            return vec![PosTag::Verb];
        }
        if PAST_VERBS.contains(&term) || (term.len() > 3 && term.ends_with("ed")) {
            return vec![PosTag::Verb, PosTag::PastTense];
        }
        if PRESENT_VERBS.contains(&term) {
            return vec![PosTag::Verb, PosTag::PresentTense];
        }
        if ADVERBS.contains(&term) || (term.len() > 4 && term.ends_with("ly")) {
            return vec![PosTag::Adverb];
        }
        if ADJECTIVES.contains(&term)
            || (term.len() > 4 && ADJECTIVE_SUFFIXES.iter().any(|s| term.ends_with(s)))
        {
            return vec![PosTag::Adjective];
        }
        if prev.is_some_and(|p| SUBJECT_PRONOUNS.contains(&p)) {
            return vec![PosTag::Verb, PosTag::PresentTense];
        }
        if term.len() > 4 && term.ends_with("ing") {
            return vec![PosTag::Verb];
        }
        if term.chars().all(|c| c.is_alphabetic() || c == '\'' || c == '-') {
            return vec![PosTag::Noun];
        }
        vec![]
    }
}

impl PartOfSpeechTagger for RuleBasedTagger {
    fn name(&self) -> &str {
        "rule-based"
    }

    fn tag_text(&self, text: &str) -> Result<TaggedText, AnalysisError> {
        let sentences = segment_sentences(text);
        let mut tagged = TaggedText::new(sentences.clone(), Vec::new());

        for sentence in &sentences {
            let mut prev: Option<String> = None;
            for term in extract_terms(sentence) {
                let lower = term.to_lowercase();
                for tag in Self::classify(&lower, prev.as_deref()) {
                    tagged.tag(tag);
                }
                tagged.terms.push(term);
                prev = Some(lower);
            }
        }

        Ok(tagged)
    }
}
