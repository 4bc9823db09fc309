//! Text handling shared by all analyzers

pub mod tokenizer;

pub use tokenizer::{
    count_syllables, extract_terms, segment_sentences, split_sentences, tokenize_words, Document,
};

/// Round to a fixed number of decimal places (half away from zero at the last place)
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

/// Round to the nearest integer, halves toward positive infinity (-20.5 -> -20, 20.5 -> 21)
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}
