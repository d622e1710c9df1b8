//! Quality: grammatical correctness averaged with readability.

use super::normalize::{normalize, round2};
use crate::constants::{
    GRAMMAR_ERROR_CEILING, GRAMMAR_HIGH, GRAMMAR_LOW, READABILITY_HIGH, READABILITY_LOW,
};

/// Raw measurements the quality score is derived from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QualityMeasurements {
    pub grammar_issues: usize,
    pub word_count: usize,
    /// Flesch reading ease.
    pub readability: f64,
}

/// Issues per hundred words; texts under a hundred words count as one hundred.
pub fn errors_per_100_words(grammar_issues: usize, word_count: usize) -> f64 {
    let hundreds = (word_count as f64 / 100.0).max(1.0);
    grammar_issues as f64 / hundreds
}

/// Raw grammar score on a 0-100 scale; `GRAMMAR_ERROR_CEILING` errors per
/// hundred words drive it to zero.
pub fn grammar_raw_score(grammar_issues: usize, word_count: usize) -> f64 {
    let density = errors_per_100_words(grammar_issues, word_count);
    (100.0 - (density / GRAMMAR_ERROR_CEILING) * 100.0).max(0.0)
}

/// Unweighted mean of the normalized grammar and readability scores.
pub fn quality_score(measurements: &QualityMeasurements) -> f64 {
    let grammar = normalize(
        grammar_raw_score(measurements.grammar_issues, measurements.word_count),
        GRAMMAR_LOW,
        GRAMMAR_HIGH,
    );
    let readability = normalize(measurements.readability, READABILITY_LOW, READABILITY_HIGH);
    round2((grammar + readability) / 2.0)
}

/// Whitespace-separated word count.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
