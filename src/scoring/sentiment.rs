//! Sentiment: reviewer polarity mapped onto the score scale.

use super::normalize::round2;
use crate::analysis::{NeutralSentiment, SentimentAnalyzer};
use crate::constants::{SCORE_MAX, SCORE_MIN};

/// `(polarity + 1) * 2.5`, with polarity clamped to `[-1, 1]`.
pub fn sentiment_from_polarity(polarity: f64) -> f64 {
    let polarity = if polarity.is_nan() {
        0.0
    } else {
        polarity.clamp(-1.0, 1.0)
    };
    round2(((polarity + 1.0) * (SCORE_MAX / 2.0)).clamp(SCORE_MIN, SCORE_MAX))
}

/// Scores the review text, or neutral polarity when none is supplied.
pub fn score_sentiment(analyzer: &dyn SentimentAnalyzer, review: Option<&str>) -> f64 {
    let polarity = match review.map(str::trim) {
        Some(review) if !review.is_empty() => analyzer.polarity(review),
        _ => NeutralSentiment.polarity(""),
    };
    sentiment_from_polarity(polarity)
}
