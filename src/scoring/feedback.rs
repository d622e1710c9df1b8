//! Qualitative feedback tiers.

use super::types::ScoreVector;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Positive,
    Neutral,
    Negative,
}

impl Tier {
    /// Severity marker prefixed to every message.
    pub fn marker(&self) -> &'static str {
        match self {
            Tier::Positive => "✅",
            Tier::Neutral => "ℹ️",
            Tier::Negative => "❌",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Novelty,
    Quality,
    Relevance,
    Sentiment,
}

impl Dimension {
    /// Feedback order.
    pub const ALL: [Dimension; 4] = [
        Dimension::Novelty,
        Dimension::Quality,
        Dimension::Relevance,
        Dimension::Sentiment,
    ];

    /// Lower bounds of the positive and neutral tiers.
    fn thresholds(&self) -> (f64, f64) {
        match self {
            Dimension::Novelty => (4.0, 3.0),
            Dimension::Quality => (4.0, 2.5),
            Dimension::Relevance => (3.5, 2.0),
            Dimension::Sentiment => (3.5, 2.0),
        }
    }

    pub fn tier(&self, score: f64) -> Tier {
        let (positive, neutral) = self.thresholds();
        if score >= positive {
            Tier::Positive
        } else if score >= neutral {
            Tier::Neutral
        } else {
            Tier::Negative
        }
    }

    fn text(&self, tier: Tier) -> &'static str {
        match (self, tier) {
            (Dimension::Novelty, Tier::Positive) => "High novelty and original contributions.",
            (Dimension::Novelty, Tier::Neutral) => "Moderate novelty, could improve.",
            (Dimension::Novelty, Tier::Negative) => "Lacks novelty.",
            (Dimension::Quality, Tier::Positive) => "Strong grammar and readability.",
            (Dimension::Quality, Tier::Neutral) => "Acceptable, needs polishing.",
            (Dimension::Quality, Tier::Negative) => "Poor readability.",
            (Dimension::Relevance, Tier::Positive) => "Highly relevant to the domain.",
            (Dimension::Relevance, Tier::Neutral) => "Moderately relevant.",
            (Dimension::Relevance, Tier::Negative) => "Low relevance.",
            (Dimension::Sentiment, Tier::Positive) => "Positive reviewer tone.",
            (Dimension::Sentiment, Tier::Neutral) => "Neutral tone.",
            (Dimension::Sentiment, Tier::Negative) => "Weak reviewer support.",
        }
    }

    /// Marker and message for `tier`.
    pub fn message(&self, tier: Tier) -> String {
        format!("{} {}", tier.marker(), self.text(tier))
    }

    fn score_of(&self, scores: &ScoreVector) -> f64 {
        match self {
            Dimension::Novelty => scores.novelty,
            Dimension::Quality => scores.quality,
            Dimension::Relevance => scores.relevance,
            Dimension::Sentiment => scores.sentiment,
        }
    }
}

/// One line per dimension, in novelty, quality, relevance, sentiment order.
pub fn synthesize_feedback(scores: &ScoreVector) -> Vec<String> {
    Dimension::ALL
        .iter()
        .map(|dimension| dimension.message(dimension.tier(dimension.score_of(scores))))
        .collect()
}
