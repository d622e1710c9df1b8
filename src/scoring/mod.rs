//! Scoring: normalization, the four sub-scorers, composite aggregation and feedback.
//!
//! Every sub-score is mapped onto `[0, 5]` with [`normalize`] and rounded to two
//! decimals. The composite is a weighted sum of the rounded sub-scores, and the
//! verdict compares it with the policy's acceptance threshold.
//!
//! | Score | Raw signal | Range mapped |
//! |---|---|---|
//! | novelty | mean cosine vs accepted corpus (inverted) | `[0.2, 0.9]` |
//! | quality | grammar raw score / Flesch reading ease | `[50, 100]` / `[0, 60]` |
//! | relevance | cosine of keyword-set embeddings | `[0.2, 0.9]` |
//! | sentiment | review polarity | `[-1, 1]` |
//!
//! The scorers take their collaborators (embedder, sentiment analyzer) by
//! reference; grammar issue counts and readability arrive as [`QualityMeasurements`].

pub mod composite;
pub mod error;
pub mod feedback;
pub mod normalize;
pub mod novelty;
pub mod policy;
pub mod quality;
pub mod relevance;
pub mod sentiment;
pub mod types;

#[cfg(test)]
mod tests;

pub use composite::{aggregate, composite_score};
pub use error::ScoringError;
pub use feedback::{Dimension, Tier, synthesize_feedback};
pub use normalize::{normalize, round2};
pub use novelty::{novelty_from_similarity, novelty_prefix, score_novelty};
pub use policy::{ScoringPolicy, Weights};
pub use quality::{
    QualityMeasurements, errors_per_100_words, grammar_raw_score, quality_score, word_count,
};
pub use relevance::{relevance_from_similarity, score_relevance};
pub use sentiment::{score_sentiment, sentiment_from_polarity};
pub use types::{ScoreVector, Verdict, VerdictLabel};
