//! Cross-cutting, shared constants.
//!
//! Scoring policy defaults live here so the scorers, the config layer and the
//! tests agree on a single source. The policy values (weights, threshold) are
//! defaults only; see [`crate::config::Config`] for runtime overrides.

/// Upper bound of every sub-score and of the composite.
pub const SCORE_MAX: f64 = 5.0;

/// Lower bound of every sub-score and of the composite.
pub const SCORE_MIN: f64 = 0.0;

pub const DEFAULT_NOVELTY_WEIGHT: f64 = 0.30;
pub const DEFAULT_QUALITY_WEIGHT: f64 = 0.25;
pub const DEFAULT_RELEVANCE_WEIGHT: f64 = 0.25;
pub const DEFAULT_SENTIMENT_WEIGHT: f64 = 0.20;

/// Composite scores at or above this value are accepted.
pub const DEFAULT_ACCEPT_THRESHOLD: f64 = 3.0;

/// Tolerance used when checking that the weights sum to one.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Cosine similarity range mapped onto the score scale (novelty and relevance).
pub const SIMILARITY_LOW: f64 = 0.2;
pub const SIMILARITY_HIGH: f64 = 0.9;

/// Raw grammar score range (0-100 scale) mapped onto the score scale.
pub const GRAMMAR_LOW: f64 = 50.0;
pub const GRAMMAR_HIGH: f64 = 100.0;

/// Flesch reading-ease range mapped onto the score scale.
pub const READABILITY_LOW: f64 = 0.0;
pub const READABILITY_HIGH: f64 = 60.0;

/// Error density (per 100 words) that drives the raw grammar score to zero.
pub const GRAMMAR_ERROR_CEILING: f64 = 20.0;

/// Only this many leading characters of a submission are embedded for novelty.
pub const NOVELTY_PREFIX_CHARS: usize = 1000;

/// Number of keywords kept per keyword set.
pub const DEFAULT_TOP_KEYWORDS: usize = 20;

/// Score used when the accepted corpus is empty and no comparison is possible.
pub const NEUTRAL_FALLBACK_SCORE: f64 = 2.5;

/// Output dimension of all-MiniLM-L6-v2.
pub const DEFAULT_EMBEDDING_DIM: usize = 384;

/// Max tokens per input for all-MiniLM-L6-v2.
pub const DEFAULT_MAX_SEQ_LEN: usize = 256;

/// Feedback line returned when no text could be extracted.
pub const UNREADABLE_DOCUMENT_FEEDBACK: &str = "❌ Unable to extract text from the uploaded PDF. Please upload a machine-readable document.";
