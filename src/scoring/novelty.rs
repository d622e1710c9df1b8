//! Novelty: distance of a submission from the accepted corpus.

use tracing::{debug, warn};

use super::error::ScoringError;
use super::normalize::{normalize, round2};
use crate::constants::{
    NEUTRAL_FALLBACK_SCORE, NOVELTY_PREFIX_CHARS, SCORE_MAX, SIMILARITY_HIGH, SIMILARITY_LOW,
};
use crate::embedding::{SentenceEmbedder, mean_similarity};

/// Inverts normalized mean similarity: `5 - normalize(sim, 0.2, 0.9)`.
pub fn novelty_from_similarity(mean_similarity: f64) -> f64 {
    round2(SCORE_MAX - normalize(mean_similarity, SIMILARITY_LOW, SIMILARITY_HIGH))
}

/// The leading `NOVELTY_PREFIX_CHARS` characters of `text`.
pub fn novelty_prefix(text: &str) -> &str {
    match text.char_indices().nth(NOVELTY_PREFIX_CHARS) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}

/// Scores the prefix of `text` against precomputed accepted-corpus embeddings.
///
/// With no accepted embeddings the neutral fallback score is returned.
pub fn score_novelty(
    embedder: &dyn SentenceEmbedder,
    text: &str,
    accepted_embeddings: &[Vec<f32>],
) -> Result<f64, ScoringError> {
    if accepted_embeddings.is_empty() {
        warn!("Accepted corpus is empty, using neutral novelty score");
        return Ok(NEUTRAL_FALLBACK_SCORE);
    }

    let query = embedder.embed(novelty_prefix(text))?;
    let Some(similarity) = mean_similarity(&query, accepted_embeddings) else {
        return Ok(NEUTRAL_FALLBACK_SCORE);
    };

    let score = novelty_from_similarity(similarity);
    debug!(
        mean_similarity = similarity,
        compared = accepted_embeddings.len(),
        score,
        "Novelty scored"
    );
    Ok(score)
}
