//! Relevance: similarity between the paper's keywords and the domain keywords.

use tracing::{debug, warn};

use super::error::ScoringError;
use super::normalize::{normalize, round2};
use crate::constants::{NEUTRAL_FALLBACK_SCORE, SCORE_MIN, SIMILARITY_HIGH, SIMILARITY_LOW};
use crate::embedding::{SentenceEmbedder, cosine_similarity};

pub fn relevance_from_similarity(similarity: f64) -> f64 {
    round2(normalize(similarity, SIMILARITY_LOW, SIMILARITY_HIGH))
}

/// Embeds the joined paper keywords and compares them with the domain embedding.
///
/// `domain_embedding` is `None` when the accepted corpus yields no keywords;
/// the neutral fallback applies. A paper without keywords scores zero.
pub fn score_relevance(
    embedder: &dyn SentenceEmbedder,
    domain_embedding: Option<&[f32]>,
    paper_keywords: &[String],
) -> Result<f64, ScoringError> {
    let Some(domain_embedding) = domain_embedding else {
        warn!("No domain keywords available, using neutral relevance score");
        return Ok(NEUTRAL_FALLBACK_SCORE);
    };

    if paper_keywords.is_empty() {
        debug!("Submission has no keywords");
        return Ok(SCORE_MIN);
    }

    let paper_embedding = embedder.embed(&paper_keywords.join(" "))?;
    let similarity = cosine_similarity(domain_embedding, &paper_embedding) as f64;

    let score = relevance_from_similarity(similarity);
    debug!(
        similarity,
        keywords = paper_keywords.len(),
        score,
        "Relevance scored"
    );
    Ok(score)
}
