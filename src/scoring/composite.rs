use tracing::info;

use super::feedback::synthesize_feedback;
use super::normalize::round2;
use super::policy::{ScoringPolicy, Weights};
use super::types::{ScoreVector, Verdict, VerdictLabel};

/// Weighted sum of the four scores, rounded to two decimals.
pub fn composite_score(scores: &ScoreVector, weights: &Weights) -> f64 {
    round2(
        weights.novelty * scores.novelty
            + weights.quality * scores.quality
            + weights.relevance * scores.relevance
            + weights.sentiment * scores.sentiment,
    )
}

/// Builds the verdict: composite, label and feedback.
///
/// A composite equal to the threshold is accepted.
pub fn aggregate(scores: &ScoreVector, policy: &ScoringPolicy) -> Verdict {
    let composite = composite_score(scores, &policy.weights);
    let label = if composite >= policy.accept_threshold {
        VerdictLabel::Accepted
    } else {
        VerdictLabel::Rejected
    };

    info!(
        novelty = scores.novelty,
        quality = scores.quality,
        relevance = scores.relevance,
        sentiment = scores.sentiment,
        composite,
        verdict = %label,
        "Submission scored"
    );

    Verdict {
        composite,
        label,
        feedback: synthesize_feedback(scores),
    }
}
