use crate::constants::{
    DEFAULT_ACCEPT_THRESHOLD, DEFAULT_NOVELTY_WEIGHT, DEFAULT_QUALITY_WEIGHT,
    DEFAULT_RELEVANCE_WEIGHT, DEFAULT_SENTIMENT_WEIGHT, SCORE_MAX, SCORE_MIN,
    WEIGHT_SUM_TOLERANCE,
};

/// Composite weights. Must each lie in `[0, 1]` and sum to one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    pub novelty: f64,
    pub quality: f64,
    pub relevance: f64,
    pub sentiment: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            novelty: DEFAULT_NOVELTY_WEIGHT,
            quality: DEFAULT_QUALITY_WEIGHT,
            relevance: DEFAULT_RELEVANCE_WEIGHT,
            sentiment: DEFAULT_SENTIMENT_WEIGHT,
        }
    }
}

impl Weights {
    pub fn sum(&self) -> f64 {
        self.novelty + self.quality + self.relevance + self.sentiment
    }

    fn named(&self) -> [(&'static str, f64); 4] {
        [
            ("novelty", self.novelty),
            ("quality", self.quality),
            ("relevance", self.relevance),
            ("sentiment", self.sentiment),
        ]
    }
}

/// Weights plus the acceptance threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringPolicy {
    pub weights: Weights,
    pub accept_threshold: f64,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            weights: Weights::default(),
            accept_threshold: DEFAULT_ACCEPT_THRESHOLD,
        }
    }
}

impl ScoringPolicy {
    /// Checks weight ranges, the weight sum and the threshold range.
    pub fn validate(&self) -> Result<(), String> {
        for (name, weight) in self.weights.named() {
            if !(0.0..=1.0).contains(&weight) {
                return Err(format!("{name} weight {weight} must be within [0, 1]"));
            }
        }

        let sum = self.weights.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(format!("weights must sum to 1.0, got sum {sum}"));
        }

        if !(SCORE_MIN..=SCORE_MAX).contains(&self.accept_threshold) {
            return Err(format!(
                "accept threshold {} must be within [{SCORE_MIN}, {SCORE_MAX}]",
                self.accept_threshold
            ));
        }

        Ok(())
    }
}
