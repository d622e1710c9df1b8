use serde::Serialize;

/// Per-dimension scores of one submission, each in `[0, 5]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreVector {
    pub novelty: f64,
    pub quality: f64,
    pub relevance: f64,
    pub sentiment: f64,
}

impl ScoreVector {
    pub fn new(novelty: f64, quality: f64, relevance: f64, sentiment: f64) -> Self {
        Self {
            novelty,
            quality,
            relevance,
            sentiment,
        }
    }

    /// Scores in feedback order: novelty, quality, relevance, sentiment.
    pub fn as_array(&self) -> [f64; 4] {
        [self.novelty, self.quality, self.relevance, self.sentiment]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
/// Binary outcome of the composite threshold.
pub enum VerdictLabel {
    /// Composite at or above the acceptance threshold.
    Accepted,
    /// Composite below the threshold, or no readable text.
    Rejected,
}

impl VerdictLabel {
    /// Returns `true` for [`VerdictLabel::Accepted`].
    pub fn is_accepted(&self) -> bool {
        matches!(self, VerdictLabel::Accepted)
    }

    /// Lowercase form used in the status header.
    pub fn as_status(&self) -> &'static str {
        match self {
            VerdictLabel::Accepted => "accepted",
            VerdictLabel::Rejected => "rejected",
        }
    }
}

impl std::fmt::Display for VerdictLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VerdictLabel::Accepted => write!(f, "ACCEPTED"),
            VerdictLabel::Rejected => write!(f, "REJECTED"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
/// Composite score, label and one feedback line per dimension.
pub struct Verdict {
    pub composite: f64,
    #[serde(rename = "verdict")]
    pub label: VerdictLabel,
    pub feedback: Vec<String>,
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        self.label.is_accepted()
    }
}
