use std::time::Duration;

use thiserror::Error;

use crate::embedding::EmbeddingError;
use crate::scoring::ScoringError;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("scoring failed: {0}")]
    Scoring(#[from] ScoringError),

    #[error("corpus index build failed: {0}")]
    Index(#[from] EmbeddingError),

    #[error("evaluation timed out after {timeout:?}")]
    Timeout { timeout: Duration },

    #[error("evaluation worker failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}
