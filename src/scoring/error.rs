use thiserror::Error;

use crate::analysis::GrammarError;
use crate::embedding::EmbeddingError;

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("embedding error: {0}")]
    Embedding(#[from] EmbeddingError),

    #[error("grammar check error: {0}")]
    Grammar(#[from] GrammarError),

    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },
}
