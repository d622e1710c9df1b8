//! Sentence embeddings.
//!
//! - [`SentenceEmbedder`] is the capability the scorers depend on.
//! - [`minilm`] implements it with a BERT-family sentence model (all-MiniLM-L6-v2),
//!   or a deterministic stub when no model files are configured.
//! - [`similarity`] holds the cosine primitives shared by novelty and relevance.

/// BERT encoder wrapper with mean pooling.
pub mod bert;
/// Device selection (CPU / Metal / CUDA).
pub mod device;
mod error;
/// MiniLM sentence embedder.
pub mod minilm;
/// Cosine similarity helpers.
pub mod similarity;
/// Tokenizer loading helpers.
pub mod utils;

pub use error::EmbeddingError;
pub use minilm::{MINILM_EMBEDDING_DIM, MINILM_MAX_SEQ_LEN, MiniLmConfig, MiniLmEmbedder};
pub use similarity::{cosine_similarity, mean_similarity};

/// Produces fixed-dimension vectors whose cosine similarity tracks semantic similarity.
pub trait SentenceEmbedder: Send + Sync {
    /// Embeds a single string.
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError>;

    /// Embeds a batch of strings, preserving order.
    fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        texts.iter().map(|text| self.embed(text)).collect()
    }

    /// Output dimension.
    fn embedding_dim(&self) -> usize;

    /// Returns `true` when no real model backs this embedder.
    fn is_stub(&self) -> bool {
        false
    }
}
