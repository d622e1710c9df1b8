use std::path::PathBuf;

use crate::embedding::error::EmbeddingError;

/// Default MiniLM embedding dimension.
pub const MINILM_EMBEDDING_DIM: usize = crate::constants::DEFAULT_EMBEDDING_DIM;

/// Default MiniLM max sequence length.
pub const MINILM_MAX_SEQ_LEN: usize = crate::constants::DEFAULT_MAX_SEQ_LEN;

#[derive(Debug, Clone)]
/// Configuration for [`MiniLmEmbedder`](super::MiniLmEmbedder).
pub struct MiniLmConfig {
    /// Directory holding `config.json`, `model.safetensors` and `tokenizer.json`.
    pub model_dir: PathBuf,
    /// Max tokens to consider per input.
    pub max_seq_len: usize,
    /// Output embedding dimension.
    pub embedding_dim: usize,
    /// If true, run in deterministic stub mode (no model files required).
    pub testing_stub: bool,
}

impl Default for MiniLmConfig {
    fn default() -> Self {
        Self {
            model_dir: PathBuf::new(),
            max_seq_len: MINILM_MAX_SEQ_LEN,
            embedding_dim: MINILM_EMBEDDING_DIM,
            testing_stub: false,
        }
    }
}

impl MiniLmConfig {
    const REQUIRED_FILES: [&'static str; 3] = ["config.json", "model.safetensors", "tokenizer.json"];

    /// Creates a config for a model directory.
    pub fn new<P: Into<PathBuf>>(model_dir: P) -> Self {
        Self {
            model_dir: model_dir.into(),
            ..Default::default()
        }
    }

    /// Creates a stub config (no model files; produces deterministic embeddings).
    pub fn stub() -> Self {
        Self {
            testing_stub: true,
            ..Default::default()
        }
    }

    /// Validates required fields for non-stub mode.
    pub fn validate(&self) -> Result<(), EmbeddingError> {
        if self.embedding_dim == 0 {
            return Err(EmbeddingError::InvalidConfig {
                reason: "embedding_dim must be greater than zero".to_string(),
            });
        }

        if self.testing_stub {
            return Ok(());
        }

        if self.model_dir.as_os_str().is_empty() {
            return Err(EmbeddingError::InvalidConfig {
                reason: "model_dir is required (stubbing is disabled)".to_string(),
            });
        }

        if !self.model_dir.is_dir() {
            return Err(EmbeddingError::ModelNotFound {
                path: self.model_dir.clone(),
            });
        }

        for file in Self::REQUIRED_FILES {
            let path = self.model_dir.join(file);
            if !path.is_file() {
                return Err(EmbeddingError::ModelNotFound { path });
            }
        }

        Ok(())
    }

    /// Returns `true` if every required model file exists.
    pub fn model_available(&self) -> bool {
        !self.model_dir.as_os_str().is_empty()
            && Self::REQUIRED_FILES
                .iter()
                .all(|file| self.model_dir.join(file).is_file())
    }
}
