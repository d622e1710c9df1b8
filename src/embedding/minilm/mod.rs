//! MiniLM sentence embedder (BERT safetensors + tokenizer).
//!
//! Use [`MiniLmConfig::stub`] for tests and demos without model files.

/// MiniLM configuration.
pub mod config;


pub use config::{MINILM_EMBEDDING_DIM, MINILM_MAX_SEQ_LEN, MiniLmConfig};

use std::hash::{DefaultHasher, Hash, Hasher};
use std::sync::Arc;

use candle_core::{Device, Tensor};
use parking_lot::Mutex;
use tracing::{debug, info, warn};

use crate::embedding::SentenceEmbedder;
use crate::embedding::bert::BertSentenceModel;
use crate::embedding::device::select_device;
use crate::embedding::error::EmbeddingError;
use crate::embedding::utils::load_tokenizer_with_truncation;

enum EmbedderBackend {
    Model {
        // Inference is serialized: one forward pass at a time per process.
        model: Arc<Mutex<BertSentenceModel>>,
        tokenizer: Arc<tokenizers::Tokenizer>,
        device: Device,
    },
    Stub,
}

/// Sentence embedder backed by all-MiniLM-L6-v2 (supports stub mode).
pub struct MiniLmEmbedder {
    backend: EmbedderBackend,
    config: MiniLmConfig,
}

impl std::fmt::Debug for MiniLmEmbedder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MiniLmEmbedder")
            .field(
                "backend",
                &match &self.backend {
                    EmbedderBackend::Model { device, .. } => format!("Model({:?})", device),
                    EmbedderBackend::Stub => "Stub".to_string(),
                },
            )
            .field("embedding_dim", &self.config.embedding_dim)
            .field("max_seq_len", &self.config.max_seq_len)
            .finish()
    }
}

impl MiniLmEmbedder {
    /// Loads the embedder from a config (stub mode is supported).
    pub fn load(config: MiniLmConfig) -> Result<Self, EmbeddingError> {
        config.validate()?;

        if config.testing_stub {
            warn!("MiniLM embedder running in STUB mode (scores are not semantic)");
            return Ok(Self {
                backend: EmbedderBackend::Stub,
                config,
            });
        }

        let device = select_device();
        debug!(?device, "Selected compute device for MiniLM");

        let tokenizer = load_tokenizer_with_truncation(&config.model_dir, config.max_seq_len)
            .map_err(|e| EmbeddingError::TokenizationFailed {
                reason: format!("Failed to load tokenizer: {}", e),
            })?;

        let model = BertSentenceModel::load(&config.model_dir, &device).map_err(|e| {
            EmbeddingError::ModelLoadFailed {
                reason: format!("Failed to load BERT model: {}", e),
            }
        })?;

        if model.hidden_size() != config.embedding_dim {
            return Err(EmbeddingError::DimensionMismatch {
                expected: config.embedding_dim,
                actual: model.hidden_size(),
            });
        }

        info!(
            model_dir = %config.model_dir.display(),
            embedding_dim = config.embedding_dim,
            max_seq_len = config.max_seq_len,
            "MiniLM model loaded successfully"
        );

        Ok(Self {
            backend: EmbedderBackend::Model {
                model: Arc::new(Mutex::new(model)),
                tokenizer: Arc::new(tokenizer),
                device,
            },
            config,
        })
    }

    /// Shorthand for `load(MiniLmConfig::stub())`.
    pub fn stub() -> Self {
        Self {
            backend: EmbedderBackend::Stub,
            config: MiniLmConfig::stub(),
        }
    }

    fn embed_with_model(
        &self,
        text: &str,
        model: &Mutex<BertSentenceModel>,
        tokenizer: &tokenizers::Tokenizer,
        device: &Device,
    ) -> Result<Vec<f32>, EmbeddingError> {
        let encoding =
            tokenizer
                .encode(text, true)
                .map_err(|e| EmbeddingError::TokenizationFailed {
                    reason: e.to_string(),
                })?;

        let tokens = encoding.get_ids();
        if tokens.is_empty() {
            return Ok(vec![0.0; self.config.embedding_dim]);
        }

        debug!(
            text_len = text.len(),
            token_count = tokens.len(),
            "Generating embedding (BERT forward pass)"
        );

        // Create input tensor: [1, seq_len]
        let input_ids = Tensor::new(tokens, device)?.unsqueeze(0)?;

        let pooled = model.lock().forward_mean_pooled(&input_ids).map_err(|e| {
            EmbeddingError::InferenceFailed {
                reason: format!("BERT forward pass failed: {}", e),
            }
        })?;

        let embedding = pooled.to_vec1::<f32>()?;
        Ok(l2_normalize(embedding))
    }

    /// Feature-hashed bag of words: texts sharing vocabulary get similar vectors.
    fn embed_stub(&self, text: &str) -> Vec<f32> {
        let dim = self.config.embedding_dim;
        let mut embedding = vec![0.0f32; dim];

        for token in text
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| !t.is_empty())
        {
            let mut hasher = DefaultHasher::new();
            token.to_lowercase().hash(&mut hasher);
            let hash = hasher.finish();

            let idx = (hash % dim as u64) as usize;
            let sign = if (hash >> 63) == 0 { 1.0 } else { -1.0 };
            embedding[idx] += sign;
        }

        l2_normalize(embedding)
    }

    /// Returns `true` if a model is loaded.
    pub fn has_model(&self) -> bool {
        matches!(self.backend, EmbedderBackend::Model { .. })
    }

    /// Returns the embedder configuration.
    pub fn config(&self) -> &MiniLmConfig {
        &self.config
    }
}

impl SentenceEmbedder for MiniLmEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        match &self.backend {
            EmbedderBackend::Model {
                model,
                tokenizer,
                device,
            } => self.embed_with_model(text, model, tokenizer, device),
            EmbedderBackend::Stub => Ok(self.embed_stub(text)),
        }
    }

    fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        debug!(batch_size = texts.len(), "Embedding batch");
        // Sequential: single inputs avoid padding and attention-mask pooling.
        texts.iter().map(|text| self.embed(text)).collect()
    }

    fn embedding_dim(&self) -> usize {
        self.config.embedding_dim
    }

    fn is_stub(&self) -> bool {
        matches!(self.backend, EmbedderBackend::Stub)
    }
}

fn l2_normalize(mut embedding: Vec<f32>) -> Vec<f32> {
    let norm: f32 = embedding.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm > 0.0 {
        for x in &mut embedding {
            *x /= norm;
        }
    }

    embedding
}
