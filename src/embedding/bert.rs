use candle::{DType, Device, Result, Tensor};
use candle_core as candle;
use candle_nn::VarBuilder;
use candle_transformers::models::bert::{BertModel, Config};
use std::path::Path;

/// BERT encoder producing mean-pooled sentence vectors.
pub struct BertSentenceModel {
    bert: BertModel,
    hidden_size: usize,
}

impl BertSentenceModel {
    /// Loads `config.json` and `model.safetensors` from `model_dir`.
    pub fn load<P: AsRef<Path>>(model_dir: P, device: &Device) -> Result<Self> {
        let model_dir = model_dir.as_ref();
        let config_path = model_dir.join("config.json");
        let weights_path = model_dir.join("model.safetensors");

        let config_content = std::fs::read_to_string(config_path)?;
        let config: Config = serde_json::from_str(&config_content)
            .map_err(|e| candle::Error::Msg(format!("Failed to parse config: {}", e)))?;

        let vb =
            unsafe { VarBuilder::from_mmaped_safetensors(&[weights_path], DType::F32, device)? };

        // sentence-transformers exports drop the "bert." prefix; HF checkpoints keep it.
        let bert = if vb.contains_tensor("bert.embeddings.word_embeddings.weight") {
            BertModel::load(vb.pp("bert"), &config)?
        } else {
            BertModel::load(vb, &config)?
        };

        Ok(Self {
            bert,
            hidden_size: config.hidden_size,
        })
    }

    pub fn hidden_size(&self) -> usize {
        self.hidden_size
    }

    /// Runs the encoder over `[1, seq_len]` token ids and averages the token states.
    ///
    /// Returns a `[hidden_size]` tensor.
    pub fn forward_mean_pooled(&self, input_ids: &Tensor) -> Result<Tensor> {
        let token_type_ids = input_ids.zeros_like()?;
        let attention_mask = input_ids.ones_like()?;

        // hidden_states shape: [1, seq_len, hidden_size]
        let hidden_states =
            self.bert
                .forward(input_ids, &token_type_ids, Some(&attention_mask))?;
        let (_, seq_len, _) = hidden_states.dims3()?;

        (hidden_states.sum(1)? / seq_len as f64)?.squeeze(0)
    }
}
