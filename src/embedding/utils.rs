use std::io;
use std::path::Path;
use tokenizers::{Tokenizer, TruncationParams};

/// Loads `tokenizer.json` from a model directory (or an explicit file path).
pub fn load_tokenizer(model_path: &Path) -> io::Result<Tokenizer> {
    let tokenizer_path = if model_path.is_dir() {
        model_path.join("tokenizer.json")
    } else {
        model_path.to_path_buf()
    };

    Tokenizer::from_file(&tokenizer_path).map_err(io::Error::other)
}

/// Loads a tokenizer that truncates inputs to `max_len` tokens and never pads.
pub fn load_tokenizer_with_truncation(model_path: &Path, max_len: usize) -> io::Result<Tokenizer> {
    let mut tokenizer = load_tokenizer(model_path)?;

    let truncation = TruncationParams {
        max_length: max_len,
        ..Default::default()
    };

    tokenizer
        .with_truncation(Some(truncation))
        .map_err(|e| io::Error::other(format!("Failed to configure truncation: {}", e)))?;
    tokenizer.with_padding(None);

    Ok(tokenizer)
}
