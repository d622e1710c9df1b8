use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("failed to open corpus at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("corpus CSV is missing required column '{name}'")]
    MissingColumn { name: &'static str },

    #[error("failed to parse corpus CSV: {0}")]
    Csv(#[from] csv::Error),
}
