use thiserror::Error;

#[derive(Debug, Error)]
pub enum GrammarError {
    #[error("grammar service request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("grammar service returned HTTP {status}")]
    Status { status: u16 },

    #[error("invalid grammar service URL '{url}'")]
    InvalidUrl { url: String },
}
