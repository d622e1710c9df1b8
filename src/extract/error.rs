use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("document could not be read: {reason}")]
    Unreadable { reason: String },

    #[error("document contains no extractable text")]
    Empty,
}

impl From<lopdf::Error> for ExtractError {
    fn from(err: lopdf::Error) -> Self {
        ExtractError::Unreadable {
            reason: err.to_string(),
        }
    }
}

impl From<std::io::Error> for ExtractError {
    fn from(err: std::io::Error) -> Self {
        ExtractError::Unreadable {
            reason: err.to_string(),
        }
    }
}
