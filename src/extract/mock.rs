use std::path::Path;

use super::TextExtractor;
use super::error::ExtractError;

/// Extractor that reads the file as UTF-8 and splits pages on form feeds.
///
/// Lets tests and demos upload plain text instead of building PDFs.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockTextExtractor;

impl MockTextExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl TextExtractor for MockTextExtractor {
    fn extract_pages(&self, path: &Path) -> Result<Vec<String>, ExtractError> {
        let bytes = std::fs::read(path)?;
        let text = String::from_utf8(bytes).map_err(|e| ExtractError::Unreadable {
            reason: e.to_string(),
        })?;
        Ok(text.split('\u{c}').map(str::to_string).collect())
    }
}
