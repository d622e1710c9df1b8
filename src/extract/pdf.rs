use std::path::Path;

use lopdf::Document;
use tracing::{debug, warn};

use super::TextExtractor;
use super::error::ExtractError;

/// PDF text extraction backed by `lopdf`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfTextExtractor;

impl PdfTextExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extracts per-page text from an in-memory PDF.
    pub fn extract_pages_from_bytes(&self, bytes: &[u8]) -> Result<Vec<String>, ExtractError> {
        let document = Document::load_mem(bytes)?;
        Ok(Self::pages_of(&document))
    }

    fn pages_of(document: &Document) -> Vec<String> {
        let pages = document.get_pages();
        debug!(page_count = pages.len(), "Parsing PDF pages");

        pages
            .keys()
            .map(|&page_number| match document.extract_text(&[page_number]) {
                Ok(text) => text,
                Err(e) => {
                    // Undecodable pages contribute empty text.
                    warn!(page = page_number, error = %e, "Failed to extract page text");
                    String::new()
                }
            })
            .collect()
    }
}

impl TextExtractor for PdfTextExtractor {
    fn extract_pages(&self, path: &Path) -> Result<Vec<String>, ExtractError> {
        let document = Document::load(path)?;
        Ok(Self::pages_of(&document))
    }
}
