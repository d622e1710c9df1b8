//! Document-to-text extraction.
//!
//! [`TextExtractor`] turns an uploaded document into ordered per-page text.
//! [`extract_text`] joins the pages and rejects documents with no readable text,
//! which is the only early exit of the evaluation pipeline.

mod error;
mod pdf;

#[cfg(any(test, feature = "mock"))]
mod mock;


pub use error::ExtractError;
pub use pdf::PdfTextExtractor;

#[cfg(any(test, feature = "mock"))]
pub use mock::MockTextExtractor;

use std::path::Path;

use tracing::debug;

/// Extraction capability over a document stored on disk.
pub trait TextExtractor: Send + Sync {
    /// Returns the text of each page, in page order.
    fn extract_pages(&self, path: &Path) -> Result<Vec<String>, ExtractError>;
}

/// Extracts the full document text, pages joined with single spaces.
///
/// Returns [`ExtractError::Empty`] when the result is empty or whitespace-only.
pub fn extract_text(extractor: &dyn TextExtractor, path: &Path) -> Result<String, ExtractError> {
    let pages = extractor.extract_pages(path)?;
    let page_count = pages.len();
    let text = pages.join(" ");

    if text.trim().is_empty() {
        debug!(page_count, "Document contains no extractable text");
        return Err(ExtractError::Empty);
    }

    debug!(page_count, text_len = text.len(), "Extracted document text");
    Ok(text)
}
