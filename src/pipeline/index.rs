use tracing::{info, warn};

use super::error::PipelineError;
use crate::analysis::KeywordExtractor;
use crate::corpus::CorpusStore;
use crate::embedding::SentenceEmbedder;

/// Corpus-side work done once at startup: accepted embeddings and the
/// domain keyword fit.
#[derive(Debug, Clone, Default)]
pub struct CorpusIndex {
    accepted_embeddings: Vec<Vec<f32>>,
    domain_keywords: Vec<String>,
    domain_embedding: Option<Vec<f32>>,
    record_count: usize,
}

impl CorpusIndex {
    /// Embeds every accepted record and fits the domain keywords.
    ///
    /// Blocking; run it off the async runtime.
    pub fn build(
        store: &CorpusStore,
        embedder: &dyn SentenceEmbedder,
        keywords: &KeywordExtractor,
    ) -> Result<Self, PipelineError> {
        let texts = store.accepted_texts();
        let text_refs: Vec<&str> = texts.iter().map(String::as_str).collect();

        if text_refs.is_empty() {
            warn!(
                records = store.len(),
                "Corpus has no accepted records, novelty and relevance fall back to neutral"
            );
        }

        let accepted_embeddings = embedder.embed_batch(&text_refs)?;

        let domain_keywords = keywords.extract(&text_refs);
        let domain_embedding = if domain_keywords.is_empty() {
            None
        } else {
            Some(embedder.embed(&domain_keywords.join(" "))?)
        };

        info!(
            records = store.len(),
            accepted = accepted_embeddings.len(),
            domain_keywords = domain_keywords.len(),
            "Corpus index built"
        );

        Ok(Self {
            accepted_embeddings,
            domain_keywords,
            domain_embedding,
            record_count: store.len(),
        })
    }

    pub fn accepted_embeddings(&self) -> &[Vec<f32>] {
        &self.accepted_embeddings
    }

    pub fn accepted_count(&self) -> usize {
        self.accepted_embeddings.len()
    }

    pub fn domain_keywords(&self) -> &[String] {
        &self.domain_keywords
    }

    /// `None` when the accepted corpus produced no keywords.
    pub fn domain_embedding(&self) -> Option<&[f32]> {
        self.domain_embedding.as_deref()
    }

    pub fn record_count(&self) -> usize {
        self.record_count
    }
}
