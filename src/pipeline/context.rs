use std::sync::Arc;
use std::time::Duration;

use super::error::PipelineError;
use super::index::CorpusIndex;
use crate::analysis::{GrammarChecker, KeywordExtractor, SentimentAnalyzer};
use crate::corpus::CorpusStore;
use crate::embedding::SentenceEmbedder;
use crate::extract::TextExtractor;
use crate::scoring::ScoringPolicy;

/// External services the pipeline calls.
#[derive(Clone)]
pub struct Collaborators {
    pub extractor: Arc<dyn TextExtractor>,
    pub embedder: Arc<dyn SentenceEmbedder>,
    pub grammar: Arc<dyn GrammarChecker>,
    pub sentiment: Arc<dyn SentimentAnalyzer>,
}

impl Collaborators {
    /// Plain-text extractor, stub embedder, stub grammar checker, lexicon sentiment.
    #[cfg(any(test, feature = "mock"))]
    pub fn mock() -> Self {
        use crate::analysis::{LexiconSentiment, StubGrammarChecker};
        use crate::embedding::MiniLmEmbedder;
        use crate::extract::MockTextExtractor;

        Self {
            extractor: Arc::new(MockTextExtractor::new()),
            embedder: Arc::new(MiniLmEmbedder::stub()),
            grammar: Arc::new(StubGrammarChecker::new()),
            sentiment: Arc::new(LexiconSentiment::new()),
        }
    }
}

/// Process-wide, read-only state shared by every request.
///
/// Built once at startup; the corpus index is computed here so requests only
/// do submission-side work.
pub struct AppContext {
    pub(crate) collaborators: Collaborators,
    pub(crate) index: Arc<CorpusIndex>,
    pub(crate) keywords: KeywordExtractor,
    pub(crate) policy: ScoringPolicy,
    pub(crate) timeout: Duration,
}

impl AppContext {
    /// Builds the context and its corpus index. Blocking.
    pub fn new(
        collaborators: Collaborators,
        store: &CorpusStore,
        policy: ScoringPolicy,
        timeout: Duration,
    ) -> Result<Self, PipelineError> {
        let keywords = KeywordExtractor::default();
        let index = CorpusIndex::build(store, collaborators.embedder.as_ref(), &keywords)?;

        Ok(Self {
            collaborators,
            index: Arc::new(index),
            keywords,
            policy,
            timeout,
        })
    }

    pub fn index(&self) -> &CorpusIndex {
        &self.index
    }

    pub fn policy(&self) -> &ScoringPolicy {
        &self.policy
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Overrides the evaluation timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn embedder_mode(&self) -> &'static str {
        if self.collaborators.embedder.is_stub() {
            "stub"
        } else {
            "real"
        }
    }

    pub fn grammar_mode(&self) -> &'static str {
        self.collaborators.grammar.backend_name()
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("records", &self.index.record_count())
            .field("accepted", &self.index.accepted_count())
            .field("embedder_mode", &self.embedder_mode())
            .field("grammar_mode", &self.grammar_mode())
            .field("policy", &self.policy)
            .field("timeout", &self.timeout)
            .finish()
    }
}
