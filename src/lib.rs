//! Verdict library crate (used by the server and integration tests).
//!
//! Scores a submitted research paper on four dimensions and issues an
//! accept/reject verdict with feedback.
//!
//! # Public API Surface
//!
//! ## Core Types
//! - [`Config`], [`ConfigError`] - Server configuration
//! - [`AppContext`], [`Collaborators`] - Process-wide evaluation state
//! - [`Assessment`], [`Evaluation`], [`UnreadableDocument`] - Evaluation outcomes
//! - [`ScoreVector`], [`Verdict`], [`VerdictLabel`], [`ScoringPolicy`] - Scores and policy
//!
//! ## Collaborators
//! - [`TextExtractor`], [`PdfTextExtractor`] - Document text extraction
//! - [`SentenceEmbedder`], [`MiniLmEmbedder`], [`MiniLmConfig`] - Sentence embeddings
//! - [`GrammarChecker`], [`LanguageToolChecker`], [`StubGrammarChecker`] - Grammar issues
//! - [`SentimentAnalyzer`], [`LexiconSentiment`] - Review polarity
//! - [`KeywordExtractor`], [`flesch_reading_ease`] - Text metrics
//!
//! ## Corpus
//! - [`CorpusStore`], [`CorpusRecord`] - Labelled reference documents
//!
//! ## Test/Mock Support
//! Mock implementations are available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod analysis;
pub mod config;
pub mod constants;
pub mod corpus;
pub mod embedding;
pub mod extract;
pub mod gateway;
pub mod pipeline;
pub mod scoring;

pub use analysis::{
    GrammarChecker, GrammarError, KeywordExtractor, LanguageToolChecker, LexiconSentiment,
    NeutralSentiment, SentimentAnalyzer, StubGrammarChecker, flesch_reading_ease,
};
pub use config::{Config, ConfigError};
pub use corpus::{CorpusError, CorpusRecord, CorpusStore};
pub use embedding::{
    EmbeddingError, MiniLmConfig, MiniLmEmbedder, SentenceEmbedder, cosine_similarity,
};
#[cfg(any(test, feature = "mock"))]
pub use extract::MockTextExtractor;
pub use extract::{ExtractError, PdfTextExtractor, TextExtractor, extract_text};
pub use gateway::{HandlerState, create_router_with_state};
pub use pipeline::{
    AppContext, Assessment, Collaborators, CorpusIndex, Evaluation, PipelineError,
    UnreadableDocument,
};
pub use scoring::{
    ScoreVector, ScoringError, ScoringPolicy, Verdict, VerdictLabel, Weights, normalize,
};
