use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use super::context::AppContext;
use super::error::PipelineError;
use crate::analysis::flesch_reading_ease;
use crate::constants::UNREADABLE_DOCUMENT_FEEDBACK;
use crate::extract::{ExtractError, extract_text};
use crate::scoring::{
    QualityMeasurements, ScoreVector, ScoringError, Verdict, VerdictLabel, aggregate,
    quality_score, score_novelty, score_relevance, score_sentiment, word_count,
};

/// Successful evaluation: the four scores plus the verdict.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    #[serde(flatten)]
    pub scores: ScoreVector,
    #[serde(flatten)]
    pub verdict: Verdict,
}

/// Rejection issued when no text could be extracted. Carries no scores.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnreadableDocument {
    pub verdict: VerdictLabel,
    pub feedback: Vec<String>,
}

impl Default for UnreadableDocument {
    fn default() -> Self {
        Self {
            verdict: VerdictLabel::Rejected,
            feedback: vec![UNREADABLE_DOCUMENT_FEEDBACK.to_string()],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Assessment {
    Scored(Evaluation),
    Unreadable(UnreadableDocument),
}

impl Assessment {
    pub fn label(&self) -> VerdictLabel {
        match self {
            Assessment::Scored(evaluation) => evaluation.verdict.label,
            Assessment::Unreadable(rejection) => rejection.verdict,
        }
    }
}

impl AppContext {
    /// Extracts the document at `path` and scores it, within the context timeout.
    #[instrument(skip(self, path, review), fields(path = %path.display()))]
    pub async fn evaluate_document(
        &self,
        path: PathBuf,
        review: Option<String>,
    ) -> Result<Assessment, PipelineError> {
        self.with_deadline(async {
            let extractor = Arc::clone(&self.collaborators.extractor);
            let extracted =
                tokio::task::spawn_blocking(move || extract_text(extractor.as_ref(), &path))
                    .await?;

            match extracted {
                Ok(text) => self.score_text(text, review).await.map(Assessment::Scored),
                Err(e) => {
                    log_unreadable(&e);
                    Ok(Assessment::Unreadable(UnreadableDocument::default()))
                }
            }
        })
        .await
    }

    /// Scores already-extracted text, within the context timeout.
    ///
    /// Whitespace-only text is reported as unreadable.
    pub async fn evaluate_text(
        &self,
        text: String,
        review: Option<String>,
    ) -> Result<Assessment, PipelineError> {
        if text.trim().is_empty() {
            log_unreadable(&ExtractError::Empty);
            return Ok(Assessment::Unreadable(UnreadableDocument::default()));
        }
        self.with_deadline(async {
            self.score_text(text, review).await.map(Assessment::Scored)
        })
        .await
    }

    async fn with_deadline<T>(
        &self,
        work: impl Future<Output = Result<T, PipelineError>>,
    ) -> Result<T, PipelineError> {
        match tokio::time::timeout(self.timeout, work).await {
            Ok(result) => result,
            Err(_) => {
                warn!(timeout = ?self.timeout, "Evaluation timed out");
                Err(PipelineError::Timeout {
                    timeout: self.timeout,
                })
            }
        }
    }

    /// Grammar checking runs concurrently with the embedding work, which
    /// runs on the blocking pool.
    async fn score_text(
        &self,
        text: String,
        review: Option<String>,
    ) -> Result<Evaluation, PipelineError> {
        let text: Arc<str> = Arc::from(text);
        debug!(chars = text.chars().count(), "Scoring submission");

        let grammar = Arc::clone(&self.collaborators.grammar);
        let grammar_text = Arc::clone(&text);
        let grammar_check = async move { grammar.count_issues(&grammar_text).await };

        let embedder = Arc::clone(&self.collaborators.embedder);
        let index = Arc::clone(&self.index);
        let keywords = self.keywords;
        let blocking_text = Arc::clone(&text);
        let blocking_work = tokio::task::spawn_blocking(move || {
            let novelty =
                score_novelty(embedder.as_ref(), &blocking_text, index.accepted_embeddings())?;
            let paper_keywords = keywords.extract(&[&*blocking_text]);
            let relevance =
                score_relevance(embedder.as_ref(), index.domain_embedding(), &paper_keywords)?;
            let readability = flesch_reading_ease(&blocking_text);
            Ok::<_, ScoringError>((novelty, relevance, readability))
        });

        let (grammar_issues, blocking) = tokio::join!(grammar_check, blocking_work);
        let grammar_issues = grammar_issues.map_err(ScoringError::from)?;
        let (novelty, relevance, readability) = blocking??;

        let measurements = QualityMeasurements {
            grammar_issues,
            word_count: word_count(&text),
            readability,
        };
        debug!(?measurements, "Quality measurements");
        let quality = quality_score(&measurements);

        let sentiment = score_sentiment(self.collaborators.sentiment.as_ref(), review.as_deref());

        let scores = ScoreVector::new(novelty, quality, relevance, sentiment);
        let verdict = aggregate(&scores, &self.policy);
        Ok(Evaluation { scores, verdict })
    }
}

fn log_unreadable(err: &ExtractError) {
    info!(error = %err, verdict = %VerdictLabel::Rejected, "Document has no readable text");
}
