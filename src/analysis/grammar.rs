//! Grammar checking.
//!
//! `LanguageToolChecker` talks to a LanguageTool server over HTTP.
//! `StubGrammarChecker` returns a fixed count and is used when no server is
//! configured, and in tests.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde::Deserialize;
use tracing::debug;

use super::error::GrammarError;

const CHECK_TIMEOUT: Duration = Duration::from_secs(60);
const DEFAULT_LANGUAGE: &str = "en-US";

#[async_trait]
/// Counts grammar and style issues in a text.
pub trait GrammarChecker: Send + Sync {
    /// Returns the number of flagged issues in `text`.
    async fn count_issues(&self, text: &str) -> Result<usize, GrammarError>;

    /// Short backend name for readiness reporting.
    fn backend_name(&self) -> &'static str;
}

/// LanguageTool HTTP client (`POST {base_url}/v2/check`).
#[derive(Debug, Clone)]
pub struct LanguageToolChecker {
    check_url: String,
    language: String,
    http: HttpClient,
}

#[derive(Debug, Deserialize)]
struct CheckResponse {
    matches: Vec<serde_json::Value>,
}

impl LanguageToolChecker {
    pub fn new(base_url: &str) -> Result<Self, GrammarError> {
        let base_url = base_url.trim().trim_end_matches('/');
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(GrammarError::InvalidUrl {
                url: base_url.to_string(),
            });
        }

        let http = HttpClient::builder().timeout(CHECK_TIMEOUT).build()?;

        Ok(Self {
            check_url: format!("{base_url}/v2/check"),
            language: DEFAULT_LANGUAGE.to_string(),
            http,
        })
    }

    /// Overrides the checked language (default `en-US`).
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn check_url(&self) -> &str {
        &self.check_url
    }
}

#[async_trait]
impl GrammarChecker for LanguageToolChecker {
    async fn count_issues(&self, text: &str) -> Result<usize, GrammarError> {
        let response = self
            .http
            .post(&self.check_url)
            .form(&[("text", text), ("language", self.language.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GrammarError::Status {
                status: status.as_u16(),
            });
        }

        let body: CheckResponse = response.json().await?;
        debug!(
            issues = body.matches.len(),
            text_len = text.len(),
            "LanguageTool check complete"
        );
        Ok(body.matches.len())
    }

    fn backend_name(&self) -> &'static str {
        "languagetool"
    }
}

/// Grammar checker returning a fixed issue count.
#[derive(Debug, Clone, Copy, Default)]
pub struct StubGrammarChecker {
    issues: usize,
}

impl StubGrammarChecker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_issues(issues: usize) -> Self {
        Self { issues }
    }
}

#[async_trait]
impl GrammarChecker for StubGrammarChecker {
    async fn count_issues(&self, _text: &str) -> Result<usize, GrammarError> {
        Ok(self.issues)
    }

    fn backend_name(&self) -> &'static str {
        "stub"
    }
}
