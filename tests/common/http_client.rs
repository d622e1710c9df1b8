//! HTTP client helpers for tests.

use serde::Deserialize;
use std::time::Duration;

const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(DEFAULT_TIMEOUT_SECS);

pub struct TestClient {
    client: reqwest::Client,
    base_url: String,
}

/// Raw outcome of a `/predict` call.
#[derive(Debug)]
pub struct PredictOutcome {
    pub status: u16,
    pub status_header: String,
    pub body: serde_json::Value,
}

impl PredictOutcome {
    pub fn verdict(&self) -> Option<&str> {
        self.body.get("verdict").and_then(|v| v.as_str())
    }

    pub fn feedback(&self) -> Vec<String> {
        self.body
            .get("feedback")
            .and_then(|v| v.as_array())
            .map(|lines| {
                lines
                    .iter()
                    .filter_map(|l| l.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn score(&self, field: &str) -> Option<f64> {
        self.body.get(field).and_then(|v| v.as_f64())
    }
}

impl TestClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!("{}/{}", self.base_url, path)
    }

    /// Uploads `document` as the `pdf` field, plus an optional `review` field.
    pub async fn predict(
        &self,
        document: &[u8],
        review: Option<&str>,
    ) -> Result<PredictOutcome, TestClientError> {
        let part = reqwest::multipart::Part::bytes(document.to_vec())
            .file_name("paper.pdf")
            .mime_str("application/pdf")?;
        let mut form = reqwest::multipart::Form::new().part("pdf", part);
        if let Some(review) = review {
            form = form.text("review", review.to_string());
        }

        self.send_form(form).await
    }

    /// Posts an arbitrary form to `/predict`.
    pub async fn send_form(
        &self,
        form: reqwest::multipart::Form,
    ) -> Result<PredictOutcome, TestClientError> {
        let resp = self
            .client
            .post(self.url("/predict"))
            .multipart(form)
            .send()
            .await?;

        let status = resp.status().as_u16();
        let status_header = resp
            .headers()
            .get("x-verdict-status")
            .and_then(|h| h.to_str().ok())
            .unwrap_or("unknown")
            .to_string();
        let text = resp.text().await?;
        let body = serde_json::from_str(&text)
            .map_err(|_| TestClientError::UnexpectedStatus(status, text))?;

        Ok(PredictOutcome {
            status,
            status_header,
            body,
        })
    }

    pub async fn health(&self) -> Result<HealthResponse, TestClientError> {
        let resp = self.client.get(self.url("/healthz")).send().await?;

        if resp.status().is_success() {
            Ok(resp.json().await?)
        } else {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            Err(TestClientError::UnexpectedStatus(status, body))
        }
    }

    pub async fn ready(&self) -> Result<ReadyResponse, TestClientError> {
        let resp = self.client.get(self.url("/ready")).send().await?;

        if resp.status().is_success() {
            Ok(resp.json().await?)
        } else {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            Err(TestClientError::UnexpectedStatus(status, body))
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CorpusStatus {
    pub records: usize,
    pub accepted: usize,
    pub domain_keywords: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ComponentStatus {
    pub http: String,
    pub upload_dir: String,
    pub corpus: CorpusStatus,
    pub embedder_mode: String,
    pub grammar_mode: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReadyResponse {
    pub status: String,
    pub components: ComponentStatus,
}

impl ReadyResponse {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TestClientError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Unexpected HTTP status: {0} - Body: {1}")]
    UnexpectedStatus(u16, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_url_building() {
        let client = TestClient::new("http://localhost:8080");
        assert_eq!(client.url("/healthz"), "http://localhost:8080/healthz");
        assert_eq!(client.url("predict"), "http://localhost:8080/predict");
    }

    #[test]
    fn test_predict_outcome_accessors() {
        let outcome = PredictOutcome {
            status: 400,
            status_header: "rejected".to_string(),
            body: serde_json::json!({"verdict": "REJECTED", "feedback": ["❌ nope"]}),
        };
        assert_eq!(outcome.verdict(), Some("REJECTED"));
        assert_eq!(outcome.feedback(), vec!["❌ nope".to_string()]);
        assert_eq!(outcome.score("composite"), None);
    }
}
