use axum::{
    Json,
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

use super::{
    VERDICT_STATUS_DEPENDENCY_ERROR, VERDICT_STATUS_HEADER, VERDICT_STATUS_INTERNAL_ERROR,
    VERDICT_STATUS_INVALID_REQUEST, VERDICT_STATUS_TIMEOUT,
};
use crate::pipeline::PipelineError;

/// Message returned for dependency failures; details stay in the logs.
const DEPENDENCY_FAILURE_MESSAGE: &str = "evaluation failed: a scoring dependency is unavailable";

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("evaluation failed: {0}")]
    EvaluationFailed(#[from] PipelineError),

    #[error("upload handling failed: {0}")]
    UploadFailed(String),
}

#[derive(serde::Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let (status, error_message, verdict_status) = match &self {
            GatewayError::InvalidRequest(_) => (
                StatusCode::BAD_REQUEST,
                self.to_string(),
                VERDICT_STATUS_INVALID_REQUEST,
            ),
            GatewayError::EvaluationFailed(PipelineError::Timeout { .. }) => (
                StatusCode::GATEWAY_TIMEOUT,
                self.to_string(),
                VERDICT_STATUS_TIMEOUT,
            ),
            GatewayError::EvaluationFailed(e) => {
                error!(error = %e, "Evaluation dependency failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    DEPENDENCY_FAILURE_MESSAGE.to_string(),
                    VERDICT_STATUS_DEPENDENCY_ERROR,
                )
            }
            GatewayError::UploadFailed(_) => {
                error!(error = %self, "Upload handling failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    self.to_string(),
                    VERDICT_STATUS_INTERNAL_ERROR,
                )
            }
        };

        let mut headers = HeaderMap::new();
        headers.insert(
            VERDICT_STATUS_HEADER,
            HeaderValue::from_static(verdict_status),
        );

        let body = Json(ErrorResponse {
            error: error_message,
            code: status.as_u16(),
        });

        (status, headers, body).into_response()
    }
}
