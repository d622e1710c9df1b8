use std::io::Write;
use std::path::{Path, PathBuf};

use axum::{
    Json,
    body::Bytes,
    extract::{Multipart, State},
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use tempfile::NamedTempFile;
use tracing::{debug, info, instrument};

use super::VERDICT_STATUS_HEADER;
use crate::gateway::error::GatewayError;
use crate::gateway::state::HandlerState;
use crate::pipeline::Assessment;

/// Multipart field carrying the document.
pub const DOCUMENT_FIELD: &str = "pdf";

/// Optional multipart field carrying reviewer commentary.
pub const REVIEW_FIELD: &str = "review";

#[instrument(skip(state, multipart), fields(request_id = %uuid::Uuid::new_v4()))]
pub async fn predict_handler(
    State(state): State<HandlerState>,
    mut multipart: Multipart,
) -> Result<Response, GatewayError> {
    let mut upload: Option<NamedTempFile> = None;
    let mut review: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| GatewayError::InvalidRequest(format!("malformed multipart body: {e}")))?
    {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some(DOCUMENT_FIELD) => {
                let bytes = field.bytes().await.map_err(|e| {
                    GatewayError::InvalidRequest(format!("failed to read '{DOCUMENT_FIELD}': {e}"))
                })?;
                debug!(bytes = bytes.len(), "Document received");
                upload = Some(persist_upload(state.upload_dir.clone(), bytes).await?);
            }
            Some(REVIEW_FIELD) => {
                let text = field.text().await.map_err(|e| {
                    GatewayError::InvalidRequest(format!("failed to read '{REVIEW_FIELD}': {e}"))
                })?;
                review = Some(text);
            }
            other => debug!(field = ?other, "Ignoring multipart field"),
        }
    }

    let upload = upload.ok_or_else(|| {
        GatewayError::InvalidRequest(format!("missing multipart field '{DOCUMENT_FIELD}'"))
    })?;

    let assessment = state
        .context
        .evaluate_document(upload.path().to_path_buf(), review)
        .await;
    // The upload is removed before responding, whatever the outcome.
    drop(upload);

    Ok(assessment_response(assessment?))
}

/// Writes the upload to a request-scoped temporary file under `upload_dir`.
async fn persist_upload(upload_dir: PathBuf, bytes: Bytes) -> Result<NamedTempFile, GatewayError> {
    tokio::task::spawn_blocking(move || write_temp_file(&upload_dir, &bytes))
        .await
        .map_err(|e| GatewayError::UploadFailed(e.to_string()))?
        .map_err(|e| GatewayError::UploadFailed(e.to_string()))
}

fn write_temp_file(upload_dir: &Path, bytes: &[u8]) -> std::io::Result<NamedTempFile> {
    let mut file = tempfile::Builder::new()
        .prefix("verdict-upload-")
        .suffix(".pdf")
        .tempfile_in(upload_dir)?;
    file.write_all(bytes)?;
    file.flush()?;
    Ok(file)
}

pub(crate) fn assessment_response(assessment: Assessment) -> Response {
    let label = assessment.label();
    let mut headers = HeaderMap::new();
    headers.insert(
        VERDICT_STATUS_HEADER,
        HeaderValue::from_static(label.as_status()),
    );

    match assessment {
        Assessment::Scored(evaluation) => {
            info!(
                composite = evaluation.verdict.composite,
                verdict = %label,
                "Prediction complete"
            );
            (StatusCode::OK, headers, Json(evaluation)).into_response()
        }
        Assessment::Unreadable(rejection) => {
            info!(verdict = %label, "Prediction rejected: unreadable document");
            (StatusCode::BAD_REQUEST, headers, Json(rejection)).into_response()
        }
    }
}
