use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::application::services::SubmissionError;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct UploadResponse {
    pub results: Vec<UploadResult>,
}

#[derive(Serialize)]
pub struct UploadResult {
    pub filename: String,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl UploadResult {
    fn queuing(filename: String, job_id: String) -> Self {
        Self {
            filename,
            status: "queuing",
            job_id: Some(job_id),
            reason: None,
        }
    }

    fn failed(filename: String, reason: impl Into<String>) -> Self {
        Self {
            filename,
            status: "failed",
            job_id: None,
            reason: Some(reason.into()),
        }
    }
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Upload and process PDF confirmation files. Each uploaded file gets
/// its own result entry; a bad file never blocks the others.
#[tracing::instrument(skip(state, multipart))]
pub async fn upload_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    let mut results = Vec::new();

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                tracing::error!(error = %e, "failed to read multipart");
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse {
                        error: format!("Failed to read multipart: {}", e),
                    }),
                )
                    .into_response();
            }
        };

        let filename = match field.file_name() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => {
                results.push(UploadResult::failed(String::new(), "File has no name."));
                continue;
            }
        };

        if !filename.to_lowercase().ends_with(".pdf") {
            results.push(UploadResult::failed(filename, "File is not a PDF."));
            continue;
        }

        if filename.contains('/') || filename.contains('\\') || filename.contains("..") {
            results.push(UploadResult::failed(filename, "Invalid filename."));
            continue;
        }

        let data = match field.bytes().await {
            Ok(data) => data,
            Err(e) => {
                tracing::error!(error = %e, filename = %filename, "failed to read file bytes");
                results.push(UploadResult::failed(filename, format!("Read failed: {}", e)));
                continue;
            }
        };

        let file_path = state.uploads_dir.join(&filename);
        if let Err(e) = tokio::fs::write(&file_path, &data).await {
            tracing::error!(error = %e, filename = %filename, "failed to persist upload");
            results.push(UploadResult::failed(filename, format!("Save failed: {}", e)));
            continue;
        }

        match state.submission.submit(file_path).await {
            Ok(submission) => {
                tracing::info!(
                    filename = %filename,
                    job_id = %submission.job_id,
                    broker = %submission.broker,
                    "upload accepted"
                );
                results.push(UploadResult::queuing(
                    filename,
                    submission.job_id.as_uuid().to_string(),
                ));
            }
            Err(SubmissionError::UnknownBroker) => {
                tracing::warn!(filename = %filename, "unknown broker");
                results.push(UploadResult::failed(filename, "Unknown broker."));
            }
            Err(e) => {
                tracing::error!(error = %e, filename = %filename, "submission failed");
                results.push(UploadResult::failed(filename, e.to_string()));
            }
        }
    }

    (StatusCode::OK, Json(UploadResponse { results })).into_response()
}
