use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::JobId;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Download a processed CSV file by its derived name.
#[tracing::instrument(skip(state))]
pub async fn download_handler(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> impl IntoResponse {
    if filename.contains('/') || filename.contains('\\') || filename.contains("..") {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Invalid filename".to_string(),
            }),
        )
            .into_response();
    }

    let path = state.output_dir.join(&filename);
    match tokio::fs::read(&path).await {
        Ok(contents) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "text/csv".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", filename),
                ),
            ],
            contents,
        )
            .into_response(),
        Err(_) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "File not found".to_string(),
            }),
        )
            .into_response(),
    }
}

/// Client acknowledgment that a completed job's output was fetched.
#[tracing::instrument(skip(state))]
pub async fn set_downloaded_handler(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> impl IntoResponse {
    let uuid = match Uuid::parse_str(&job_id) {
        Ok(uuid) => uuid,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("Invalid job ID: {}", job_id),
                }),
            )
                .into_response();
        }
    };

    if state.job_store.mark_downloaded(JobId::from_uuid(uuid)) {
        (
            StatusCode::OK,
            Json(MessageResponse {
                message: "Job marked as downloaded".to_string(),
            }),
        )
            .into_response()
    } else {
        (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("No completed job: {}", job_id),
            }),
        )
            .into_response()
    }
}
