use std::collections::BTreeMap;

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::domain::Job;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct JobStatusResponse {
    pub total_pages: u32,
    pub processed_pages: u32,
    pub status: &'static str,
    pub total_time: f64,
    pub output_filename: Option<String>,
}

impl From<Job> for JobStatusResponse {
    fn from(job: Job) -> Self {
        Self {
            total_pages: job.total_pages,
            processed_pages: job.processed_pages,
            status: job.status.as_str(),
            total_time: job.total_time,
            output_filename: job.output_filename,
        }
    }
}

/// Status polling endpoint: one consistent snapshot of every job.
#[tracing::instrument(skip(state))]
pub async fn status_handler(
    State(state): State<AppState>,
) -> Json<BTreeMap<String, JobStatusResponse>> {
    let jobs = state
        .job_store
        .snapshot()
        .into_iter()
        .map(|(id, job)| (id.as_uuid().to_string(), JobStatusResponse::from(job)))
        .collect();
    Json(jobs)
}
