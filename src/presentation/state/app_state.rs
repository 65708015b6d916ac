use std::path::PathBuf;
use std::sync::Arc;

use crate::application::ports::ModelClient;
use crate::application::services::{JobStore, SubmissionService};

#[derive(Clone)]
pub struct AppState {
    pub submission: Arc<SubmissionService>,
    pub job_store: Arc<JobStore>,
    pub model_client: Arc<dyn ModelClient>,
    pub uploads_dir: PathBuf,
    pub output_dir: PathBuf,
}
