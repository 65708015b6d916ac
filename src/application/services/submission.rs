use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use crate::application::ports::{TextExtractor, TextExtractorError};
use crate::domain::{Broker, JobId, WorkItem};

use super::{JobStore, WorkerPool};

/// Outcome of a successful submission, returned synchronously.
#[derive(Debug, Clone, Copy)]
pub struct Submission {
    pub job_id: JobId,
    pub broker: Broker,
}

#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error("unknown broker")]
    UnknownBroker,
    #[error("document inspection failed: {0}")]
    Inspection(#[from] TextExtractorError),
}

/// Submission façade: turns a persisted document into a job record
/// plus one enqueued unit of work.
pub struct SubmissionService {
    extractor: Arc<dyn TextExtractor>,
    job_store: Arc<JobStore>,
    pool: Arc<WorkerPool>,
    /// Leading pages to skip per broker, from the broker configs.
    start_pages: HashMap<Broker, usize>,
}

impl SubmissionService {
    pub fn new(
        extractor: Arc<dyn TextExtractor>,
        job_store: Arc<JobStore>,
        pool: Arc<WorkerPool>,
        start_pages: HashMap<Broker, usize>,
    ) -> Self {
        Self {
            extractor,
            job_store,
            pool,
            start_pages,
        }
    }

    /// Sniff the broker from the first page's text, then submit. No
    /// job is created when the broker cannot be determined.
    pub async fn submit(&self, file_path: PathBuf) -> Result<Submission, SubmissionError> {
        let first_page = self.extractor.extract_page(&file_path, 0).await?;
        let broker = Broker::detect(&first_page).ok_or(SubmissionError::UnknownBroker)?;
        tracing::debug!(broker = %broker, file = %file_path.display(), "detected broker");
        self.submit_as(broker, file_path).await
    }

    /// Create the job record and enqueue the work item for a known
    /// broker. Returns the job id synchronously; parsing happens on
    /// the worker pool.
    pub async fn submit_as(
        &self,
        broker: Broker,
        file_path: PathBuf,
    ) -> Result<Submission, SubmissionError> {
        let page_count = self.extractor.page_count(&file_path).await?;
        let start_page = self.start_pages.get(&broker).copied().unwrap_or(0);

        // A document shorter than its cover pages yields a zero-page
        // job, which completes with an empty output.
        let total_pages = page_count.saturating_sub(start_page) as u32;
        let job_id = self.job_store.create(total_pages);

        self.pool.enqueue(WorkItem {
            broker,
            file_path,
            job_id,
            start_page,
        });

        tracing::info!(
            job_id = %job_id,
            broker = %broker,
            total_pages,
            start_page,
            "job enqueued"
        );

        Ok(Submission { job_id, broker })
    }
}
