use std::path::PathBuf;

use super::{Broker, JobId};

/// The enqueued descriptor consumed by exactly one worker.
#[derive(Debug, Clone)]
pub struct WorkItem {
    pub broker: Broker,
    /// Path to the already-persisted PDF.
    pub file_path: PathBuf,
    pub job_id: JobId,
    /// 0-based index of the first page to process; brokers whose
    /// first page carries no transaction data skip their cover page.
    pub start_page: usize,
}
