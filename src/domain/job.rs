use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::JobStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JobId(Uuid);

impl JobId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for JobId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for JobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// One tracked unit of work corresponding to one submitted document.
#[derive(Debug, Clone)]
pub struct Job {
    pub id: JobId,
    /// Pages to process, fixed at creation (document page count minus
    /// any skipped leading pages).
    pub total_pages: u32,
    /// Monotonically non-decreasing while the job is processing;
    /// never exceeds `total_pages`.
    pub processed_pages: u32,
    pub status: JobStatus,
    /// Elapsed wall-clock seconds of the parse phase; zero until the
    /// job completes.
    pub total_time: f64,
    /// Name of the output artifact once it has been derived; `None`
    /// before that point.
    pub output_filename: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Job {
    pub fn new(total_pages: u32) -> Self {
        let now = Utc::now();
        Self {
            id: JobId::new(),
            total_pages,
            processed_pages: 0,
            status: JobStatus::Queuing,
            total_time: 0.0,
            output_filename: None,
            created_at: now,
            updated_at: now,
        }
    }
}
