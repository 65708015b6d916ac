use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use chrono::Utc;

use crate::domain::{Job, JobId, JobStatus};

/// Authoritative, thread-safe store of job records.
///
/// One lock guards the whole map: every critical section is an O(1)
/// field update or a clone, and distinct workers mutate distinct
/// jobs, so contention stays negligible. Constructed once at process
/// start and passed as `Arc<JobStore>` to the submission path, the
/// worker pool, and the handlers. Records are never deleted during
/// the process lifetime.
///
/// Mutators return whether the transition applied; an illegal
/// transition is ignored without touching the record.
#[derive(Debug, Default)]
pub struct JobStore {
    jobs: Mutex<HashMap<JobId, Job>>,
}

impl JobStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn locked(&self) -> MutexGuard<'_, HashMap<JobId, Job>> {
        // A poisoned lock only means another thread panicked inside
        // an O(1) field write; the map itself is still coherent.
        self.jobs.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Insert a fresh record in `queuing` state and return its id.
    pub fn create(&self, total_pages: u32) -> JobId {
        let job = Job::new(total_pages);
        let id = job.id;
        self.locked().insert(id, job);
        id
    }

    /// `queuing -> processing`.
    pub fn start(&self, id: JobId) -> bool {
        self.transition(id, |job| {
            if job.status == JobStatus::Queuing {
                job.status = JobStatus::Processing;
                true
            } else {
                false
            }
        })
    }

    /// Count one more processed page. Applies only while the job is
    /// `processing` and strictly below `total_pages`.
    pub fn increment_progress(&self, id: JobId) -> bool {
        self.transition(id, |job| {
            if job.status == JobStatus::Processing && job.processed_pages < job.total_pages {
                job.processed_pages += 1;
                true
            } else {
                false
            }
        })
    }

    /// Record the derived output name. Last writer wins.
    pub fn set_output_filename(&self, id: JobId, name: &str) -> bool {
        self.transition(id, |job| {
            job.output_filename = Some(name.to_string());
            true
        })
    }

    /// `processing -> completed`. Forces `processed_pages` up to
    /// `total_pages` so a completed job never reads as partial.
    pub fn complete(&self, id: JobId, total_time: f64) -> bool {
        self.transition(id, |job| {
            if job.status == JobStatus::Processing {
                job.status = JobStatus::Completed;
                job.processed_pages = job.total_pages;
                job.total_time = total_time;
                true
            } else {
                false
            }
        })
    }

    /// Terminal failure, reachable from any non-terminal state.
    pub fn fail(&self, id: JobId) -> bool {
        self.transition(id, |job| {
            if job.status.is_terminal() {
                false
            } else {
                job.status = JobStatus::Failed;
                true
            }
        })
    }

    /// Client acknowledgment: `completed -> downloaded` only.
    pub fn mark_downloaded(&self, id: JobId) -> bool {
        self.transition(id, |job| {
            if job.status == JobStatus::Completed {
                job.status = JobStatus::Downloaded;
                true
            } else {
                false
            }
        })
    }

    /// Point read of one record.
    pub fn get(&self, id: JobId) -> Option<Job> {
        self.locked().get(&id).cloned()
    }

    /// Consistent point-in-time copy of all records.
    pub fn snapshot(&self) -> HashMap<JobId, Job> {
        self.locked().clone()
    }

    fn transition(&self, id: JobId, apply: impl FnOnce(&mut Job) -> bool) -> bool {
        let mut jobs = self.locked();
        let Some(job) = jobs.get_mut(&id) else {
            // Unknown ids are treated as a no-op, not an error.
            return false;
        };
        let applied = apply(job);
        if applied {
            job.updated_at = Utc::now();
        }
        applied
    }
}
