use std::fmt;
use std::str::FromStr;

/// Lifecycle of a parsing job.
///
/// Legal transitions: `Queuing -> Processing -> Completed`,
/// `Completed -> Downloaded`, and `Failed` from any non-terminal
/// state. Everything else is rejected by the job store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JobStatus {
    Queuing,
    Processing,
    Completed,
    Failed,
    Downloaded,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Queuing => "queuing",
            JobStatus::Processing => "processing",
            JobStatus::Completed => "completed",
            JobStatus::Failed => "failed",
            JobStatus::Downloaded => "downloaded",
        }
    }

    /// Terminal states admit no further pipeline mutation. The
    /// `Completed -> Downloaded` edge is a client acknowledgment,
    /// not part of the processing pipeline.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            JobStatus::Completed | JobStatus::Failed | JobStatus::Downloaded
        )
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "queuing" => Ok(JobStatus::Queuing),
            "processing" => Ok(JobStatus::Processing),
            "completed" => Ok(JobStatus::Completed),
            "failed" => Ok(JobStatus::Failed),
            "downloaded" => Ok(JobStatus::Downloaded),
            other => Err(format!("Invalid job status: {}", other)),
        }
    }
}
