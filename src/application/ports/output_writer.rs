use std::path::Path;

use async_trait::async_trait;

use crate::domain::TransactionRecord;

/// Serialization of an ordered record sequence to a tabular file.
#[async_trait]
pub trait OutputWriter: Send + Sync {
    async fn write(
        &self,
        records: &[TransactionRecord],
        dest: &Path,
    ) -> Result<(), OutputWriterError>;
}

#[derive(Debug, thiserror::Error)]
pub enum OutputWriterError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv serialization failed: {0}")]
    Serialization(String),
}
