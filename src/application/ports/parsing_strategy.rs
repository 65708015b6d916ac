use std::path::Path;

use async_trait::async_trait;

use crate::domain::{JobId, OutputSchema, TransactionRecord};

use super::{ModelClientError, TextExtractorError};

/// Per-broker procedure turning a confirmation document into ordered
/// transaction records.
///
/// Implementations walk pages in order starting at `start_page`,
/// reporting per-page progress for `job_id` as they go. The first
/// failing page aborts the whole document: no partial result is
/// returned.
#[async_trait]
pub trait ParsingStrategy: Send + Sync {
    async fn parse(
        &self,
        file_path: &Path,
        schema: &OutputSchema,
        job_id: JobId,
        start_page: usize,
    ) -> Result<Vec<TransactionRecord>, ParseError>;
}

/// A page-level failure, tagged with the 0-based page that broke.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("page {page}: text extraction failed: {source}")]
    Extraction {
        page: usize,
        source: TextExtractorError,
    },
    #[error("page {page}: model inference failed: {source}")]
    Inference {
        page: usize,
        source: ModelClientError,
    },
    #[error("page {page}: response decoding failed: {source}")]
    Decode {
        page: usize,
        source: serde_json::Error,
    },
}
