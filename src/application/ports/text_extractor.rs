use std::path::Path;

use async_trait::async_trait;

/// Per-page text extraction from a persisted document.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn page_count(&self, path: &Path) -> Result<usize, TextExtractorError>;

    /// Extract the text of one page (0-based index).
    async fn extract_page(&self, path: &Path, page_index: usize)
        -> Result<String, TextExtractorError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TextExtractorError {
    #[error("failed to open document: {0}")]
    OpenFailed(String),
    #[error("extraction failed: {0}")]
    ExtractionFailed(String),
    #[error("page {0} out of bounds")]
    PageOutOfBounds(usize),
    #[error("extraction timed out")]
    Timeout,
}
