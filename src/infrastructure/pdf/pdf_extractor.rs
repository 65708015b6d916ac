use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use pdf_oxide::PdfDocument;

use crate::application::ports::{TextExtractor, TextExtractorError};

use super::normalize_page_text;

const EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);

/// PDF-backed text extractor. Parsing is CPU-bound, so each call runs
/// on the blocking pool under a timeout.
#[derive(Debug, Default)]
pub struct PdfTextExtractor {
    timeout: Duration,
}

impl PdfTextExtractor {
    pub fn new() -> Self {
        Self {
            timeout: EXTRACTION_TIMEOUT,
        }
    }

    async fn run_blocking<T, F>(&self, task: F) -> Result<T, TextExtractorError>
    where
        T: Send + 'static,
        F: FnOnce() -> Result<T, TextExtractorError> + Send + 'static,
    {
        tokio::time::timeout(self.timeout, tokio::task::spawn_blocking(task))
            .await
            .map_err(|_| TextExtractorError::Timeout)?
            .map_err(|e| TextExtractorError::ExtractionFailed(format!("task join error: {e}")))?
    }
}

#[async_trait]
impl TextExtractor for PdfTextExtractor {
    async fn page_count(&self, path: &Path) -> Result<usize, TextExtractorError> {
        let path = path.to_path_buf();
        self.run_blocking(move || {
            let mut doc = PdfDocument::open(&path)
                .map_err(|e| TextExtractorError::OpenFailed(e.to_string()))?;
            doc.page_count()
                .map_err(|e| TextExtractorError::ExtractionFailed(e.to_string()))
        })
        .await
    }

    async fn extract_page(
        &self,
        path: &Path,
        page_index: usize,
    ) -> Result<String, TextExtractorError> {
        let path = path.to_path_buf();
        self.run_blocking(move || {
            let mut doc = PdfDocument::open(&path)
                .map_err(|e| TextExtractorError::OpenFailed(e.to_string()))?;
            let page_count = doc
                .page_count()
                .map_err(|e| TextExtractorError::ExtractionFailed(e.to_string()))?;
            if page_index >= page_count {
                return Err(TextExtractorError::PageOutOfBounds(page_index));
            }
            let text = doc
                .extract_text(page_index)
                .map_err(|e| TextExtractorError::ExtractionFailed(e.to_string()))?;
            Ok(normalize_page_text(&text))
        })
        .await
    }
}
