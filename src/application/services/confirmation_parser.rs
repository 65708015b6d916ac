use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use crate::application::ports::{ModelClient, ParseError, ParsingStrategy, TextExtractor};
use crate::domain::{Broker, JobId, OutputSchema, TransactionRecord};

use super::JobStore;

/// Placeholder substituted with a page's extracted text when building
/// the model prompt. Broker prompt templates are validated for it at
/// load time.
pub const PDF_TEXT_PLACEHOLDER: &str = "{pdf_text}";

/// Page-by-page parsing strategy for one broker's confirmations.
///
/// Each page is extracted, substituted into the broker's prompt
/// template, run through the model constrained to the broker's
/// schema, and decoded from the `{"data": [...]}` envelope. Records
/// accumulate in page order; within a page, record order is whatever
/// the model returned. Progress is reported to the job store after
/// every successful page.
pub struct ConfirmationParser {
    broker: Broker,
    model: String,
    prompt_template: String,
    extractor: Arc<dyn TextExtractor>,
    model_client: Arc<dyn ModelClient>,
    job_store: Arc<JobStore>,
}

#[derive(Deserialize)]
struct ResponseEnvelope {
    data: Vec<TransactionRecord>,
}

impl ConfirmationParser {
    pub fn new(
        broker: Broker,
        model: String,
        prompt_template: String,
        extractor: Arc<dyn TextExtractor>,
        model_client: Arc<dyn ModelClient>,
        job_store: Arc<JobStore>,
    ) -> Self {
        Self {
            broker,
            model,
            prompt_template,
            extractor,
            model_client,
            job_store,
        }
    }

    fn build_prompt(&self, page_text: &str) -> String {
        self.prompt_template.replace(PDF_TEXT_PLACEHOLDER, page_text)
    }

    fn decode_response(raw: &str) -> Result<Vec<TransactionRecord>, serde_json::Error> {
        let envelope: ResponseEnvelope = serde_json::from_str(raw.trim())?;
        Ok(envelope.data)
    }
}

#[async_trait]
impl ParsingStrategy for ConfirmationParser {
    async fn parse(
        &self,
        file_path: &Path,
        schema: &OutputSchema,
        job_id: JobId,
        start_page: usize,
    ) -> Result<Vec<TransactionRecord>, ParseError> {
        let total_pages = self
            .extractor
            .page_count(file_path)
            .await
            .map_err(|source| ParseError::Extraction {
                page: start_page,
                source,
            })?;

        tracing::info!(
            broker = %self.broker,
            model = %self.model,
            file = %file_path.display(),
            total_pages,
            start_page,
            "parsing confirmation file"
        );

        let mut transactions = Vec::new();
        for page in start_page..total_pages {
            let result = self.parse_page(file_path, schema, page).await;
            let records = match result {
                Ok(records) => records,
                Err(error) => {
                    // Prior pages' records are reported for
                    // diagnostics only; the job fails and publishes
                    // nothing.
                    tracing::warn!(
                        page,
                        accumulated = transactions.len(),
                        error = %error,
                        "page processing failed, discarding partial result"
                    );
                    return Err(error);
                }
            };

            tracing::debug!(page, records = records.len(), "page parsed");
            transactions.extend(records);
            self.job_store.increment_progress(job_id);
        }

        tracing::info!(
            pages = total_pages.saturating_sub(start_page),
            transactions = transactions.len(),
            "confirmation file parsed"
        );

        Ok(transactions)
    }
}

impl ConfirmationParser {
    async fn parse_page(
        &self,
        file_path: &Path,
        schema: &OutputSchema,
        page: usize,
    ) -> Result<Vec<TransactionRecord>, ParseError> {
        let text = self
            .extractor
            .extract_page(file_path, page)
            .await
            .map_err(|source| ParseError::Extraction { page, source })?;

        let prompt = self.build_prompt(&text);

        let raw = self
            .model_client
            .generate(&self.model, &prompt, &schema.format)
            .await
            .map_err(|source| ParseError::Inference { page, source })?;

        Self::decode_response(&raw).map_err(|source| ParseError::Decode { page, source })
    }
}
