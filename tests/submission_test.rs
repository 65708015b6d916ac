use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;

use confirmd::application::ports::{
    OutputWriter, OutputWriterError, TextExtractor, TextExtractorError,
};
use confirmd::application::services::{
    BrokerDispatch, JobStore, SubmissionError, SubmissionService, WorkerPool,
};
use confirmd::domain::{Broker, JobStatus, TransactionRecord};

struct FakeExtractor {
    first_page: &'static str,
    page_count: usize,
}

#[async_trait]
impl TextExtractor for FakeExtractor {
    async fn page_count(&self, _path: &Path) -> Result<usize, TextExtractorError> {
        Ok(self.page_count)
    }

    async fn extract_page(
        &self,
        _path: &Path,
        page_index: usize,
    ) -> Result<String, TextExtractorError> {
        if page_index >= self.page_count {
            return Err(TextExtractorError::PageOutOfBounds(page_index));
        }
        Ok(if page_index == 0 {
            self.first_page.to_string()
        } else {
            "transactions".to_string()
        })
    }
}

struct NullWriter;

#[async_trait]
impl OutputWriter for NullWriter {
    async fn write(
        &self,
        _records: &[TransactionRecord],
        _dest: &Path,
    ) -> Result<(), OutputWriterError> {
        Ok(())
    }
}

fn service(
    extractor: FakeExtractor,
    start_pages: HashMap<Broker, usize>,
) -> (SubmissionService, Arc<JobStore>) {
    let store = Arc::new(JobStore::new());
    // The pool is deliberately left unstarted: enqueued items stay
    // queued, which is all these tests need to observe.
    let pool = Arc::new(WorkerPool::new(
        Arc::new(BrokerDispatch::new()),
        Arc::clone(&store),
        Arc::new(NullWriter),
        PathBuf::from("/tmp/out"),
        1,
    ));
    let service = SubmissionService::new(
        Arc::new(extractor),
        Arc::clone(&store),
        pool,
        start_pages,
    );
    (service, store)
}

#[tokio::test]
async fn given_fidelity_document_when_submitted_then_job_counts_every_page() {
    let (service, store) = service(
        FakeExtractor {
            first_page: "Fidelity Investments confirmation",
            page_count: 4,
        },
        HashMap::from([(Broker::Fidelity, 0)]),
    );

    let submission = service
        .submit(PathBuf::from("conf.pdf"))
        .await
        .expect("submission should succeed");

    assert_eq!(submission.broker, Broker::Fidelity);
    let job = store.get(submission.job_id).unwrap();
    assert_eq!(job.status, JobStatus::Queuing);
    assert_eq!(job.total_pages, 4);
}

#[tokio::test]
async fn given_robinhood_document_when_submitted_then_cover_page_is_excluded() {
    let (service, store) = service(
        FakeExtractor {
            first_page: "Robinhood Securities",
            page_count: 4,
        },
        HashMap::from([(Broker::Robinhood, 1)]),
    );

    let submission = service.submit(PathBuf::from("conf.pdf")).await.unwrap();

    assert_eq!(submission.broker, Broker::Robinhood);
    assert_eq!(store.get(submission.job_id).unwrap().total_pages, 3);
}

#[tokio::test]
async fn given_unrecognized_document_when_submitted_then_no_job_is_created() {
    let (service, store) = service(
        FakeExtractor {
            first_page: "Some other brokerage",
            page_count: 2,
        },
        HashMap::new(),
    );

    let error = service
        .submit(PathBuf::from("conf.pdf"))
        .await
        .expect_err("submission should fail");

    assert!(matches!(error, SubmissionError::UnknownBroker));
    assert!(store.snapshot().is_empty());
}

#[tokio::test]
async fn given_document_shorter_than_cover_pages_when_submitted_then_job_has_zero_pages() {
    let (service, store) = service(
        FakeExtractor {
            first_page: "Robinhood Securities",
            page_count: 1,
        },
        HashMap::from([(Broker::Robinhood, 1)]),
    );

    let submission = service.submit(PathBuf::from("conf.pdf")).await.unwrap();
    assert_eq!(store.get(submission.job_id).unwrap().total_pages, 0);
}
