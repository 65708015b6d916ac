mod confirmation_parser;
mod dispatch;
mod job_store;
mod submission;
mod worker_pool;

pub use confirmation_parser::{ConfirmationParser, PDF_TEXT_PLACEHOLDER};
pub use dispatch::{BrokerDispatch, DispatchEntry};
pub use job_store::JobStore;
pub use submission::{Submission, SubmissionError, SubmissionService};
pub use worker_pool::WorkerPool;
