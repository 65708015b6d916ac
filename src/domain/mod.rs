mod broker;
mod job;
mod job_status;
mod output_schema;
mod transaction;
mod work_item;

pub use broker::Broker;
pub use job::{Job, JobId};
pub use job_status::JobStatus;
pub use output_schema::OutputSchema;
pub use transaction::TransactionRecord;
pub use work_item::WorkItem;
