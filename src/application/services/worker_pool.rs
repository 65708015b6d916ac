use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use tokio::sync::mpsc;
use tracing::Instrument;

use crate::application::ports::OutputWriter;
use crate::domain::WorkItem;

use super::{BrokerDispatch, DispatchEntry, JobStore};

/// Fixed set of long-lived workers consuming one shared, unbounded
/// FIFO queue of [`WorkItem`]s.
///
/// The single receiver sits behind an async mutex so each item is
/// popped by exactly one worker: no duplication, no redelivery. A
/// worker blocked on an in-flight model call stalls only itself; the
/// other workers keep draining the queue. There is no shutdown
/// contract: workers run until process exit.
pub struct WorkerPool {
    context: Arc<WorkerContext>,
    sender: mpsc::UnboundedSender<WorkItem>,
    receiver: Arc<tokio::sync::Mutex<mpsc::UnboundedReceiver<WorkItem>>>,
    num_workers: usize,
    started: AtomicBool,
}

struct WorkerContext {
    dispatch: Arc<BrokerDispatch>,
    job_store: Arc<JobStore>,
    output_writer: Arc<dyn OutputWriter>,
    output_dir: PathBuf,
}

impl WorkerPool {
    pub fn new(
        dispatch: Arc<BrokerDispatch>,
        job_store: Arc<JobStore>,
        output_writer: Arc<dyn OutputWriter>,
        output_dir: PathBuf,
        num_workers: usize,
    ) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self {
            context: Arc::new(WorkerContext {
                dispatch,
                job_store,
                output_writer,
                output_dir,
            }),
            sender,
            receiver: Arc::new(tokio::sync::Mutex::new(receiver)),
            num_workers,
            started: AtomicBool::new(false),
        }
    }

    /// Spawn the worker tasks. Calling `start` more than once is a
    /// no-op; the pool never holds more than `num_workers` workers.
    pub fn start(&self) {
        if self.started.swap(true, Ordering::SeqCst) {
            return;
        }
        for worker in 0..self.num_workers {
            let context = Arc::clone(&self.context);
            let receiver = Arc::clone(&self.receiver);
            tokio::spawn(async move {
                tracing::debug!(worker, "worker started");
                loop {
                    // Holding the lock across the await keeps pops
                    // strictly one-at-a-time; the next worker takes
                    // over as soon as this one has claimed an item.
                    let item = { receiver.lock().await.recv().await };
                    let Some(item) = item else {
                        tracing::debug!(worker, "work queue closed, worker exiting");
                        break;
                    };
                    let span = tracing::info_span!(
                        "parse_job",
                        worker,
                        job_id = %item.job_id,
                        broker = %item.broker,
                    );
                    process_item(&context, item).instrument(span).await;
                }
            });
        }
        tracing::info!(workers = self.num_workers, "worker pool started");
    }

    /// Enqueue one unit of work. Never blocks: the queue is
    /// unbounded.
    pub fn enqueue(&self, item: WorkItem) {
        if self.sender.send(item).is_err() {
            // Only possible once every worker has exited, i.e. at
            // process teardown.
            tracing::error!("work queue is closed, dropping item");
        }
    }
}

/// Full per-job pipeline. Every failure path funnels into
/// `fail(job_id)` and returns; nothing escapes to take down the
/// worker loop.
async fn process_item(context: &WorkerContext, item: WorkItem) {
    let WorkItem {
        broker,
        file_path,
        job_id,
        start_page,
    } = item;

    let Some(entry) = context.dispatch.resolve(broker) else {
        tracing::error!("no parser registered for broker, failing job");
        context.job_store.fail(job_id);
        return;
    };
    let DispatchEntry { strategy, schema } = entry.clone();

    context.job_store.start(job_id);
    let started = Instant::now();

    let records = match strategy.parse(&file_path, &schema, job_id, start_page).await {
        Ok(records) => records,
        Err(error) => {
            tracing::error!(error = %error, "parsing failed");
            context.job_store.fail(job_id);
            return;
        }
    };

    let filename = broker.output_filename(&records, job_id);
    context.job_store.set_output_filename(job_id, &filename);

    let dest = context.output_dir.join(&filename);
    if let Err(error) = context.output_writer.write(&records, &dest).await {
        tracing::error!(error = %error, output = %dest.display(), "writing output failed");
        context.job_store.fail(job_id);
        return;
    }

    let total_time = started.elapsed().as_secs_f64();
    context.job_store.complete(job_id, total_time);
    tracing::info!(
        transactions = records.len(),
        output = %filename,
        total_time,
        "job completed"
    );
}
