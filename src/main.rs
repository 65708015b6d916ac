use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use confirmd::application::ports::{ModelClient, OutputWriter, TextExtractor};
use confirmd::application::services::{
    BrokerDispatch, ConfirmationParser, JobStore, SubmissionService, WorkerPool,
};
use confirmd::domain::{Broker, OutputSchema};
use confirmd::infrastructure::llm::OllamaClient;
use confirmd::infrastructure::observability::{init_tracing, TracingConfig};
use confirmd::infrastructure::output::CsvOutputWriter;
use confirmd::infrastructure::pdf::PdfTextExtractor;
use confirmd::presentation::{create_router, AppState, ParserConfig, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env();
    init_tracing(TracingConfig::default(), settings.server.port);

    std::fs::create_dir_all(&settings.storage.uploads_dir)
        .context("failed to create uploads directory")?;
    std::fs::create_dir_all(&settings.storage.output_dir)
        .context("failed to create output directory")?;

    let extractor: Arc<dyn TextExtractor> = Arc::new(PdfTextExtractor::new());
    let model_client: Arc<dyn ModelClient> = Arc::new(OllamaClient::new(settings.ollama.url.clone()));
    let output_writer: Arc<dyn OutputWriter> = Arc::new(CsvOutputWriter::new());
    let job_store = Arc::new(JobStore::new());

    let mut dispatch = BrokerDispatch::new();
    let mut start_pages = HashMap::new();
    for broker in [Broker::Robinhood, Broker::Fidelity] {
        let config_path = settings.storage.config_dir.join(format!("{}.toml", broker));
        let config = ParserConfig::load(&config_path)
            .with_context(|| format!("failed to load parser config for {}", broker))?;
        start_pages.insert(broker, config.start_page);

        let strategy = Arc::new(ConfirmationParser::new(
            broker,
            config.model,
            config.prompt_template,
            Arc::clone(&extractor),
            Arc::clone(&model_client),
            Arc::clone(&job_store),
        ));
        dispatch.register(broker, strategy, Arc::new(OutputSchema::for_broker(broker)));
    }

    let pool = Arc::new(WorkerPool::new(
        Arc::new(dispatch),
        Arc::clone(&job_store),
        output_writer,
        settings.storage.output_dir.clone(),
        settings.workers.num_workers,
    ));
    pool.start();

    let submission = Arc::new(SubmissionService::new(
        Arc::clone(&extractor),
        Arc::clone(&job_store),
        Arc::clone(&pool),
        start_pages,
    ));

    let state = AppState {
        submission,
        job_store,
        model_client,
        uploads_dir: settings.storage.uploads_dir.clone(),
        output_dir: settings.storage.output_dir.clone(),
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("invalid server address")?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
