use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::presentation::handlers::{
    download_handler, health_handler, set_downloaded_handler, status_handler, upload_handler,
};
use crate::presentation::state::AppState;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/health", get(health_handler))
        .route("/upload", post(upload_handler))
        .route("/status", get(status_handler))
        .route("/set-downloaded/{job_id}", post(set_downloaded_handler))
        .route("/download/{filename}", get(download_handler))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
