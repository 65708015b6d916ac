use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub ollama_available: bool,
    pub message: String,
}

/// Health check that verifies the model backend is reachable.
#[tracing::instrument(skip(state))]
pub async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.model_client.healthcheck().await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "healthy",
                ollama_available: true,
                message: "Ollama is running and accessible".to_string(),
            }),
        ),
        Err(e) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "unhealthy",
                ollama_available: false,
                message: format!("Ollama connection failed: {}", e),
            }),
        ),
    }
}
