use async_trait::async_trait;
use serde_json::Value;

/// Structured-output inference against a local model backend.
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Run one prompt through `model`, constraining the response to
    /// the given JSON schema, and return the raw response content.
    async fn generate(
        &self,
        model: &str,
        prompt: &str,
        format: &Value,
    ) -> Result<String, ModelClientError>;

    /// Probe whether the backend is reachable.
    async fn healthcheck(&self) -> Result<(), ModelClientError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ModelClientError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("model backend unavailable: {0}")]
    Unavailable(String),
}
