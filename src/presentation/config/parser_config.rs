use std::path::Path;

use serde::Deserialize;

use crate::application::services::PDF_TEXT_PLACEHOLDER;

/// Per-broker parser configuration, loaded from a TOML file at
/// startup.
#[derive(Debug, Clone, Deserialize)]
pub struct ParserConfig {
    /// Ollama model tag, e.g. `qwen3:4b`.
    pub model: String,
    /// Prompt template; must contain the `{pdf_text}` placeholder.
    pub prompt_template: String,
    /// Leading pages to skip (cover pages without transaction data).
    #[serde(default)]
    pub start_page: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum ParserConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("prompt template is missing the {{pdf_text}} placeholder")]
    MissingPlaceholder,
}

impl ParserConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ParserConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml(&raw)
    }

    pub fn from_toml(raw: &str) -> Result<Self, ParserConfigError> {
        let config: Self = toml::from_str(raw)?;
        if !config.prompt_template.contains(PDF_TEXT_PLACEHOLDER) {
            return Err(ParserConfigError::MissingPlaceholder);
        }
        Ok(config)
    }
}
