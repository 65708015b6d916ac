mod parser_config;
mod settings;

pub use parser_config::{ParserConfig, ParserConfigError};
pub use settings::{OllamaSettings, ServerSettings, Settings, StorageSettings, WorkerSettings};
