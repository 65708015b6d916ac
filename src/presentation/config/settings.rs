use std::path::PathBuf;

/// Process settings, derived from the environment with local-dev
/// defaults.
#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub ollama: OllamaSettings,
    pub workers: WorkerSettings,
    pub storage: StorageSettings,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct OllamaSettings {
    pub url: String,
}

#[derive(Debug, Clone)]
pub struct WorkerSettings {
    pub num_workers: usize,
}

#[derive(Debug, Clone)]
pub struct StorageSettings {
    pub uploads_dir: PathBuf,
    pub output_dir: PathBuf,
    pub config_dir: PathBuf,
}

impl Settings {
    pub fn from_env() -> Self {
        Self {
            server: ServerSettings {
                host: env_or("SERVER_HOST", "0.0.0.0"),
                port: env_parsed("SERVER_PORT", 3000),
            },
            ollama: OllamaSettings {
                url: env_or("OLLAMA_URL", "http://localhost:11434"),
            },
            workers: WorkerSettings {
                num_workers: env_parsed("NUM_WORKERS", 6),
            },
            storage: StorageSettings {
                uploads_dir: PathBuf::from(env_or("UPLOADS_DIR", "./uploads")),
                output_dir: PathBuf::from(env_or("OUTPUT_DIR", "./output")),
                config_dir: PathBuf::from(env_or("CONFIG_DIR", "./configs")),
            },
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parsed<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
