use serde::Deserialize;
use std::env;
use std::path::PathBuf;
use std::sync::OnceLock;
use thiserror::Error;

/// Backing file used when `STICKY_NOTES_FILE` is not provided.
pub const DEFAULT_NOTES_FILE: &str = "notes.txt";

/// Errors encountered while loading configuration from environment variables.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Environment variable contained a value that could not be used.
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}

/// Runtime configuration for the sticky notes server.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Path of the append-only notes file.
    pub notes_file: PathBuf,
    /// Optional override for the log file location.
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables, performing validation along the way.
    pub fn from_env() -> Result<Self, ConfigError> {
        let notes_file = load_env_optional("STICKY_NOTES_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_NOTES_FILE));
        if notes_file.as_os_str().is_empty() || notes_file.is_dir() {
            return Err(ConfigError::InvalidValue("STICKY_NOTES_FILE".into()));
        }

        Ok(Self {
            notes_file,
            log_file: load_env_optional("STICKY_NOTES_LOG_FILE").map(PathBuf::from),
        })
    }

    /// Record the effective configuration. Call once tracing has been installed.
    pub fn log_loaded(&self) {
        tracing::debug!(
            notes_file = %self.notes_file.display(),
            log_file = ?self.log_file,
            "Loaded configuration"
        );
    }

    /// Replace the notes file location, typically from a command-line flag.
    pub fn with_notes_file(mut self, path: Option<PathBuf>) -> Self {
        if let Some(path) = path {
            self.notes_file = path;
        }
        self
    }
}

fn load_env_optional(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Global configuration cache populated during process start.
pub static CONFIG: OnceLock<Config> = OnceLock::new();

/// Load configuration from the environment and install it in the global cache.
///
/// Subsequent calls return the configuration installed by the first one.
pub fn init_config() -> Result<&'static Config, ConfigError> {
    dotenvy::dotenv().ok();
    if let Some(config) = CONFIG.get() {
        return Ok(config);
    }
    let config = Config::from_env()?;
    Ok(CONFIG.get_or_init(|| config))
}
