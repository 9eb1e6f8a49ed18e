use serde::Deserialize;
use std::env;
use std::path::PathBuf;
use std::sync::OnceLock;
use thiserror::Error;

/// Port used when `PORT` is unset or blank.
pub const DEFAULT_PORT: u16 = 3000;
/// Log file used when `TEA_HOUSE_LOG_FILE` is unset or blank.
pub const DEFAULT_LOG_FILE: &str = "logs/tea-house.log";
/// Filter directive used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Errors encountered while loading configuration from environment variables.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Environment variable contained a value that could not be parsed.
    #[error("Invalid value for environment variable {name}: {value:?}")]
    InvalidValue {
        /// Variable that failed to parse.
        name: String,
        /// Raw value found in the environment.
        value: String,
    },
}

/// Runtime configuration for the Tea House server.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// TCP port the HTTP server listens on.
    pub port: u16,
    /// File that receives a copy of every log line.
    pub log_file: PathBuf,
    /// Fallback `tracing` filter when `RUST_LOG` does not provide one.
    pub log_filter: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            port: parse_port(load_env_optional("PORT"))?,
            log_file: load_env_optional("TEA_HOUSE_LOG_FILE")
                .map_or_else(|| PathBuf::from(DEFAULT_LOG_FILE), PathBuf::from),
            log_filter: load_env_optional("TEA_HOUSE_LOG_LEVEL")
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

fn parse_port(value: Option<String>) -> Result<u16, ConfigError> {
    match value {
        None => Ok(DEFAULT_PORT),
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
            name: "PORT".into(),
            value: raw,
        }),
    }
}

fn load_env_optional(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

/// Global configuration cache populated during process start.
pub static CONFIG: OnceLock<Config> = OnceLock::new();

/// Retrieve the loaded configuration, panicking if initialization has not occurred.
pub fn get_config() -> &'static Config {
    CONFIG.get().expect("Config not initialized")
}

/// Load configuration from the environment (and `.env`, when present) and install it in the
/// global cache.
pub fn init_config() {
    dotenvy::dotenv().ok();
    let config = Config::from_env().expect("Failed to load config from environment");
    tracing::debug!(
        port = config.port,
        log_file = %config.log_file.display(),
        log_filter = %config.log_filter,
        "Loaded configuration"
    );
    CONFIG.set(config).expect("Failed to set config");
}
