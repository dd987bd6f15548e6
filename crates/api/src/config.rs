use std::path::PathBuf;

use drama_db::config::DEFAULT_DATA_FILE;
use drama_db::{StorageConfig, StorageMode};

/// A configuration value that could not be parsed.
#[derive(Debug, thiserror::Error)]
#[error("Invalid value for {var}: {message}")]
pub struct ConfigError {
    pub var: &'static str,
    pub message: String,
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    /// A single `*` allows any origin.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Record store backend and data file location.
    pub storage: StorageConfig,
    /// Reject create requests that miss required fields (default: `true`).
    pub strict_validation: bool,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                |
    /// |------------------------|------------------------|
    /// | `HOST`                 | `0.0.0.0`              |
    /// | `PORT`                 | `3000`                 |
    /// | `CORS_ORIGINS`         | `*`                    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                   |
    /// | `STORAGE_MODE`         | `file`                 |
    /// | `DATA_FILE`            | `data/dramaData.json`  |
    /// | `STRICT_VALIDATION`    | `true`                 |
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env_or("HOST", "0.0.0.0");

        let port: u16 = parse_env("PORT", "3000")?;

        let cors_origins: Vec<String> = env_or("CORS_ORIGINS", "*")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = parse_env("REQUEST_TIMEOUT_SECS", "30")?;

        let mode: StorageMode = parse_env("STORAGE_MODE", "file")?;
        let data_file = PathBuf::from(env_or("DATA_FILE", DEFAULT_DATA_FILE));

        let strict_validation: bool = parse_env("STRICT_VALIDATION", "true")?;

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            storage: StorageConfig { mode, data_file },
            strict_validation,
        })
    }
}

fn env_or(var: &str, default: &str) -> String {
    std::env::var(var).unwrap_or_else(|_| default.into())
}

fn parse_env<T>(var: &'static str, default: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    env_or(var, default).parse().map_err(|e: T::Err| ConfigError {
        var,
        message: e.to_string(),
    })
}
