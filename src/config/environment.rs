use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_PRACTICUM_ENDPOINT: &str =
    "https://practicum.yandex.ru/api/user_api/homework_statuses/";
pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_LOG_FILE: &str = "homework_bot.log";
pub const DEFAULT_LOG_MAX_BYTES: u64 = 50_000_000;
pub const DEFAULT_LOG_BACKUP_COUNT: usize = 5;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{name} has an invalid value: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Rotating log file settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub path: PathBuf,
    pub max_bytes: u64,
    pub backup_count: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_LOG_FILE),
            max_bytes: DEFAULT_LOG_MAX_BYTES,
            backup_count: DEFAULT_LOG_BACKUP_COUNT,
        }
    }
}

/// Environment configuration
/// Loads and validates environment variables once at startup
#[derive(Debug, Clone)]
pub struct Config {
    pub practicum_token: String,
    pub telegram_token: String,
    pub telegram_chat_id: String,
    pub retry_time_secs: u64,
    pub practicum_endpoint: String,
    pub telegram_api_url: String,
    pub http_timeout_secs: u64,
    /// Initial `from_date`; `None` means "now" at engine construction.
    pub start_timestamp: Option<i64>,
    pub log: LogConfig,
}

impl Config {
    /// Reads the process environment. Call `dotenvy::dotenv()` beforehand to
    /// pick up a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        let practicum_token = required("PRACTICUM_TOKEN")?;
        let telegram_token = required("TELEGRAM_TOKEN")?;
        let telegram_chat_id = required("TELEGRAM_CHAT_ID")?;

        let retry_time_secs: u64 = parse("RETRY_TIME", &required("RETRY_TIME")?)?;
        if retry_time_secs == 0 {
            return Err(ConfigError::Invalid {
                name: "RETRY_TIME",
                value: "0".to_string(),
            });
        }

        let practicum_endpoint = optional("PRACTICUM_ENDPOINT")
            .unwrap_or_else(|| DEFAULT_PRACTICUM_ENDPOINT.to_string());
        let telegram_api_url = optional("TELEGRAM_API_URL")
            .unwrap_or_else(|| DEFAULT_TELEGRAM_API_URL.to_string());

        let http_timeout_secs = optional_parsed("HTTP_TIMEOUT_SECS")?
            .unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS);
        let start_timestamp = optional_parsed("START_TIMESTAMP")?;

        let log = LogConfig {
            path: optional("LOG_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE)),
            max_bytes: optional_parsed("LOG_MAX_BYTES")?.unwrap_or(DEFAULT_LOG_MAX_BYTES),
            backup_count: optional_parsed("LOG_BACKUP_COUNT")?
                .unwrap_or(DEFAULT_LOG_BACKUP_COUNT),
        };

        Ok(Self {
            practicum_token,
            telegram_token,
            telegram_chat_id,
            retry_time_secs,
            practicum_endpoint,
            telegram_api_url,
            http_timeout_secs,
            start_timestamp,
            log,
        })
    }

    pub fn retry_interval(&self) -> Duration {
        Duration::from_secs(self.retry_time_secs)
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }
}

// Blank values are treated the same as unset ones.
fn optional(name: &'static str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    optional(name).ok_or(ConfigError::Missing(name))
}

fn parse<T: FromStr>(name: &'static str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::Invalid {
        name,
        value: value.to_string(),
    })
}

fn optional_parsed<T: FromStr>(name: &'static str) -> Result<Option<T>, ConfigError> {
    optional(name).map(|v| parse(name, &v)).transpose()
}
