// =============================================================================
// INTEGRATION TESTS - ENVIRONMENT CONFIGURATION
// These tests mutate process environment variables and must run serially
// =============================================================================

use serial_test::serial;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use homework_notifier::config::environment::{
    Config, ConfigError, DEFAULT_PRACTICUM_ENDPOINT, DEFAULT_TELEGRAM_API_URL,
};

const REQUIRED: [&str; 4] = ["PRACTICUM_TOKEN", "TELEGRAM_TOKEN", "TELEGRAM_CHAT_ID", "RETRY_TIME"];
const OPTIONAL: [&str; 7] = [
    "PRACTICUM_ENDPOINT",
    "TELEGRAM_API_URL",
    "HTTP_TIMEOUT_SECS",
    "START_TIMESTAMP",
    "LOG_FILE",
    "LOG_MAX_BYTES",
    "LOG_BACKUP_COUNT",
];

fn reset_env() {
    for name in REQUIRED.iter().chain(OPTIONAL.iter()) {
        env::remove_var(name);
    }
    env::set_var("PRACTICUM_TOKEN", "practicum-token");
    env::set_var("TELEGRAM_TOKEN", "telegram-token");
    env::set_var("TELEGRAM_CHAT_ID", "424242");
    env::set_var("RETRY_TIME", "600");
}

#[test]
#[serial]
fn test_loads_required_values_with_defaults() {
    reset_env();

    let config = Config::from_env().unwrap();

    assert_eq!(config.practicum_token, "practicum-token");
    assert_eq!(config.telegram_token, "telegram-token");
    assert_eq!(config.telegram_chat_id, "424242");
    assert_eq!(config.retry_interval(), Duration::from_secs(600));
    assert_eq!(config.practicum_endpoint, DEFAULT_PRACTICUM_ENDPOINT);
    assert_eq!(config.telegram_api_url, DEFAULT_TELEGRAM_API_URL);
    assert_eq!(config.http_timeout(), Duration::from_secs(30));
    assert_eq!(config.start_timestamp, None);
    assert_eq!(config.log.path, PathBuf::from("homework_bot.log"));
    assert_eq!(config.log.max_bytes, 50_000_000);
    assert_eq!(config.log.backup_count, 5);
}

#[test]
#[serial]
fn test_each_missing_secret_refuses_startup() {
    for name in REQUIRED {
        reset_env();
        env::remove_var(name);

        assert_eq!(Config::from_env().unwrap_err(), ConfigError::Missing(name));
    }
}

#[test]
#[serial]
fn test_blank_secret_counts_as_missing() {
    reset_env();
    env::set_var("TELEGRAM_CHAT_ID", "   ");

    assert_eq!(
        Config::from_env().unwrap_err(),
        ConfigError::Missing("TELEGRAM_CHAT_ID")
    );
}

#[test]
#[serial]
fn test_non_numeric_retry_time_is_invalid() {
    reset_env();
    env::set_var("RETRY_TIME", "ten minutes");

    let err = Config::from_env().unwrap_err();

    assert_eq!(
        err,
        ConfigError::Invalid {
            name: "RETRY_TIME",
            value: "ten minutes".to_string()
        }
    );
    assert!(err.to_string().contains("RETRY_TIME"));
}

#[test]
#[serial]
fn test_zero_retry_time_is_invalid() {
    reset_env();
    env::set_var("RETRY_TIME", "0");

    assert!(matches!(
        Config::from_env().unwrap_err(),
        ConfigError::Invalid { name: "RETRY_TIME", .. }
    ));
}

#[test]
#[serial]
fn test_optional_overrides() {
    reset_env();
    env::set_var("PRACTICUM_ENDPOINT", "http://localhost:9000/statuses/");
    env::set_var("TELEGRAM_API_URL", "http://localhost:9001");
    env::set_var("HTTP_TIMEOUT_SECS", "5");
    env::set_var("START_TIMESTAMP", "1643477528");
    env::set_var("LOG_FILE", "/tmp/bot/main.log");
    env::set_var("LOG_MAX_BYTES", "1024");
    env::set_var("LOG_BACKUP_COUNT", "2");

    let config = Config::from_env().unwrap();

    assert_eq!(config.practicum_endpoint, "http://localhost:9000/statuses/");
    assert_eq!(config.telegram_api_url, "http://localhost:9001");
    assert_eq!(config.http_timeout(), Duration::from_secs(5));
    assert_eq!(config.start_timestamp, Some(1643477528));
    assert_eq!(config.log.path, PathBuf::from("/tmp/bot/main.log"));
    assert_eq!(config.log.max_bytes, 1024);
    assert_eq!(config.log.backup_count, 2);
}

#[test]
#[serial]
fn test_invalid_optional_number_is_rejected() {
    reset_env();
    env::set_var("START_TIMESTAMP", "yesterday");

    assert!(matches!(
        Config::from_env().unwrap_err(),
        ConfigError::Invalid { name: "START_TIMESTAMP", .. }
    ));
}
