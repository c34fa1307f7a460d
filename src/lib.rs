pub mod config;
pub mod modules;
pub mod services;

use config::environment::Config;
use services::monitor::MonitorEngine;
use services::practicum::PracticumClient;
use services::telegram::TelegramNotifier;

/// Build the polling engine with the real Practicum and Telegram clients.
pub fn create_engine(config: &Config) -> MonitorEngine<PracticumClient, TelegramNotifier> {
    let api = PracticumClient::new(
        config.practicum_endpoint.clone(),
        config.practicum_token.clone(),
        config.http_timeout(),
    );
    let notifier = TelegramNotifier::new(
        config.telegram_api_url.clone(),
        config.telegram_token.clone(),
        config.http_timeout(),
    );

    MonitorEngine::new(
        api,
        notifier,
        config.telegram_chat_id.clone(),
        config.retry_interval(),
        config.start_timestamp,
    )
}
