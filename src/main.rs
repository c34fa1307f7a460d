use homework_notifier::config::{environment::Config, logging::init_tracing};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // Load configuration
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Refusing to start: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = init_tracing(&config.log) {
        eprintln!("Failed to open log file {}: {}", config.log.path.display(), e);
        std::process::exit(1);
    }

    tracing::info!(
        "Homework notifier started, polling every {}s",
        config.retry_interval().as_secs()
    );

    let engine = homework_notifier::create_engine(&config);

    tokio::select! {
        _ = engine.run() => {}
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Received Ctrl-C, shutting down");
        }
    }
}
