use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use homework_bot::config::BotConfig;
use homework_bot::practicum::PracticumHttpClient;
use homework_bot::services::{Notifier, StatusWatcher};
use homework_bot::telegram::TelegramHttpClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_directive()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match BotConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            // Missing credentials: refuse to start polling.
            error!("{e}");
            return Err(e.into());
        }
    };

    let practicum = Arc::new(PracticumHttpClient::new(&config)?);
    let telegram = Arc::new(TelegramHttpClient::new(&config)?);
    let notifier = Notifier::new(telegram, config.telegram_chat_id.clone());

    info!("polling {} every {}s", config.endpoint, config.poll_interval_secs);
    let watcher = StatusWatcher::new(practicum, notifier, config.poll_interval_secs);
    watcher.start().await;

    Ok(())
}

/// Maps `DEBUG_LEVEL` onto a tracing filter directive. Unknown values fall
/// back to the default INFO.
fn log_directive() -> String {
    let level = match std::env::var("DEBUG_LEVEL").unwrap_or_default().to_uppercase().as_str() {
        "DEBUG" => "debug",
        "WARNING" => "warn",
        "ERROR" | "CRITICAL" => "error",
        _ => "info",
    };
    format!("homework_bot={level}")
}
