use std::env;

use crate::error::BotError;

pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

const DEFAULT_POLL_INTERVAL_SECS: u64 = 60;

#[derive(Clone, Debug)]
pub struct BotConfig {
    pub practicum_token: String,
    pub telegram_token: String,
    pub telegram_chat_id: String,
    pub endpoint: String,
    pub poll_interval_secs: u64,
}

impl BotConfig {
    /// Reads the configuration once at startup. All three secrets must be
    /// present and non-empty; otherwise returns `MissingCredentials` naming
    /// every variable that is not set, and the process must not start polling.
    pub fn from_env() -> Result<Self, BotError> {
        let mut missing = Vec::new();
        let practicum_token = require(&mut missing, "PRACTICUM_TOKEN");
        let telegram_token = require(&mut missing, "TELEGRAM_TOKEN");
        let telegram_chat_id = require(&mut missing, "TELEGRAM_CHAT_ID");
        if !missing.is_empty() {
            return Err(BotError::MissingCredentials(missing.join(", ")));
        }

        let endpoint =
            env::var("PRACTICUM_ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
        let poll_interval_secs = parse_env("POLL_INTERVAL_SECS", DEFAULT_POLL_INTERVAL_SECS);

        Ok(Self {
            practicum_token,
            telegram_token,
            telegram_chat_id,
            endpoint,
            poll_interval_secs,
        })
    }
}

fn require(missing: &mut Vec<&'static str>, key: &'static str) -> String {
    match env::var(key) {
        Ok(value) if !value.is_empty() => value,
        _ => {
            missing.push(key);
            String::new()
        }
    }
}

/// Parses an optional variable, falling back to `default` when unset or
/// unparsable.
fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key).ok().and_then(|v| v.parse().ok()).unwrap_or(default)
}
