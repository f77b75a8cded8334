pub mod dto;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::config::BotConfig;
use crate::error::BotError;

const TELEGRAM_API_BASE: &str = "https://api.telegram.org";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Write side of the notification channel.
#[async_trait]
pub trait TelegramClient: Send + Sync {
    async fn send_message(&self, chat_id: &str, text: &str) -> Result<(), BotError>;
}

pub struct TelegramHttpClient {
    client: Client,
    token: String,
}

impl TelegramHttpClient {
    pub fn new(config: &BotConfig) -> Result<Self, BotError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| BotError::Telegram(format!("failed to build http client: {e}")))?;
        Ok(Self {
            client,
            token: config.telegram_token.clone(),
        })
    }
}

#[async_trait]
impl TelegramClient for TelegramHttpClient {
    async fn send_message(&self, chat_id: &str, text: &str) -> Result<(), BotError> {
        let url = format!("{TELEGRAM_API_BASE}/bot{}/sendMessage", self.token);

        let response = self
            .client
            .post(&url)
            .json(&dto::SendMessageRequest { chat_id, text })
            .send()
            .await
            .map_err(|e| BotError::Telegram(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(BotError::Telegram(format!("telegram API error {status}: {body}")));
        }

        let body: dto::SendMessageResponse = response
            .json()
            .await
            .map_err(|e| BotError::Telegram(e.to_string()))?;
        if !body.ok {
            return Err(BotError::Telegram(
                body.description.unwrap_or_else(|| "sendMessage was not ok".to_string()),
            ));
        }
        Ok(())
    }
}

/// Client that drops every message; used by tests.
pub struct NoopTelegramClient;

#[async_trait]
impl TelegramClient for NoopTelegramClient {
    async fn send_message(&self, _chat_id: &str, _text: &str) -> Result<(), BotError> {
        Ok(())
    }
}
