pub mod schema;
pub mod validate;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;

use crate::config::BotConfig;
use crate::error::BotError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Read side of the homework review API.
#[async_trait]
pub trait PracticumClient: Send + Sync {
    /// Fetches the raw status payload for homeworks updated since `from_date`
    /// (unix seconds). Returns the decoded body as-is; shape checks are the
    /// validator's job.
    async fn fetch_homework_statuses(&self, from_date: i64) -> Result<Value, BotError>;
}

pub struct PracticumHttpClient {
    client: Client,
    endpoint: String,
    token: String,
}

impl PracticumHttpClient {
    pub fn new(config: &BotConfig) -> Result<Self, BotError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            token: config.practicum_token.clone(),
        })
    }
}

#[async_trait]
impl PracticumClient for PracticumHttpClient {
    async fn fetch_homework_statuses(&self, from_date: i64) -> Result<Value, BotError> {
        let response = self
            .client
            .get(&self.endpoint)
            .header("Authorization", format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await?;

        // The API is healthy only on exactly 200.
        if response.status() != StatusCode::OK {
            return Err(BotError::Endpoint(response.status()));
        }

        Ok(response.json().await?)
    }
}
