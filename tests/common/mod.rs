#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use homework_bot::error::BotError;
use homework_bot::practicum::PracticumClient;
use homework_bot::telegram::TelegramClient;

/// One canned poll answer.
#[derive(Clone)]
pub enum CannedAnswer {
    Payload(Value),
    EndpointError,
}

/// Replays a script of canned answers in order; once the script is exhausted
/// the last answer repeats.
pub struct ScriptedPracticumClient {
    script: Vec<CannedAnswer>,
    calls: AtomicUsize,
}

impl ScriptedPracticumClient {
    pub fn new(script: Vec<CannedAnswer>) -> Self {
        assert!(!script.is_empty(), "script must not be empty");
        Self {
            script,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PracticumClient for ScriptedPracticumClient {
    async fn fetch_homework_statuses(&self, _from_date: i64) -> Result<Value, BotError> {
        let index = self.calls.fetch_add(1, Ordering::SeqCst);
        let answer = self
            .script
            .get(index)
            .unwrap_or_else(|| self.script.last().unwrap());
        match answer {
            CannedAnswer::Payload(value) => Ok(value.clone()),
            CannedAnswer::EndpointError => Err(BotError::Endpoint(reqwest::StatusCode::BAD_GATEWAY)),
        }
    }
}

/// Records every delivered message instead of talking to the Bot API.
#[derive(Default)]
pub struct RecordingTelegramClient {
    sent: Mutex<Vec<String>>,
}

impl RecordingTelegramClient {
    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl TelegramClient for RecordingTelegramClient {
    async fn send_message(&self, _chat_id: &str, text: &str) -> Result<(), BotError> {
        self.sent.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

/// Fails every delivery attempt, counting them.
#[derive(Default)]
pub struct FailingTelegramClient {
    attempts: AtomicUsize,
}

impl FailingTelegramClient {
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TelegramClient for FailingTelegramClient {
    async fn send_message(&self, _chat_id: &str, _text: &str) -> Result<(), BotError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(BotError::Telegram("telegram is down".to_string()))
    }
}
