use std::sync::Arc;

use tracing::{error, info, warn};

use crate::models::Homework;
use crate::telegram::TelegramClient;

/// Renders the notification line for a status change.
///
/// Формат сообщения: `Изменился статус проверки работы "<название>". <вердикт>`.
/// An undocumented status is warned about and degrades to a generic verdict
/// instead of failing message construction.
pub fn render_status_message(homework: &Homework) -> String {
    let verdict = match homework.verdict() {
        Some(verdict) => verdict.to_string(),
        None => {
            warn!("undocumented homework status: {:?}", homework.status);
            format!("Новый статус: \"{}\".", homework.status)
        }
    };
    format!(
        "Изменился статус проверки работы \"{}\". {}",
        homework.homework_name, verdict
    )
}

/// Delivery side of the loop: sends change notifications and mirrors failure
/// notices to the chat.
pub struct Notifier {
    telegram: Arc<dyn TelegramClient>,
    chat_id: String,
    /// The previously mirrored failure notice; a repeating notice is logged
    /// but not sent again.
    last_alert: Option<String>,
}

impl Notifier {
    pub fn new(telegram: Arc<dyn TelegramClient>, chat_id: String) -> Self {
        Self {
            telegram,
            chat_id,
            last_alert: None,
        }
    }

    pub async fn notify_status_change(&self, homework: &Homework) {
        let message = render_status_message(homework);
        self.send_message(&message).await;
    }

    /// Attempts delivery; a failure is logged and absorbed, never retried.
    pub async fn send_message(&self, text: &str) {
        match self.telegram.send_message(&self.chat_id, text).await {
            Ok(()) => info!("sent telegram message: {text:?}"),
            Err(e) => error!("failed to deliver telegram message: {e}"),
        }
    }

    /// Logs a failure notice and mirrors it to the chat unless it repeats the
    /// immediately preceding notice.
    pub async fn report_failure(&mut self, text: &str) {
        error!("{text}");
        if self.last_alert.as_deref() != Some(text) {
            self.send_message(text).await;
        }
        self.last_alert = Some(text.to_string());
    }
}
