use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tracing::info;

use crate::error::BotError;
use crate::practicum::validate::check_response;
use crate::practicum::PracticumClient;
use crate::services::diff::{diff_statuses, StatusSnapshot};
use crate::services::notifier::Notifier;

/// Homework status watcher
/// Polls the review API on a fixed interval and notifies on changes.
pub struct StatusWatcher {
    practicum: Arc<dyn PracticumClient>,
    notifier: Notifier,
    interval: Duration,
    cursor: i64,
    snapshot: StatusSnapshot,
}

/// Counts from one poll iteration.
#[derive(Debug)]
pub struct PollStats {
    pub fetched: usize,
    pub notified: usize,
    pub unchanged: usize,
}

impl StatusWatcher {
    pub fn new(practicum: Arc<dyn PracticumClient>, notifier: Notifier, interval_secs: u64) -> Self {
        Self {
            practicum,
            notifier,
            interval: Duration::from_secs(interval_secs),
            cursor: Utc::now().timestamp(),
            snapshot: StatusSnapshot::new(),
        }
    }

    /// Lower bound of the next fetch window (unix seconds).
    pub fn cursor(&self) -> i64 {
        self.cursor
    }

    /// Polls until the process is killed. An iteration failure is logged,
    /// mirrored to the chat and retried on the next tick; nothing escapes
    /// the loop.
    pub async fn start(mut self) {
        info!("starting homework status watcher (interval: {:?})", self.interval);

        loop {
            match self.poll_once().await {
                Ok(stats) => {
                    info!(
                        "poll finished - {} homeworks, {} notified, {} unchanged",
                        stats.fetched, stats.notified, stats.unchanged
                    );
                }
                Err(e) => {
                    let notice = format!("Сбой в работе программы: {e}");
                    self.notifier.report_failure(&notice).await;
                }
            }
            tokio::time::sleep(self.interval).await;
        }
    }

    /// Runs a single poll iteration. On failure the cursor and snapshot keep
    /// their pre-failure values, so the next tick re-queries the same window.
    pub async fn poll_once(&mut self) -> Result<PollStats, BotError> {
        let raw = self.practicum.fetch_homework_statuses(self.cursor).await?;
        let homeworks = check_response(&raw)?;

        let mut stats = PollStats {
            fetched: homeworks.len(),
            notified: 0,
            unchanged: 0,
        };
        if !homeworks.is_empty() {
            let (changed, next) = diff_statuses(&self.snapshot, &homeworks);
            stats.unchanged = stats.fetched - changed.len();
            for homework in &changed {
                self.notifier.notify_status_change(homework).await;
                stats.notified += 1;
            }
            self.snapshot = next;
        }
        self.cursor = Utc::now().timestamp();
        Ok(stats)
    }
}
