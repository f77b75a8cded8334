pub mod diff;
pub mod notifier;
pub mod watcher;

pub use diff::{diff_statuses, StatusSnapshot};
pub use notifier::{render_status_message, Notifier};
pub use watcher::{PollStats, StatusWatcher};
