use std::collections::HashMap;

use tracing::debug;

use crate::models::Homework;

/// Last-seen status keyed by homework id. Owned by the watcher, replaced
/// wholesale after each non-empty batch, never persisted.
pub type StatusSnapshot = HashMap<String, String>;

/// Splits a batch into the records worth notifying about and the snapshot to
/// carry into the next iteration. A record is unchanged only when its id was
/// seen before with the same status; everything else (new id, or new status)
/// is notified, in input order.
pub fn diff_statuses(
    previous: &StatusSnapshot,
    homeworks: &[Homework],
) -> (Vec<Homework>, StatusSnapshot) {
    let mut next = StatusSnapshot::with_capacity(homeworks.len());
    let mut changed = Vec::new();

    for homework in homeworks {
        next.insert(homework.id.clone(), homework.status.clone());
        match previous.get(&homework.id) {
            Some(status) if *status == homework.status => {
                debug!("homework {} status unchanged ({})", homework.id, homework.status);
            }
            _ => changed.push(homework.clone()),
        }
    }

    (changed, next)
}
