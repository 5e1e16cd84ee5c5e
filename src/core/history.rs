use crate::models::history::{HistoryEntry, HistoryLog};

/// Return `log` with `entry` appended at the end.
pub fn append_history(mut log: HistoryLog, entry: HistoryEntry) -> HistoryLog {
    log.push(entry);
    log
}

/// A fresh, empty log.
pub fn clear_history() -> HistoryLog {
    HistoryLog::new()
}
