//! Diagnostic log of backend activity, shown in [`crate::ActivityLogPanel`].

use dioxus::prelude::*;

/// Entries kept before the oldest are dropped.
const MAX_ENTRIES: usize = 200;

#[derive(Clone, Debug, PartialEq)]
pub enum LogLevel {
    Success,
    Warning,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: LogLevel,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct ActivityLog {
    pub entries: Vec<LogEntry>,
    pub visible: bool,
}

impl ActivityLog {
    pub fn push(&mut self, timestamp: String, level: LogLevel, message: &str) {
        self.entries.push(LogEntry {
            timestamp,
            level,
            message: message.to_string(),
        });
        if self.entries.len() > MAX_ENTRIES {
            let overflow = self.entries.len() - MAX_ENTRIES;
            self.entries.drain(..overflow);
        }
    }

    pub fn error_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.level == LogLevel::Error)
            .count()
    }
}

pub fn use_activity_log() -> Signal<ActivityLog> {
    use_context::<Signal<ActivityLog>>()
}

pub fn log_activity(log: &mut Signal<ActivityLog>, level: LogLevel, message: &str) {
    let ts = current_time();
    log.write().push(ts, level, message);
}

#[cfg(target_arch = "wasm32")]
fn current_time() -> String {
    let date = js_sys::Date::new_0();
    let h = date.get_hours();
    let m = date.get_minutes();
    let s = date.get_seconds();
    format!("{h:02}:{m:02}:{s:02}")
}

#[cfg(not(target_arch = "wasm32"))]
fn current_time() -> String {
    "00:00:00".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_caps_entries() {
        let mut log = ActivityLog::default();
        for i in 0..MAX_ENTRIES + 5 {
            log.push("00:00:00".to_string(), LogLevel::Success, &format!("entry {i}"));
        }
        assert_eq!(log.entries.len(), MAX_ENTRIES);
        assert_eq!(log.entries[0].message, "entry 5");
    }

    #[test]
    fn test_error_count() {
        let mut log = ActivityLog::default();
        log.push("t".to_string(), LogLevel::Error, "boom");
        log.push("t".to_string(), LogLevel::Success, "ok");
        log.push("t".to_string(), LogLevel::Error, "again");
        log.push("t".to_string(), LogLevel::Warning, "page closed");
        assert_eq!(log.error_count(), 2);
    }
}
