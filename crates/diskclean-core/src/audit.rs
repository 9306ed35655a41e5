//! Audit log sinks.
//!
//! Every attempted action produces one line of the form
//! `[YYYY-MM-DD HH:MM:SS] <label>: <detail>`. Sinks must never fail the operation
//! they describe, so [`AuditSink::record`] has no error path.

use crate::types::Action;
use chrono::{DateTime, Local};
use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Timestamp format used in every audit line.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One audit record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEntry {
    /// When the record was made.
    pub timestamp: DateTime<Local>,
    /// Action label, see [`Action::label`].
    pub action: String,
    /// Free text, usually the affected path.
    pub detail: String,
}

impl AuditEntry {
    /// Stamp a new entry with the current local time.
    pub fn now(action: &str, detail: &str) -> Self {
        Self {
            timestamp: Local::now(),
            action: action.to_string(),
            detail: detail.to_string(),
        }
    }
}

impl fmt::Display for AuditEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.action,
            self.detail
        )
    }
}

/// Destination for audit records.
pub trait AuditSink: Send + Sync {
    /// Append one record. Failures are swallowed by the implementation.
    fn record(&self, action: &str, detail: &str);

    /// Append one record for a known [`Action`].
    fn record_action(&self, action: Action, detail: &str) {
        self.record(action.label(), detail);
    }
}

impl<T: AuditSink + ?Sized> AuditSink for std::sync::Arc<T> {
    fn record(&self, action: &str, detail: &str) {
        (**self).record(action, detail);
    }
}

/// Appends to a text file, opening and closing it on every record.
///
/// No handle is held between calls, so external readers and log rotation by
/// other tools are unaffected.
#[derive(Debug, Clone)]
pub struct FileAuditLog {
    path: PathBuf,
}

impl FileAuditLog {
    /// Log to `path`, created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn append(&self, line: &str) -> std::io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{line}")
    }
}

impl AuditSink for FileAuditLog {
    fn record(&self, action: &str, detail: &str) {
        let entry = AuditEntry::now(action, detail);
        if let Err(e) = self.append(&entry.to_string()) {
            tracing::warn!("Audit log {} not writable: {e}", self.path.display());
        }
    }
}

/// Keeps records in memory.
#[derive(Debug, Default)]
pub struct MemoryAuditLog {
    entries: Mutex<Vec<AuditEntry>>,
}

impl MemoryAuditLog {
    /// Empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far.
    pub fn entries(&self) -> Vec<AuditEntry> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }

    /// Number of records with the given action label.
    pub fn count(&self, action: Action) -> usize {
        self.entries()
            .iter()
            .filter(|e| e.action == action.label())
            .count()
    }

    /// Total number of records.
    pub fn len(&self) -> usize {
        self.entries.lock().map(|entries| entries.len()).unwrap_or(0)
    }

    /// True when nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl AuditSink for MemoryAuditLog {
    fn record(&self, action: &str, detail: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push(AuditEntry::now(action, detail));
        }
    }
}

/// Discards every record.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAuditLog;

impl AuditSink for NullAuditLog {
    fn record(&self, _: &str, _: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_entry_format() {
        let entry = AuditEntry {
            timestamp: Local
                .with_ymd_and_hms(2024, 3, 9, 7, 5, 1)
                .single()
                .expect("valid time"),
            action: "Deleted".into(),
            detail: "/tmp/b.txt".into(),
        };

        assert_eq!(entry.to_string(), "[2024-03-09 07:05:01] Deleted: /tmp/b.txt");
    }

    #[test]
    fn test_file_log_appends_one_line_per_record() {
        let dir = tempfile::tempdir().expect("tempdir");
        let log = FileAuditLog::new(dir.path().join("cleanup_log.txt"));

        log.record_action(Action::Deleted, "a");
        log.record_action(Action::FailedToDelete, "b");

        let contents = std::fs::read_to_string(log.path()).expect("read log");
        let lines: Vec<_> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with('['));
        assert!(lines[0].ends_with("] Deleted: a"));
        assert!(lines[1].ends_with("] Failed to delete: b"));
        assert!(contents.ends_with('\n'));
    }

    #[test]
    fn test_file_log_failure_is_swallowed() {
        let dir = tempfile::tempdir().expect("tempdir");
        // Parent directory does not exist, so open fails.
        let log = FileAuditLog::new(dir.path().join("missing").join("log.txt"));

        log.record("Deleted", "x");

        assert!(!log.path().exists());
    }

    #[test]
    fn test_memory_log_counts_by_action() {
        let log = MemoryAuditLog::new();
        assert!(log.is_empty());

        log.record_action(Action::SimulatedDeletion, "a");
        log.record_action(Action::SimulatedDeletion, "b");
        log.record_action(Action::Deleted, "c");

        assert_eq!(log.len(), 3);
        assert_eq!(log.count(Action::SimulatedDeletion), 2);
        assert_eq!(log.count(Action::Deleted), 1);
        assert_eq!(log.entries()[2].detail, "c");
    }
}
