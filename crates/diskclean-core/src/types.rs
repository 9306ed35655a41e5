//! Core data types shared by the lister, policy, destroyer and orchestrator.

use crate::error::DestroyError;
use chrono::{DateTime, Local};
use std::fmt;
use std::path::PathBuf;

/// A single immediate child of a scanned directory.
///
/// Entries are produced fresh by each listing step and are not retained once the
/// orchestrator has processed them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// File name without the directory prefix.
    pub name: String,
    /// Directory joined with `name`.
    pub path: PathBuf,
    /// Size in bytes as reported by the filesystem.
    pub size: u64,
    /// Last write time, converted to local time.
    pub last_modified: DateTime<Local>,
    /// True when the entry is itself a directory.
    pub is_dir: bool,
}

/// The rule used to decide whether an entry qualifies for deletion in one scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Criterion {
    /// Select files strictly larger than `bytes`.
    BySize {
        /// Byte threshold.
        bytes: u64,
    },
    /// Select files last modified strictly more than `days` before `reference_time`.
    ByAge {
        /// Day threshold.
        days: u32,
        /// The "now" every entry's age is measured against.
        reference_time: DateTime<Local>,
    },
}

impl Criterion {
    /// Age criterion measured against the current local time.
    pub fn by_age_now(days: u32) -> Self {
        Self::ByAge {
            days,
            reference_time: Local::now(),
        }
    }

    /// Human-readable description of how `entry` relates to this criterion,
    /// e.g. `1000 bytes` or `Last Modified: 12 days ago`.
    pub fn describe(&self, entry: &DirectoryEntry) -> String {
        match self {
            Self::BySize { .. } => format!("{} bytes", entry.size),
            Self::ByAge { reference_time, .. } => {
                let days = crate::policy::age_in_days(entry, *reference_time);
                format!("Last Modified: {} days ago", days as i64)
            }
        }
    }
}

/// What happened to one selected entry.
#[derive(Debug)]
pub enum Outcome {
    /// The file was removed.
    Deleted,
    /// Simulate mode: nothing was touched.
    Simulated,
    /// The destructive step failed; the scan continues with the next entry.
    Failed(DestroyError),
}

impl Outcome {
    /// True for [`Outcome::Failed`].
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Deleted => write!(f, "deleted"),
            Self::Simulated => write!(f, "simulated"),
            Self::Failed(reason) => write!(f, "failed: {reason}"),
        }
    }
}

/// Closed set of audit-log labels.
///
/// Size and date scans use distinct labels so an operator can tell from the log
/// which pass touched a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Size scan, simulate mode.
    SimulatedDeletion,
    /// Size scan, file removed.
    Deleted,
    /// Size scan, removal failed.
    FailedToDelete,
    /// Date scan, simulate mode.
    SimulatedDeletionByDate,
    /// Date scan, file removed.
    DeletedByDate,
    /// Date scan, removal failed.
    FailedToDeleteByDate,
    /// Secure delete finished.
    SecurelyDeleted,
    /// Secure delete could not open, overwrite or remove the file.
    FailedToSecurelyDelete,
}

impl Action {
    /// Label written to the audit log.
    pub fn label(self) -> &'static str {
        match self {
            Self::SimulatedDeletion => "Simulated deletion",
            Self::Deleted => "Deleted",
            Self::FailedToDelete => "Failed to delete",
            Self::SimulatedDeletionByDate => "Simulated deletion by date",
            Self::DeletedByDate => "Deleted by date",
            Self::FailedToDeleteByDate => "Failed to delete by date",
            Self::SecurelyDeleted => "Securely deleted",
            Self::FailedToSecurelyDelete => "Failed to securely delete",
        }
    }

    /// Label for a scan outcome under the given criterion.
    pub fn for_scan(criterion: &Criterion, outcome: &Outcome) -> Self {
        match (criterion, outcome) {
            (Criterion::BySize { .. }, Outcome::Simulated) => Self::SimulatedDeletion,
            (Criterion::BySize { .. }, Outcome::Deleted) => Self::Deleted,
            (Criterion::BySize { .. }, Outcome::Failed(_)) => Self::FailedToDelete,
            (Criterion::ByAge { .. }, Outcome::Simulated) => Self::SimulatedDeletionByDate,
            (Criterion::ByAge { .. }, Outcome::Deleted) => Self::DeletedByDate,
            (Criterion::ByAge { .. }, Outcome::Failed(_)) => Self::FailedToDeleteByDate,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Counters for one directory scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Non-directory entries the policy was evaluated against.
    pub examined: usize,
    /// Entries the policy selected.
    pub selected: usize,
    /// Selected entries that were removed.
    pub deleted: usize,
    /// Selected entries reported in simulate mode.
    pub simulated: usize,
    /// Selected entries whose removal failed.
    pub failed: usize,
}

impl ScanSummary {
    pub(crate) fn record(&mut self, outcome: &Outcome) {
        self.selected += 1;
        match outcome {
            Outcome::Deleted => self.deleted += 1,
            Outcome::Simulated => self.simulated += 1,
            Outcome::Failed(_) => self.failed += 1,
        }
    }
}
