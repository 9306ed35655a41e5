//! Selection policy: pure predicates over a [`DirectoryEntry`].

use crate::types::{Criterion, DirectoryEntry};
use chrono::{DateTime, Local};

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// True iff `entry.size > threshold`. Equal sizes are not selected.
pub fn exceeds_size(entry: &DirectoryEntry, threshold: u64) -> bool {
    entry.size > threshold
}

/// Age of `entry` in fractional days relative to `now`.
///
/// Negative when the entry is timestamped in the future.
pub fn age_in_days(entry: &DirectoryEntry, now: DateTime<Local>) -> f64 {
    let elapsed = now.signed_duration_since(entry.last_modified);
    elapsed.num_milliseconds() as f64 / MILLIS_PER_DAY
}

/// True iff the entry is strictly older than `threshold_days` at `now`.
pub fn exceeds_age(entry: &DirectoryEntry, threshold_days: u32, now: DateTime<Local>) -> bool {
    age_in_days(entry, now) > f64::from(threshold_days)
}

impl Criterion {
    /// Whether `entry` qualifies for deletion. Directories never do.
    pub fn matches(&self, entry: &DirectoryEntry) -> bool {
        if entry.is_dir {
            return false;
        }
        match *self {
            Self::BySize { bytes } => exceeds_size(entry, bytes),
            Self::ByAge {
                days,
                reference_time,
            } => exceeds_age(entry, days, reference_time),
        }
    }
}
