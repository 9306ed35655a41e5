//! Reporter trait for dependency injection
//!
//! This trait allows core logic to report progress and status without
//! being coupled to a specific terminal implementation.

use crate::types::{Outcome, ScanSummary};
use std::path::Path;

/// Receives human-readable progress from scans and secure deletes.
pub trait Reporter: Send + Sync {
    /// A selected entry was processed. `detail` is the size or age description.
    fn selected(&self, path: &Path, detail: &str, outcome: &Outcome);

    /// Secure delete finished for `path`.
    fn secure_deleted(&self, path: &Path, outcome: &Outcome);

    /// Log an informational message.
    fn info(&self, msg: &str);

    /// Log a success message.
    fn success(&self, msg: &str);

    /// Log a warning message.
    fn warning(&self, msg: &str);

    /// Log an error message.
    fn error(&self, msg: &str);

    /// Display a final summary of one scan.
    fn summary(&self, summary: &ScanSummary);
}

impl<T: Reporter + ?Sized> Reporter for std::sync::Arc<T> {
    fn selected(&self, path: &Path, detail: &str, outcome: &Outcome) {
        (**self).selected(path, detail, outcome);
    }
    fn secure_deleted(&self, path: &Path, outcome: &Outcome) {
        (**self).secure_deleted(path, outcome);
    }
    fn info(&self, msg: &str) {
        (**self).info(msg);
    }
    fn success(&self, msg: &str) {
        (**self).success(msg);
    }
    fn warning(&self, msg: &str) {
        (**self).warning(msg);
    }
    fn error(&self, msg: &str) {
        (**self).error(msg);
    }
    fn summary(&self, summary: &ScanSummary) {
        (**self).summary(summary);
    }
}

/// A no-op reporter for silent operations (e.g., testing).
#[derive(Debug, Clone, Copy)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn selected(&self, _: &Path, _: &str, _: &Outcome) {}
    fn secure_deleted(&self, _: &Path, _: &Outcome) {}
    fn info(&self, _: &str) {}
    fn success(&self, _: &str) {}
    fn warning(&self, _: &str) {}
    fn error(&self, _: &str) {}
    fn summary(&self, _: &ScanSummary) {}
}
