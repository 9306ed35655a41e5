//! Directory cleanup scans.
//!
//! A scan lists one directory once, evaluates the criterion against every
//! non-directory entry, and for each selected entry runs the destroyer, reports
//! progress and writes exactly one audit record. Per-entry failures never stop the
//! scan. Deletion and logging are not atomic: a crash between the two loses the
//! audit line for a file that is already gone.

use crate::context::Context;
use crate::destroyer;
use crate::lister;
use crate::types::{Action, Criterion, ScanSummary};
use std::path::Path;

/// Delete (or simulate deleting) files in `dir` larger than `byte_threshold`.
pub fn cleanup_by_size(
    ctx: &Context,
    dir: &Path,
    byte_threshold: u64,
    simulate: bool,
) -> ScanSummary {
    cleanup(
        ctx,
        dir,
        &Criterion::BySize {
            bytes: byte_threshold,
        },
        simulate,
    )
}

/// Delete (or simulate deleting) files in `dir` last modified more than
/// `day_threshold` days ago. "Now" is sampled once when the scan starts.
pub fn cleanup_by_date(
    ctx: &Context,
    dir: &Path,
    day_threshold: u32,
    simulate: bool,
) -> ScanSummary {
    cleanup(ctx, dir, &Criterion::by_age_now(day_threshold), simulate)
}

/// Run one scan of `dir` under `criterion`.
pub fn cleanup(ctx: &Context, dir: &Path, criterion: &Criterion, simulate: bool) -> ScanSummary {
    tracing::info!(
        "Scanning {} ({criterion:?}, simulate={simulate})",
        dir.display()
    );

    let mut summary = ScanSummary::default();

    for entry in lister::list(dir).filter(|e| !e.is_dir) {
        summary.examined += 1;
        if !criterion.matches(&entry) {
            continue;
        }

        let outcome = destroyer::destroy(ctx, &entry.path, simulate);
        let detail = criterion.describe(&entry);

        ctx.reporter.selected(&entry.path, &detail, &outcome);
        ctx.audit.record_action(
            Action::for_scan(criterion, &outcome),
            &entry.path.display().to_string(),
        );

        summary.record(&outcome);
    }

    tracing::debug!("Scan of {} finished: {summary:?}", dir.display());
    summary
}
