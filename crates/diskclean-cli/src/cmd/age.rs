//! Age command

use diskclean_core::{Context, ScanSummary, cleanup_by_date};
use std::path::Path;

/// Delete (or simulate deleting) files in `dir` older than `days`.
pub fn age(ctx: &Context, dir: &Path, days: u32, dry_run: bool) -> ScanSummary {
    let verb = if dry_run { "Simulating cleanup of" } else { "Cleaning" };
    let unit = if days == 1 { "day" } else { "days" };
    ctx.reporter.info(&format!(
        "{verb} {}: files older than {days} {unit}",
        dir.display()
    ));

    let summary = cleanup_by_date(ctx, dir, days, dry_run);
    ctx.reporter.summary(&summary);
    summary
}
