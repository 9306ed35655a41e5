//! Size command

use crate::ui::output::describe_threshold;
use diskclean_core::{Context, ScanSummary, cleanup_by_size};
use std::path::Path;

/// Delete (or simulate deleting) files in `dir` larger than `bytes`.
pub fn size(ctx: &Context, dir: &Path, bytes: u64, dry_run: bool) -> ScanSummary {
    let verb = if dry_run { "Simulating cleanup of" } else { "Cleaning" };
    ctx.reporter.info(&format!(
        "{verb} {}: files larger than {}",
        dir.display(),
        describe_threshold(bytes)
    ));

    let summary = cleanup_by_size(ctx, dir, bytes, dry_run);
    ctx.reporter.summary(&summary);
    summary
}
