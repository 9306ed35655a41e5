//! Shred command (secure delete)

use diskclean_core::{Context, Outcome, secure_delete};
use std::path::Path;

/// Zero-overwrite and remove `file`. With `dry_run` the file is left alone and
/// nothing is written to the audit log.
pub fn shred(ctx: &Context, file: &Path, dry_run: bool) -> Outcome {
    if dry_run {
        ctx.reporter.info(&format!("Would securely delete {}", file.display()));
        return Outcome::Simulated;
    }
    secure_delete(ctx, file)
}
