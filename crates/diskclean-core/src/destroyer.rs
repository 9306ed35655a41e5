//! Destructive operations: plain delete, simulated delete, and secure delete.
//!
//! Secure delete is a single zero pass over the file's existing length followed by
//! removal. The pass streams a fixed-size buffer and does not flush or sync before
//! the file is closed, so the wipe is best-effort rather than durable.

use crate::context::Context;
use crate::error::DestroyError;
use crate::types::{Action, Outcome};
use std::fs::{self, File, OpenOptions};
use std::io::{self, Seek, SeekFrom, Write};
use std::path::Path;

/// The filesystem primitive that unlinks a single file.
pub trait Remover: Send + Sync {
    /// Remove the file at `path`.
    fn remove_file(&self, path: &Path) -> io::Result<()>;
}

/// Removes files with [`std::fs::remove_file`].
#[derive(Debug, Default, Clone, Copy)]
pub struct FsRemover;

impl Remover for FsRemover {
    fn remove_file(&self, path: &Path) -> io::Result<()> {
        fs::remove_file(path)
    }
}

/// Remove `path` unless `simulate` is set. A single attempt, no retry.
pub fn destroy(ctx: &Context, path: &Path, simulate: bool) -> Outcome {
    if simulate {
        tracing::trace!("Simulating removal of {}", path.display());
        return Outcome::Simulated;
    }
    delete(ctx, path)
}

/// Remove `path`.
pub fn delete(ctx: &Context, path: &Path) -> Outcome {
    match ctx.remover.remove_file(path) {
        Ok(()) => Outcome::Deleted,
        Err(e) => {
            tracing::debug!("Failed to remove {}: {e}", path.display());
            Outcome::Failed(DestroyError::Delete(e))
        }
    }
}

/// Overwrite the file's current contents with zeros, `chunk_size` bytes at a time.
///
/// The length is measured by seeking to the end; the file is neither extended nor
/// truncated. Returns the number of bytes overwritten.
pub fn zero_fill(file: &mut File, chunk_size: usize) -> io::Result<u64> {
    let len = file.seek(SeekFrom::End(0))?;
    file.rewind()?;
    if len == 0 {
        return Ok(0);
    }

    let chunk_len = chunk_size.clamp(1, usize::try_from(len).unwrap_or(usize::MAX));
    let zeros = vec![0u8; chunk_len];
    let mut remaining = len;
    while remaining > 0 {
        let n = usize::try_from(remaining).map_or(chunk_len, |r| r.min(chunk_len));
        file.write_all(&zeros[..n])?;
        remaining -= n as u64;
    }

    Ok(len)
}

/// Zero-overwrite then remove a single named file, recording exactly one audit entry.
///
/// If the file cannot be opened nothing is touched. If the overwrite fails part way
/// the file is still closed and removal is still attempted, but the action is
/// reported as failed.
pub fn secure_delete(ctx: &Context, path: &Path) -> Outcome {
    let outcome = wipe_and_remove(ctx, path);

    let action = if outcome.is_failure() {
        Action::FailedToSecurelyDelete
    } else {
        Action::SecurelyDeleted
    };
    ctx.audit.record_action(action, &path.display().to_string());
    ctx.reporter.secure_deleted(path, &outcome);

    outcome
}

fn wipe_and_remove(ctx: &Context, path: &Path) -> Outcome {
    let mut file = match OpenOptions::new().read(true).write(true).open(path) {
        Ok(f) => f,
        Err(e) => {
            tracing::debug!("Cannot open {} for overwrite: {e}", path.display());
            return Outcome::Failed(DestroyError::Open(e));
        }
    };

    let overwrite = zero_fill(&mut file, ctx.chunk_size);
    drop(file);

    match overwrite {
        Ok(bytes) => tracing::debug!("Zeroed {bytes} bytes of {}", path.display()),
        Err(e) => {
            tracing::warn!("Overwrite of {} failed: {e}", path.display());
            // Best-effort wipe: removal still goes ahead.
            if let Err(e) = ctx.remover.remove_file(path) {
                tracing::debug!("Failed to remove {}: {e}", path.display());
            }
            return Outcome::Failed(DestroyError::Overwrite(e));
        }
    }

    delete(ctx, path)
}
