//! Directory listing.
//!
//! Only the immediate children of one directory are produced. A directory that
//! cannot be opened yields an empty listing rather than an error.

use crate::types::DirectoryEntry;
use chrono::{DateTime, Local};
use std::fs;
use std::path::{Path, PathBuf};

/// Lazy, one-shot iterator over a directory's immediate children.
///
/// Iterating twice requires two calls to [`list`].
#[derive(Debug)]
pub struct Listing {
    dir: PathBuf,
    inner: Option<fs::ReadDir>,
}

/// List the immediate children of `dir`.
pub fn list(dir: &Path) -> Listing {
    let inner = match fs::read_dir(dir) {
        Ok(read_dir) => Some(read_dir),
        Err(e) => {
            tracing::debug!("Cannot list {}: {e}", dir.display());
            None
        }
    };

    Listing {
        dir: dir.to_path_buf(),
        inner,
    }
}

impl Iterator for Listing {
    type Item = DirectoryEntry;

    fn next(&mut self) -> Option<Self::Item> {
        let read_dir = self.inner.as_mut()?;

        for dirent in read_dir.by_ref() {
            let dirent = match dirent {
                Ok(d) => d,
                Err(e) => {
                    tracing::debug!("Skipping unreadable entry in {}: {e}", self.dir.display());
                    continue;
                }
            };

            // Link metadata, not the target's: a symlink is never a directory here.
            let metadata = match dirent.metadata() {
                Ok(m) => m,
                Err(e) => {
                    tracing::debug!("Skipping {}: {e}", dirent.path().display());
                    continue;
                }
            };

            let last_modified = metadata
                .modified()
                .map(DateTime::<Local>::from)
                .unwrap_or_default();

            return Some(DirectoryEntry {
                name: dirent.file_name().to_string_lossy().into_owned(),
                path: self.dir.join(dirent.file_name()),
                size: metadata.len(),
                last_modified,
                is_dir: metadata.is_dir(),
            });
        }

        self.inner = None;
        None
    }
}
