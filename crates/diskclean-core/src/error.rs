//! Domain-specific errors for cleanup operations

use std::path::PathBuf;
use thiserror::Error;

/// Why a destructive step failed for a single file.
///
/// Carried inside [`crate::Outcome::Failed`]; never escalated past the entry
/// it describes.
#[derive(Error, Debug)]
pub enum DestroyError {
    /// The remove primitive failed (permissions, in use, already gone).
    #[error("delete failed: {0}")]
    Delete(#[source] std::io::Error),

    /// Secure delete could not open the file for update.
    #[error("cannot open file for overwrite: {0}")]
    Open(#[source] std::io::Error),

    /// The zero pass failed part way; removal was still attempted.
    #[error("zero overwrite failed: {0}")]
    Overwrite(#[source] std::io::Error),
}

/// Errors raised while loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("failed to read config file {path}: {source}")]
    Read {
        /// Config file location.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for [`crate::Config`].
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        /// Config file location.
        path: PathBuf,
        /// Underlying TOML error.
        #[source]
        source: toml::de::Error,
    },

    /// A value parsed but is out of range.
    #[error("invalid config value: {0}")]
    Invalid(String),
}
