//! Configuration.
//!
//! Values are resolved in three layers: built-in defaults, an optional TOML file
//! (`~/.diskclean/config.toml` unless a path is given), and explicit overrides
//! from the command line or environment.

use crate::error::ConfigError;
use crate::paths::{DEFAULT_LOG_FILE, config_path};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default secure-delete zero buffer size (64 KiB).
pub const DEFAULT_CHUNK_SIZE: usize = 64 * 1024;

/// Resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Audit log file.
    pub log_file: PathBuf,
    /// Secure-delete zero buffer size in bytes.
    pub chunk_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

/// On-disk shape of the config file. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    log_file: Option<PathBuf>,
    chunk_size: Option<usize>,
}

/// Explicit overrides, typically from CLI flags or environment variables.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// Replaces the configured audit log file.
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Load from `path`, or from the default location when `path` is `None`.
    ///
    /// A missing file yields defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file exists but is unreadable or malformed.
    pub fn load(path: Option<&Path>, overrides: &Overrides) -> Result<Self, ConfigError> {
        let path = path.map(Path::to_path_buf).or_else(config_path);
        let mut config = match path {
            Some(p) if p.exists() => Self::from_file(&p)?,
            _ => Self::default(),
        };

        if let Some(log_file) = &overrides.log_file {
            config.log_file.clone_from(log_file);
        }

        Ok(config)
    }

    /// Parse a config file on top of the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&raw).map_err(|e| match e {
            ParseFailure::Toml(source) => ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            },
            ParseFailure::Invalid(msg) => ConfigError::Invalid(msg),
        })
    }

    fn parse(raw: &str) -> Result<Self, ParseFailure> {
        let file: ConfigFile = toml::from_str(raw).map_err(ParseFailure::Toml)?;
        let mut config = Self::default();

        if let Some(log_file) = file.log_file {
            config.log_file = log_file;
        }
        if let Some(chunk_size) = file.chunk_size {
            if chunk_size == 0 {
                return Err(ParseFailure::Invalid(
                    "chunk_size must be greater than zero".to_string(),
                ));
            }
            config.chunk_size = chunk_size;
        }

        tracing::debug!("Loaded config: {config:?}");
        Ok(config)
    }
}

enum ParseFailure {
    Toml(toml::de::Error),
    Invalid(String),
}
