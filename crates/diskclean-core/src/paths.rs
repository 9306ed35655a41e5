//! Well-known locations.

use dirs::home_dir;
use std::path::PathBuf;

/// Environment variable overriding the diskclean home directory.
pub const HOME_ENV: &str = "DISKCLEAN_HOME";

/// Default audit log file name, relative to the working directory.
pub const DEFAULT_LOG_FILE: &str = "cleanup_log.txt";

/// Returns the diskclean home directory, or None if the user's home cannot be resolved.
pub fn try_diskclean_home() -> Option<PathBuf> {
    if let Ok(val) = std::env::var(HOME_ENV) {
        return Some(PathBuf::from(val));
    }
    home_dir().map(|h| h.join(".diskclean"))
}

/// Config file path: ~/.diskclean/config.toml
pub fn config_path() -> Option<PathBuf> {
    try_diskclean_home().map(|h| h.join("config.toml"))
}
