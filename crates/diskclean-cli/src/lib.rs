//! diskclean - directory cleanup by size or age, plus secure delete
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]
//!
//! # Overview
//!
//! diskclean scans the immediate children of one directory and deletes files that
//! are larger than a byte threshold or older than a day threshold. Every action is
//! appended to a plain-text audit log. A `--dry-run` mode reports what would be
//! deleted without touching anything, and `shred` zero-overwrites a single file
//! before removing it.
//!
//! Run without a subcommand to get the interactive numbered menu.

pub mod cmd;
pub mod ui;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "diskclean")]
#[command(author, version, about = "diskclean - clean a directory by file size or age")]
#[command(long_about = None)]
pub struct Cli {
    /// Show what would be deleted without deleting anything
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Audit log file (default: cleanup_log.txt in the working directory)
    #[arg(long, global = true, env = "DISKCLEAN_LOG")]
    pub log_file: Option<PathBuf>,

    /// Config file (default: ~/.diskclean/config.toml)
    #[arg(long, global = true, env = "DISKCLEAN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Action to run; the interactive menu when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Delete files larger than a size threshold
    Size {
        /// Directory to scan (immediate children only)
        dir: PathBuf,
        /// Size threshold in bytes; files strictly larger are deleted
        bytes: u64,
    },
    /// Delete files older than a number of days
    Age {
        /// Directory to scan (immediate children only)
        dir: PathBuf,
        /// Age threshold in days; files strictly older are deleted
        days: u32,
    },
    /// Overwrite a file with zeros, then delete it
    Shred {
        /// File to destroy
        file: PathBuf,
    },
    /// Interactive numbered menu
    Menu,
}
