//! diskclean core
//!
//! File selection and destruction pipeline for one directory at a time.
//!
//! # Architecture
//!
//! - **Lister** ([`lister::list`]): lazy listing of a directory's immediate children.
//! - **Policy** ([`policy`]): strict size and age predicates.
//! - **Destroyer** ([`destroyer`]): simulate, delete, or zero-overwrite then delete.
//! - **Audit** ([`audit::AuditSink`]): one timestamped line per attempted action.
//! - **Orchestrator** ([`orchestrator`]): composes the above for a whole directory.
//!
//! Collaborators are injected through [`Context`], so tests swap the file-backed
//! audit log for [`audit::MemoryAuditLog`] and the terminal output for
//! [`reporter::NullReporter`].

pub mod audit;
pub mod config;
pub mod context;
pub mod destroyer;
pub mod error;
pub mod lister;
pub mod orchestrator;
pub mod paths;
pub mod policy;
pub mod reporter;
pub mod types;

pub use audit::{AuditEntry, AuditSink, FileAuditLog, MemoryAuditLog, NullAuditLog};
pub use config::{Config, Overrides};
pub use context::Context;
pub use destroyer::{FsRemover, Remover, secure_delete};
pub use error::{ConfigError, DestroyError};
pub use orchestrator::{cleanup, cleanup_by_date, cleanup_by_size};
pub use reporter::{NullReporter, Reporter};
pub use types::{Action, Criterion, DirectoryEntry, Outcome, ScanSummary};
