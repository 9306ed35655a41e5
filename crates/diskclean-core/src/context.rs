//! Shared cleanup context.
//!
//! This module defines the `Context` struct, which groups the injected
//! collaborators used by the orchestrator and the destroyer to reduce
//! argument fatigue.

use crate::audit::{AuditSink, FileAuditLog};
use crate::config::{Config, DEFAULT_CHUNK_SIZE};
use crate::destroyer::{FsRemover, Remover};
use crate::reporter::Reporter;
use std::fmt;
use std::sync::Arc;

/// Groups common state used during cleanup operations.
#[derive(Clone)]
pub struct Context {
    /// Where audit records go.
    pub audit: Arc<dyn AuditSink>,
    /// Where progress lines go.
    pub reporter: Arc<dyn Reporter>,
    /// Unlinks files on behalf of delete and secure delete.
    pub remover: Arc<dyn Remover>,
    /// Size of the zero buffer used by secure delete.
    pub chunk_size: usize,
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("chunk_size", &self.chunk_size)
            .finish_non_exhaustive()
    }
}

impl Context {
    /// Build a context with the default chunk size.
    pub fn new(audit: Arc<dyn AuditSink>, reporter: Arc<dyn Reporter>) -> Self {
        Self {
            audit,
            reporter,
            remover: Arc::new(FsRemover),
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }

    /// Build a context from resolved configuration, logging to the configured file.
    pub fn from_config(config: &Config, reporter: Arc<dyn Reporter>) -> Self {
        Self {
            audit: Arc::new(FileAuditLog::new(&config.log_file)),
            reporter,
            remover: Arc::new(FsRemover),
            chunk_size: config.chunk_size,
        }
    }

    /// Override the secure-delete chunk size. Zero is clamped to one byte.
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    /// Replace the file removal primitive.
    pub fn with_remover(mut self, remover: Arc<dyn Remover>) -> Self {
        self.remover = remover;
        self
    }
}
