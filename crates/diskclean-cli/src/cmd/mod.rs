//! Command implementations.

pub mod age;
pub mod menu;
pub mod shred;
pub mod size;

use crate::Cli;
use crate::ui::Output;
use anyhow::{Context as _, Result};
use diskclean_core::{Config, Context, Overrides};
use std::sync::Arc;

/// Resolve configuration and build the cleanup context for a CLI invocation.
pub fn build_context(cli: &Cli) -> Result<Context> {
    let overrides = Overrides {
        log_file: cli.log_file.clone(),
    };
    let config = Config::load(cli.config.as_deref(), &overrides)
        .context("Failed to load configuration")?;
    tracing::debug!("Audit log: {}", config.log_file.display());

    let reporter = Arc::new(Output::with_quiet(cli.quiet));
    Ok(Context::from_config(&config, reporter))
}
