//! diskclean - directory cleanup CLI

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use diskclean_cli::cmd;
use diskclean_cli::cmd::menu::Menu;
use diskclean_cli::{Cli, Commands};

fn main() -> Result<()> {
    // Diagnostics go to stderr; stdout is reserved for progress lines.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let ctx = cmd::build_context(&cli)?;
    let dry_run = cli.dry_run;

    match cli.command {
        Some(Commands::Size { dir, bytes }) => {
            cmd::size::size(&ctx, &dir, bytes, dry_run);
        }
        Some(Commands::Age { dir, days }) => {
            cmd::age::age(&ctx, &dir, days, dry_run);
        }
        Some(Commands::Shred { file }) => {
            cmd::shred::shred(&ctx, &file, dry_run);
        }
        Some(Commands::Menu) | None => {
            let stdin = std::io::stdin();
            Menu::new(stdin.lock(), std::io::stdout())
                .dry_run(dry_run)
                .run(&ctx)?;
        }
    }

    Ok(())
}
