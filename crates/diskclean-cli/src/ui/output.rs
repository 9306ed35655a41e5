//! Terminal output.
//!
//! `Output` is the terminal implementation of [`Reporter`]. Lines go straight to
//! stdout; there is no background rendering because every operation is synchronous.

use super::theme::{Icons, format_size};
use crossterm::style::Stylize;
use diskclean_core::{Outcome, Reporter, ScanSummary};
use std::path::Path;

/// Prints progress and status lines for commands.
#[derive(Debug, Clone, Default)]
pub struct Output {
    icons: Icons,
    quiet: bool,
}

impl Output {
    /// Create an output handle that suppresses informational lines.
    pub fn with_quiet(quiet: bool) -> Self {
        Self {
            icons: Icons::default(),
            quiet,
        }
    }

    /// Progress line for one selected entry. A failed entry shows the reason
    /// instead of the size or age detail.
    fn selected_line(&self, path: &Path, detail: &str, outcome: &Outcome) -> String {
        let path = path.display();
        match outcome {
            Outcome::Deleted => format!(
                "  {} {} {path} ({detail})",
                self.icons.success.green(),
                "Deleted:".green()
            ),
            Outcome::Simulated => format!(
                "  {} {} {path} ({detail})",
                self.icons.simulated.dark_grey(),
                "Simulated deletion:".dark_grey()
            ),
            Outcome::Failed(reason) => format!(
                "  {} {} {path} ({reason})",
                self.icons.error.red(),
                "Failed:".red()
            ),
        }
    }
}

impl Reporter for Output {
    fn selected(&self, path: &Path, detail: &str, outcome: &Outcome) {
        println!("{}", self.selected_line(path, detail, outcome));
    }

    fn secure_deleted(&self, path: &Path, outcome: &Outcome) {
        match outcome {
            Outcome::Failed(reason) => {
                self.error(&format!("Failed to securely delete {}: {reason}", path.display()));
            }
            Outcome::Deleted | Outcome::Simulated => {
                self.success(&format!("Securely deleted {}", path.display()));
            }
        }
    }

    fn info(&self, msg: &str) {
        if !self.quiet {
            println!("  {} {msg}", self.icons.info);
        }
    }

    fn success(&self, msg: &str) {
        println!("{} {}", self.icons.success.green(), msg.green());
    }

    fn warning(&self, msg: &str) {
        println!("{} {}", self.icons.warning.yellow(), msg.yellow());
    }

    fn error(&self, msg: &str) {
        println!("{} {}", self.icons.error.red(), msg.red());
    }

    fn summary(&self, summary: &ScanSummary) {
        if summary.selected == 0 {
            self.info(&format!(
                "No matching files ({} examined)",
                summary.examined
            ));
            return;
        }

        let msg = format!(
            "{} selected: {} deleted, {} simulated, {} failed",
            summary.selected, summary.deleted, summary.simulated, summary.failed
        );
        if summary.failed > 0 {
            self.warning(&msg);
        } else {
            self.success(&msg);
        }
    }
}

/// Describe a byte threshold for prompts and headers, e.g. `1.5 KB (1536 bytes)`.
pub fn describe_threshold(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{bytes} bytes")
    } else {
        format!("{} ({bytes} bytes)", format_size(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use diskclean_core::DestroyError;
    use std::io;

    #[test]
    fn test_failed_entry_line_shows_reason() {
        let output = Output::with_quiet(true);
        let path = Path::new("/tmp/locked.bin");
        let failed = Outcome::Failed(DestroyError::Delete(io::Error::new(
            io::ErrorKind::PermissionDenied,
            "refused",
        )));

        let line = output.selected_line(path, "1000 bytes", &failed);
        assert!(line.contains("Failed:"));
        assert!(line.contains("/tmp/locked.bin"));
        assert!(line.contains("delete failed: refused"));
        assert!(!line.contains("1000 bytes"));

        let line = output.selected_line(path, "1000 bytes", &Outcome::Deleted);
        assert!(line.contains("Deleted:"));
        assert!(line.contains("(1000 bytes)"));
    }

    #[test]
    fn test_describe_threshold() {
        assert_eq!(describe_threshold(500), "500 bytes");
        assert_eq!(describe_threshold(1536), "1.5 KB (1536 bytes)");
    }
}
