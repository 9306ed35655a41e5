//! Interactive numbered menu
//!
//! Reads choices, paths and thresholds line by line. End of input behaves like
//! choosing "Exit". Bad numbers print a message and show the menu again. In
//! dry-run mode every option only simulates.

use super::{age, shred, size};
use anyhow::Result;
use diskclean_core::Context;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;

const BANNER: &str = "\
Disk Cleanup Utility - Advanced
================================
1. Clean files larger than a size
2. Clean files older than a date
3. Secure delete a file
4. Simulate cleanup
5. Exit
";

/// One of the five menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Size cleanup.
    BySize,
    /// Age cleanup.
    ByAge,
    /// Secure delete of one file.
    SecureDelete,
    /// Size cleanup in simulate mode.
    Simulate,
    /// Leave the menu.
    Exit,
}

/// Input that is not one of the five menu numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidChoice;

impl FromStr for MenuChoice {
    type Err = InvalidChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<u32>() {
            Ok(1) => Ok(Self::BySize),
            Ok(2) => Ok(Self::ByAge),
            Ok(3) => Ok(Self::SecureDelete),
            Ok(4) => Ok(Self::Simulate),
            Ok(5) => Ok(Self::Exit),
            _ => Err(InvalidChoice),
        }
    }
}

/// Menu loop over any line source and prompt sink.
#[derive(Debug)]
pub struct Menu<R, W> {
    input: R,
    prompt: W,
    dry_run: bool,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    /// Create a menu reading from `input` and writing prompts to `prompt`.
    pub fn new(input: R, prompt: W) -> Self {
        Self {
            input,
            prompt,
            dry_run: false,
        }
    }

    /// Simulate every destructive option instead of running it.
    #[must_use]
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Run until "Exit" or end of input.
    pub fn run(&mut self, ctx: &Context) -> Result<()> {
        loop {
            write!(self.prompt, "{BANNER}Choose an option: ")?;
            self.prompt.flush()?;

            let Some(line) = self.read_line()? else {
                break;
            };

            let Ok(choice) = line.parse::<MenuChoice>() else {
                writeln!(self.prompt, "Invalid option. Try again.")?;
                continue;
            };

            match choice {
                MenuChoice::BySize | MenuChoice::Simulate => {
                    let simulate = self.dry_run || choice == MenuChoice::Simulate;
                    let Some(dir) = self.ask_path("Enter directory path: ")? else {
                        break;
                    };
                    let question = if simulate {
                        "Enter size threshold in bytes (simulation): "
                    } else {
                        "Enter size threshold in bytes: "
                    };
                    match self.ask_number::<u64>(question)? {
                        Answer::Value(bytes) => {
                            size::size(ctx, &dir, bytes, simulate);
                        }
                        Answer::Invalid => continue,
                        Answer::Eof => break,
                    }
                }
                MenuChoice::ByAge => {
                    let Some(dir) = self.ask_path("Enter directory path: ")? else {
                        break;
                    };
                    match self.ask_number::<u32>("Enter days threshold: ")? {
                        Answer::Value(days) => {
                            age::age(ctx, &dir, days, self.dry_run);
                        }
                        Answer::Invalid => continue,
                        Answer::Eof => break,
                    }
                }
                MenuChoice::SecureDelete => {
                    let Some(file) = self.ask_path("Enter file path for secure delete: ")? else {
                        break;
                    };
                    shred::shred(ctx, &file, self.dry_run);
                }
                MenuChoice::Exit => break,
            }
        }

        writeln!(self.prompt, "Exiting program.")?;
        Ok(())
    }

    /// Next input line without its line terminator, or `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    fn ask_path(&mut self, question: &str) -> Result<Option<PathBuf>> {
        write!(self.prompt, "{question}")?;
        self.prompt.flush()?;
        Ok(self.read_line()?.map(PathBuf::from))
    }

    fn ask_number<T: FromStr>(&mut self, question: &str) -> Result<Answer<T>> {
        write!(self.prompt, "{question}")?;
        self.prompt.flush()?;
        let Some(line) = self.read_line()? else {
            return Ok(Answer::Eof);
        };
        if let Ok(value) = line.trim().parse::<T>() {
            Ok(Answer::Value(value))
        } else {
            writeln!(self.prompt, "Invalid number: '{}'", line.trim())?;
            Ok(Answer::Invalid)
        }
    }
}

enum Answer<T> {
    Value(T),
    Invalid,
    Eof,
}

#[cfg(test)]
mod tests {
    use super::*;
    use diskclean_core::{Action, MemoryAuditLog, NullReporter};
    use std::fs;
    use std::io::Cursor;
    use std::sync::Arc;
    use std::time::{Duration, SystemTime};

    fn memory_ctx() -> (Context, Arc<MemoryAuditLog>) {
        let log = Arc::new(MemoryAuditLog::new());
        let ctx = Context::new(log.clone(), Arc::new(NullReporter));
        (ctx, log)
    }

    fn run_script(ctx: &Context, script: &str) -> String {
        run_script_with(ctx, script, false)
    }

    fn run_script_with(ctx: &Context, script: &str, dry_run: bool) -> String {
        let mut prompt = Vec::new();
        Menu::new(Cursor::new(script.as_bytes()), &mut prompt)
            .dry_run(dry_run)
            .run(ctx)
            .expect("menu run");
        String::from_utf8(prompt).expect("utf8 prompt")
    }

    #[test]
    fn test_choice_parsing() {
        assert_eq!("1".parse::<MenuChoice>(), Ok(MenuChoice::BySize));
        assert_eq!(" 4 ".parse::<MenuChoice>(), Ok(MenuChoice::Simulate));
        assert_eq!("5".parse::<MenuChoice>(), Ok(MenuChoice::Exit));
        assert!("0".parse::<MenuChoice>().is_err());
        assert!("six".parse::<MenuChoice>().is_err());
    }

    #[test]
    fn test_exit_option() {
        let (ctx, log) = memory_ctx();
        let out = run_script(&ctx, "5\n");

        assert!(out.contains("1. Clean files larger than a size"));
        assert!(out.ends_with("Exiting program.\n"));
        assert!(log.is_empty());
    }

    #[test]
    fn test_eof_exits() {
        let (ctx, _log) = memory_ctx();
        let out = run_script(&ctx, "");

        assert!(out.ends_with("Exiting program.\n"));
    }

    #[test]
    fn test_invalid_option_redisplays_menu() {
        let (ctx, _log) = memory_ctx();
        let out = run_script(&ctx, "9\nabc\n5\n");

        assert_eq!(out.matches("Invalid option. Try again.").count(), 2);
        assert_eq!(out.matches("Choose an option: ").count(), 3);
    }

    #[test]
    fn test_size_cleanup_via_menu() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("a.txt"), vec![0u8; 10]).expect("a");
        fs::write(dir.path().join("b.txt"), vec![0u8; 1000]).expect("b");
        let (ctx, log) = memory_ctx();

        let script = format!("1\n{}\n500\n5\n", dir.path().display());
        run_script(&ctx, &script);

        assert!(dir.path().join("a.txt").exists());
        assert!(!dir.path().join("b.txt").exists());
        assert_eq!(log.count(Action::Deleted), 1);
    }

    #[test]
    fn test_simulate_via_menu() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("b.txt"), vec![0u8; 1000]).expect("b");
        let (ctx, log) = memory_ctx();

        let script = format!("4\n{}\n500\n5\n", dir.path().display());
        let out = run_script(&ctx, &script);

        assert!(out.contains("Enter size threshold in bytes (simulation): "));
        assert!(dir.path().join("b.txt").exists());
        assert_eq!(log.count(Action::SimulatedDeletion), 1);
    }

    #[test]
    fn test_age_cleanup_via_menu_keeps_fresh_files() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("fresh.txt"), b"new").expect("fresh");
        let (ctx, log) = memory_ctx();

        let script = format!("2\n{}\n1\n5\n", dir.path().display());
        run_script(&ctx, &script);

        assert!(dir.path().join("fresh.txt").exists());
        assert!(log.is_empty());
    }

    #[test]
    fn test_secure_delete_via_menu() {
        let dir = tempfile::tempdir().expect("tempdir");
        let file = dir.path().join("secret.txt");
        fs::write(&file, b"classified").expect("secret");
        let (ctx, log) = memory_ctx();

        let script = format!("3\n{}\n5\n", file.display());
        run_script(&ctx, &script);

        assert!(!file.exists());
        assert_eq!(log.count(Action::SecurelyDeleted), 1);
    }

    #[test]
    fn test_invalid_threshold_returns_to_menu() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("b.txt"), vec![0u8; 1000]).expect("b");
        let (ctx, log) = memory_ctx();

        let script = format!("1\n{}\nlots\n5\n", dir.path().display());
        let out = run_script(&ctx, &script);

        assert!(out.contains("Invalid number: 'lots'"));
        assert!(dir.path().join("b.txt").exists());
        assert!(log.is_empty());
    }

    #[test]
    fn test_path_keeps_inner_spaces() {
        let dir = tempfile::tempdir().expect("tempdir");
        let spaced = dir.path().join("with space");
        fs::create_dir(&spaced).expect("mkdir");
        fs::write(spaced.join("big"), vec![0u8; 64]).expect("big");
        let (ctx, log) = memory_ctx();

        let script = format!("1\r\n{}\r\n10\r\n5\r\n", spaced.display());
        run_script(&ctx, &script);

        assert!(!spaced.join("big").exists());
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_dry_run_menu_touches_nothing() {
        let dir = tempfile::tempdir().expect("tempdir");
        let big = dir.path().join("big.bin");
        let old = dir.path().join("old.log");
        let secret = dir.path().join("secret.txt");
        fs::write(&big, vec![0u8; 1000]).expect("big");
        fs::write(&old, b"old").expect("old");
        fs::write(&secret, b"classified").expect("secret");
        let ten_days = Duration::from_secs(86_400 * 10);
        fs::File::options()
            .write(true)
            .open(&old)
            .expect("open")
            .set_modified(SystemTime::now() - ten_days)
            .expect("set mtime");
        let (ctx, log) = memory_ctx();

        let script = format!(
            "1\n{dir}\n500\n2\n{dir}\n5\n3\n{secret}\n5\n",
            dir = dir.path().display(),
            secret = secret.display()
        );
        let out = run_script_with(&ctx, &script, true);

        assert!(out.contains("Enter size threshold in bytes (simulation): "));
        assert_eq!(fs::read(&big).expect("big kept"), vec![0u8; 1000]);
        assert!(old.exists());
        assert_eq!(fs::read(&secret).expect("secret kept"), b"classified");
        assert_eq!(log.count(Action::SimulatedDeletion), 1);
        assert_eq!(log.count(Action::SimulatedDeletionByDate), 1);
        assert_eq!(log.count(Action::Deleted), 0);
        assert_eq!(log.count(Action::DeletedByDate), 0);
        assert_eq!(log.count(Action::SecurelyDeleted), 0);
    }
}
