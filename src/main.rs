//! Hangman - CLI
//!
//! Terminal hangman with a full-screen TUI and a plain line-based mode.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hangman::{
    commands::{SimpleConfig, run_simple},
    core::{Difficulty, SecretWord, Session},
    interactive::{App, run_tui},
    wordlists::{RandomWordSource, WORDS, loader},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs::File;
use std::num::NonZeroU8;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Guess the secret word one letter at a time before the gallows is complete",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Difficulty tier; the simple mode asks when this is not given
    #[arg(short, long, global = true, value_enum)]
    difficulty: Option<Difficulty>,

    /// Wrong guesses allowed, overriding the tier's budget
    #[arg(short, long, global = true, value_parser = clap::value_parser!(u8).range(1..=26))]
    attempts: Option<u8>,

    /// Wordlist: 'all' (default, embedded list) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "all")]
    wordlist: String,

    /// Seed for reproducible word picks
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Write logs to this file (TUI default: hangman.log, simple mode default: stderr)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,
}

/// Load the word list based on the -w flag
fn load_words(wordlist_mode: &str) -> Result<Vec<SecretWord>> {
    match wordlist_mode {
        "all" => Ok(loader::words_from_slice(WORDS)),
        path => loader::load_from_file(path).with_context(|| format!("loading wordlist {path}")),
    }
}

/// Log file used by the TUI when `--log-file` is not given
const DEFAULT_TUI_LOG: &str = "hangman.log";

/// Where log lines are written
#[derive(Debug, Clone, PartialEq, Eq)]
enum LogTarget {
    File(PathBuf),
    Stderr,
}

/// The TUI owns the terminal, so its logs always go to a file
fn log_target(command: &Commands, log_file: Option<&Path>) -> LogTarget {
    match (log_file, command) {
        (Some(path), _) => LogTarget::File(path.to_path_buf()),
        (None, Commands::Play) => LogTarget::File(PathBuf::from(DEFAULT_TUI_LOG)),
        (None, Commands::Simple) => LogTarget::Stderr,
    }
}

fn init_logging(target: &LogTarget) -> Result<()> {
    match target {
        LogTarget::File(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
                )
                .with_writer(Arc::new(file))
                .with_ansi(false)
                .init();
        }
        LogTarget::Stderr => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
                )
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    init_logging(&log_target(&command, cli.log_file.as_deref()))?;

    let words = load_words(&cli.wordlist)?;
    info!(count = words.len(), wordlist = %cli.wordlist, "word list ready");

    let rng = cli.seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    let mut source = RandomWordSource::new(words, rng);
    let attempts = cli.attempts.and_then(NonZeroU8::new);

    let session = match command {
        Commands::Play => {
            let app = App::new(source, cli.difficulty.unwrap_or_default(), attempts)?;
            run_tui(app)?
        }
        Commands::Simple => {
            let config = SimpleConfig {
                difficulty: cli.difficulty,
                attempts,
            };
            run_simple(&mut source, config)?
        }
    };

    log_session(&session);
    Ok(())
}

fn log_session(session: &Session) {
    info!(
        played = session.games_played(),
        won = session.games_won(),
        best_streak = session.best_streak(),
        "session finished"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tui_never_logs_to_stderr() {
        assert_eq!(
            log_target(&Commands::Play, None),
            LogTarget::File(PathBuf::from(DEFAULT_TUI_LOG))
        );
        assert_ne!(log_target(&Commands::Play, None), LogTarget::Stderr);
    }

    #[test]
    fn simple_mode_logs_to_stderr_by_default() {
        assert_eq!(log_target(&Commands::Simple, None), LogTarget::Stderr);
    }

    #[test]
    fn explicit_log_file_wins_for_every_command() {
        let path = Path::new("custom.log");
        for command in [Commands::Play, Commands::Simple] {
            assert_eq!(
                log_target(&command, Some(path)),
                LogTarget::File(path.to_path_buf())
            );
        }
    }

    #[test]
    fn cli_parses_default_command_and_flags() {
        let cli = Cli::try_parse_from(["hangman", "-d", "hard", "-a", "3"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.difficulty, Some(Difficulty::Hard));
        assert_eq!(cli.attempts, Some(3));
        assert!(Cli::try_parse_from(["hangman", "-a", "0"]).is_err());
    }
}
