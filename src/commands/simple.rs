//! Simple interactive CLI mode
//!
//! Line-based game loop without the TUI. Generic over the reader and writer so
//! whole sessions can be driven from tests.

use crate::core::{Difficulty, Game, Session};
use crate::output::{print_banner, print_feedback, print_outcome, print_session, print_status};
use crate::wordlists::WordSource;
use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};
use std::num::NonZeroU8;
use tracing::info;

/// Settings fixed for the whole session
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleConfig {
    /// Skip the difficulty menu and always use this tier
    pub difficulty: Option<Difficulty>,
    /// Replace the tier's attempts budget
    pub attempts: Option<NonZeroU8>,
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if the word
/// source cannot supply a word.
pub fn run_simple<S: WordSource>(source: &mut S, config: SimpleConfig) -> Result<Session> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();
    play_session(source, config, &mut input, &mut out)
}

/// Play rounds until the player declines a replay or input ends
///
/// # Errors
///
/// Returns an error on I/O failure, when the word source is empty, or if the
/// loop ever guesses on a finished game.
pub fn play_session<S, R, W>(
    source: &mut S,
    config: SimpleConfig,
    input: &mut R,
    out: &mut W,
) -> Result<Session>
where
    S: WordSource,
    R: BufRead,
    W: Write,
{
    let mut session = Session::new();
    print_banner(out)?;

    loop {
        let difficulty = match config.difficulty {
            Some(difficulty) => difficulty,
            None => match choose_difficulty(input, out)? {
                Some(difficulty) => difficulty,
                None => break,
            },
        };

        let secret = source.next_word(difficulty)?;
        let attempts = config
            .attempts
            .unwrap_or_else(|| difficulty.max_attempts());
        let mut game = Game::new(secret, attempts);
        info!(%difficulty, attempts = attempts.get(), "round started");

        if !play_round(&mut game, input, out)? {
            break;
        }

        print_status(out, &game)?;
        print_outcome(out, &game)?;
        session.record(game.outcome());
        print_session(out, &session)?;

        let again = prompt(input, out, "\nPlay again? (y/n)")?.unwrap_or_default();
        if !matches!(again.to_lowercase().as_str(), "y" | "yes") {
            break;
        }
        writeln!(out, "\n{}\n", "=".repeat(30))?;
    }

    writeln!(out, "\nFinal score: {}", session.games_won())?;
    writeln!(out, "Thanks for playing!")?;
    Ok(session)
}

/// Drive one round to its end; `false` if input ran out first
fn play_round<R: BufRead, W: Write>(game: &mut Game, input: &mut R, out: &mut W) -> Result<bool> {
    while !game.outcome().is_over() {
        print_status(out, game)?;

        loop {
            let Some(guess) = prompt(input, out, "Guess a letter")? else {
                return Ok(false);
            };
            let feedback = game.submit_guess(&guess)?;
            print_feedback(out, feedback)?;
            if feedback.is_accepted() {
                break;
            }
        }
    }
    Ok(true)
}

fn choose_difficulty<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
) -> Result<Option<Difficulty>> {
    writeln!(out, "Choose difficulty:")?;
    for (i, difficulty) in Difficulty::ALL.iter().enumerate() {
        writeln!(
            out,
            "{}. {} ({} attempts)",
            i + 1,
            difficulty,
            difficulty.max_attempts()
        )?;
    }

    loop {
        let Some(choice) = prompt(input, out, "Enter choice (1-3)")? else {
            return Ok(None);
        };
        if let Some(difficulty) = Difficulty::from_name(&choice) {
            return Ok(Some(difficulty));
        }
        writeln!(out, "Invalid input. Please enter 1, 2, or 3.")?;
    }
}

/// Get user input with a prompt; `None` at end of input
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    text: &str,
) -> Result<Option<String>> {
    write!(out, "{text}: ")?;
    out.flush().context("failed to flush output")?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("failed to read player input")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::{RandomWordSource, loader::words_from_slice};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;

    fn source(words: &[&str]) -> RandomWordSource<StdRng> {
        RandomWordSource::new(words_from_slice(words), StdRng::seed_from_u64(3))
    }

    fn run(words: &[&str], config: SimpleConfig, script: &str) -> (Session, String) {
        let mut source = source(words);
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut out = Vec::new();
        let session = play_session(&mut source, config, &mut input, &mut out).unwrap();
        (session, String::from_utf8(out).unwrap())
    }

    #[test]
    fn winning_round_with_rejections() {
        let script = "9\n1\nc\nc\nxy\na\nt\nn\n";
        let (session, output) = run(&["cat"], SimpleConfig::default(), script);

        assert!(output.contains("Invalid input. Please enter 1, 2, or 3."));
        assert!(output.contains("You've already guessed 'C'"));
        assert!(output.contains("Please enter a single letter"));
        assert!(output.contains("Congratulations! You guessed 'CAT' correctly!"));
        assert!(output.contains("Final score: 1"));
        assert_eq!(session.games_won(), 1);
        assert_eq!(session.games_played(), 1);
    }

    #[test]
    fn losing_round_reveals_word() {
        let config = SimpleConfig {
            difficulty: Some(Difficulty::Easy),
            attempts: NonZeroU8::new(2),
        };
        let (session, output) = run(&["dog"], config, "x\ny\nno\n");

        assert!(output.contains("Sorry, 'X' is not in the word."));
        assert!(output.contains("Game over! The word was 'DOG'."));
        assert!(!output.contains("Choose difficulty"));
        assert_eq!(session.games_lost(), 1);
    }

    #[test]
    fn replay_accumulates_score() {
        let config = SimpleConfig {
            difficulty: Some(Difficulty::Easy),
            attempts: None,
        };
        let (session, output) = run(&["hi"], config, "h\ni\ny\nH\nI\nn\n");

        assert_eq!(session.games_played(), 2);
        assert_eq!(session.best_streak(), 2);
        assert!(output.contains("Score: 2 won / 2 played"));
    }

    #[test]
    fn end_of_input_stops_cleanly() {
        let config = SimpleConfig {
            difficulty: Some(Difficulty::Medium),
            attempts: None,
        };
        let (session, output) = run(&["oxygen"], config, "z\nz\n");

        assert!(output.contains("You've already guessed 'Z'"));
        assert!(output.contains("Attempts left: 5"));
        assert_eq!(session.games_played(), 0);
        assert!(output.contains("Thanks for playing!"));
    }

    #[test]
    fn empty_word_list_is_an_error() {
        let mut source = source(&[]);
        let mut input = Cursor::new(b"1\n".to_vec());
        let mut out = Vec::new();
        assert!(play_session(&mut source, SimpleConfig::default(), &mut input, &mut out).is_err());
    }

    #[test]
    fn rejected_guesses_do_not_cost_attempts() {
        let config = SimpleConfig {
            difficulty: Some(Difficulty::Easy),
            attempts: NonZeroU8::new(1),
        };
        let (session, _) = run(&["a"], config, "1\n!\nab\na\nn\n");
        assert_eq!(session.games_won(), 1);
        assert_eq!(session.games_played(), 1);
    }
}
