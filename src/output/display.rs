//! Display functions for the plain-text game loop

use super::formatters::{LOGO, attempts_bar, gallows};
use crate::core::{Game, GuessFeedback, Outcome, Session};
use colored::Colorize;
use std::io::{self, Write};

/// Print the title banner
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn print_banner(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", LOGO.bright_cyan())?;
    writeln!(out, "\nWelcome to Hangman!\n")
}

/// Print the board: word, attempts, letters and gallows
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn print_status(out: &mut impl Write, game: &Game) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(30).cyan())?;
    writeln!(out, "Word: {}", game.masked_word().bright_yellow().bold())?;
    writeln!(
        out,
        "Attempts left: {} [{}]",
        game.attempts_remaining(),
        attempts_bar(game.wrong_guesses(), game.max_attempts(), 12)
    )?;
    writeln!(out, "Guessed letters: {}", game.guessed_letters())?;
    writeln!(out, "Available letters: {}", game.remaining_alphabet())?;
    writeln!(out, "{}", gallows(game.wrong_guesses(), game.max_attempts()))
}

/// Print the result of one guess
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn print_feedback(out: &mut impl Write, feedback: GuessFeedback) -> io::Result<()> {
    match feedback {
        GuessFeedback::Hit {
            letter,
            occurrences,
        } => {
            let times = if occurrences == 1 {
                String::new()
            } else {
                format!(" ({occurrences} times)")
            };
            writeln!(
                out,
                "{}",
                format!("Good guess! '{letter}' is in the word{times}.").green()
            )
        }
        GuessFeedback::Miss { letter } => writeln!(
            out,
            "{}",
            format!("Sorry, '{letter}' is not in the word.").red()
        ),
        GuessFeedback::Rejected(rejection) => {
            writeln!(out, "{}", rejection.to_string().yellow())
        }
    }
}

/// Print the end-of-round message, revealing the word
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn print_outcome(out: &mut impl Write, game: &Game) -> io::Result<()> {
    let word = game.secret().text();
    match game.outcome() {
        Outcome::Won => writeln!(
            out,
            "\n{}",
            format!("Congratulations! You guessed '{word}' correctly!")
                .bright_green()
                .bold()
        ),
        Outcome::Lost => writeln!(
            out,
            "\n{}",
            format!("Game over! The word was '{word}'.").red().bold()
        ),
        Outcome::InProgress => Ok(()),
    }
}

/// Print the running score
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn print_session(out: &mut impl Write, session: &Session) -> io::Result<()> {
    writeln!(
        out,
        "Score: {} won / {} played ({:.0}%), best streak {}",
        session.games_won(),
        session.games_played(),
        session.win_rate(),
        session.best_streak()
    )
}
