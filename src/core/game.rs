//! Hangman game state machine
//!
//! A `Game` owns the secret word, the guessed letters and the remaining
//! wrong-guess budget. It moves from `InProgress` to exactly one of the
//! terminal outcomes `Won` or `Lost`, and only through [`Game::submit_guess`].

use super::letter::{Letter, LetterSet};
use super::word::SecretWord;
use std::fmt;
use std::num::NonZeroU8;
use thiserror::Error;
use tracing::{debug, info};

/// Placeholder shown for unrevealed positions
pub const PLACEHOLDER: char = '_';

/// Status of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

impl Outcome {
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// A guess the player can correct and retry; state is left untouched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("Please enter a single letter (A-Z).")]
    InvalidInput,
    #[error("You've already guessed '{0}'. Try another letter.")]
    DuplicateGuess(Letter),
}

/// Result of a guess that reached the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessFeedback {
    /// The letter is in the word and revealed `occurrences` positions
    Hit { letter: Letter, occurrences: usize },
    /// The letter is not in the word; one attempt was spent
    Miss { letter: Letter },
    Rejected(Rejection),
}

impl GuessFeedback {
    #[must_use]
    pub const fn is_accepted(self) -> bool {
        !matches!(self, Self::Rejected(_))
    }
}

/// Guessing after the round has ended is a bug in the calling loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("game is already over ({outcome:?})")]
pub struct GameAlreadyOver {
    pub outcome: Outcome,
}

/// One round of hangman
#[derive(Debug, Clone)]
pub struct Game {
    secret: SecretWord,
    guessed: LetterSet,
    max_attempts: u8,
    attempts_remaining: u8,
    outcome: Outcome,
}

impl Game {
    /// Start a round with a secret word and a wrong-guess budget
    ///
    /// # Examples
    /// ```
    /// use hangman::core::{Game, Outcome, SecretWord};
    /// use std::num::NonZeroU8;
    ///
    /// let secret = SecretWord::new("cat").unwrap();
    /// let mut game = Game::new(secret, NonZeroU8::new(6).unwrap());
    /// for guess in ["c", "a", "t"] {
    ///     game.submit_guess(guess).unwrap();
    /// }
    /// assert_eq!(game.outcome(), Outcome::Won);
    /// assert_eq!(game.masked_word(), "C A T");
    /// ```
    #[must_use]
    pub fn new(secret: SecretWord, max_attempts: NonZeroU8) -> Self {
        debug!(len = secret.len(), max_attempts = max_attempts.get(), "new game");
        Self {
            secret,
            guessed: LetterSet::new(),
            max_attempts: max_attempts.get(),
            attempts_remaining: max_attempts.get(),
            outcome: Outcome::InProgress,
        }
    }

    /// Submit raw player input as a letter guess
    ///
    /// Input must be exactly one ASCII letter in either case. Invalid and
    /// repeated guesses come back as [`GuessFeedback::Rejected`] without
    /// touching state. A guess absent from the word costs one attempt.
    ///
    /// # Errors
    /// Returns [`GameAlreadyOver`] if the round has already been won or lost.
    pub fn submit_guess(&mut self, input: &str) -> Result<GuessFeedback, GameAlreadyOver> {
        if self.outcome.is_over() {
            return Err(GameAlreadyOver {
                outcome: self.outcome,
            });
        }

        let Some(letter) = Letter::parse(input) else {
            return Ok(GuessFeedback::Rejected(Rejection::InvalidInput));
        };
        if !self.guessed.insert(letter) {
            return Ok(GuessFeedback::Rejected(Rejection::DuplicateGuess(letter)));
        }

        let feedback = if self.secret.contains(letter) {
            GuessFeedback::Hit {
                letter,
                occurrences: self.secret.positions_of(letter).len(),
            }
        } else {
            self.attempts_remaining = self.attempts_remaining.saturating_sub(1);
            GuessFeedback::Miss { letter }
        };
        let hit = matches!(feedback, GuessFeedback::Hit { .. });
        debug!(
            %letter,
            hit,
            remaining = self.attempts_remaining,
            "guess accepted"
        );

        self.update_outcome();
        Ok(feedback)
    }

    /// Win is checked before loss
    fn update_outcome(&mut self) {
        self.outcome = if self.secret.distinct_letters().is_subset(self.guessed) {
            Outcome::Won
        } else if self.attempts_remaining == 0 {
            Outcome::Lost
        } else {
            Outcome::InProgress
        };
        if self.outcome.is_over() {
            info!(outcome = ?self.outcome, word = %self.secret, "game over");
        }
    }

    /// One entry per secret position: the letter if guessed, else `None`
    #[must_use]
    pub fn masked(&self) -> Vec<Option<Letter>> {
        self.secret
            .letters()
            .iter()
            .map(|&l| self.guessed.contains(l).then_some(l))
            .collect()
    }

    /// Masked word with `_` placeholders, positions separated by spaces
    #[must_use]
    pub fn masked_word(&self) -> String {
        let mut out = String::with_capacity(self.secret.len() * 2);
        for (i, slot) in self.masked().into_iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push(slot.map_or(PLACEHOLDER, Letter::as_char));
        }
        out
    }

    /// Letters not yet guessed, in alphabetical order
    #[must_use]
    pub const fn remaining_alphabet(&self) -> LetterSet {
        self.guessed.complement()
    }

    #[must_use]
    pub const fn guessed_letters(&self) -> LetterSet {
        self.guessed
    }

    /// Guessed letters that are not in the word
    #[must_use]
    pub const fn wrong_letters(&self) -> LetterSet {
        self.guessed.difference(self.secret.distinct_letters())
    }

    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[must_use]
    pub const fn attempts_remaining(&self) -> u8 {
        self.attempts_remaining
    }

    #[must_use]
    pub const fn max_attempts(&self) -> u8 {
        self.max_attempts
    }

    /// Attempts spent on wrong guesses so far
    #[must_use]
    pub const fn wrong_guesses(&self) -> u8 {
        self.max_attempts - self.attempts_remaining
    }

    /// The secret word; presentation should only show it once the game is over
    #[must_use]
    pub const fn secret(&self) -> &SecretWord {
        &self.secret
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}/{} attempts left)",
            self.masked_word(),
            self.attempts_remaining,
            self.max_attempts
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(word: &str, attempts: u8) -> Game {
        Game::new(
            SecretWord::new(word).unwrap(),
            NonZeroU8::new(attempts).unwrap(),
        )
    }

    fn letter(c: char) -> Letter {
        Letter::from_char(c).unwrap()
    }

    #[test]
    fn cat_scenario_wins() {
        let mut game = game("CAT", 6);
        for guess in ["C", "A"] {
            game.submit_guess(guess).unwrap();
            assert_eq!(game.outcome(), Outcome::InProgress);
        }
        let feedback = game.submit_guess("T").unwrap();
        assert_eq!(
            feedback,
            GuessFeedback::Hit {
                letter: letter('T'),
                occurrences: 1
            }
        );
        assert_eq!(game.outcome(), Outcome::Won);
        assert_eq!(game.masked_word(), "C A T");
        assert_eq!(game.attempts_remaining(), 6);
    }

    #[test]
    fn dog_scenario_loses() {
        let mut game = game("DOG", 2);
        assert_eq!(
            game.submit_guess("X").unwrap(),
            GuessFeedback::Miss { letter: letter('X') }
        );
        assert_eq!(game.outcome(), Outcome::InProgress);
        game.submit_guess("Y").unwrap();
        assert_eq!(game.attempts_remaining(), 0);
        assert_eq!(game.outcome(), Outcome::Lost);
        assert_eq!(game.masked_word(), "_ _ _");
    }

    #[test]
    fn oxygen_duplicate_is_rejected_without_change() {
        let mut game = game("OXYGEN", 6);
        let first = game.submit_guess("z").unwrap();
        assert_eq!(first, GuessFeedback::Miss { letter: letter('Z') });
        assert_eq!(game.attempts_remaining(), 5);

        let guessed_before = game.guessed_letters();
        let second = game.submit_guess("z").unwrap();
        assert_eq!(
            second,
            GuessFeedback::Rejected(Rejection::DuplicateGuess(letter('Z')))
        );
        assert_eq!(game.attempts_remaining(), 5);
        assert_eq!(game.guessed_letters(), guessed_before);
    }

    #[test]
    fn duplicate_detection_is_case_insensitive() {
        let mut game = game("OXYGEN", 6);
        game.submit_guess("o").unwrap();
        assert_eq!(
            game.submit_guess("O").unwrap(),
            GuessFeedback::Rejected(Rejection::DuplicateGuess(letter('O')))
        );
    }

    #[test]
    fn invalid_input_is_rejected_without_change() {
        let mut game = game("PIXEL", 6);
        for input in ["", "ab", "7", " ", "?", "é", " p"] {
            assert_eq!(
                game.submit_guess(input).unwrap(),
                GuessFeedback::Rejected(Rejection::InvalidInput),
                "input {input:?}"
            );
        }
        assert!(game.guessed_letters().is_empty());
        assert_eq!(game.attempts_remaining(), 6);
    }

    #[test]
    fn guessing_after_game_over_is_an_error() {
        let mut won = game("A", 3);
        won.submit_guess("a").unwrap();
        assert_eq!(
            won.submit_guess("b"),
            Err(GameAlreadyOver {
                outcome: Outcome::Won
            })
        );

        let mut lost = game("A", 1);
        lost.submit_guess("b").unwrap();
        assert_eq!(
            lost.submit_guess("a"),
            Err(GameAlreadyOver {
                outcome: Outcome::Lost
            })
        );
        // Even invalid input is refused once the game is over
        assert!(lost.submit_guess("??").is_err());
    }

    #[test]
    fn only_letters_absent_from_word_cost_attempts() {
        for letter in LetterSet::alphabet().iter() {
            let mut game = game("JACKPOT", 6);
            let feedback = game.submit_guess(&letter.to_string()).unwrap();
            if game.secret().contains(letter) {
                assert!(matches!(feedback, GuessFeedback::Hit { .. }), "{letter}");
                assert_eq!(game.attempts_remaining(), 6);
            } else {
                assert_eq!(feedback, GuessFeedback::Miss { letter });
                assert_eq!(game.attempts_remaining(), 5);
            }
        }
    }

    #[test]
    fn hit_reports_every_revealed_position() {
        let mut game = game("BAGPIPES", 4);
        assert_eq!(
            game.submit_guess("p").unwrap(),
            GuessFeedback::Hit {
                letter: letter('P'),
                occurrences: 2
            }
        );
        assert_eq!(game.masked_word(), "_ _ _ P _ P _ _");
    }

    #[test]
    fn win_on_last_attempt_after_misses() {
        let mut game = game("HI", 2);
        game.submit_guess("x").unwrap();
        game.submit_guess("h").unwrap();
        assert_eq!(game.attempts_remaining(), 1);
        game.submit_guess("i").unwrap();
        assert_eq!(game.outcome(), Outcome::Won);
    }

    #[test]
    fn covering_every_letter_within_budget_wins() {
        for word in ["JAZZ", "RHYTHM", "XYLOPHONE", "ESPIONAGE", "Q"] {
            let mut game = game(word, 1);
            let letters = game.secret().distinct_letters();
            for letter in letters.iter() {
                game.submit_guess(&letter.to_string()).unwrap();
            }
            assert_eq!(game.outcome(), Outcome::Won, "{word}");
            assert_eq!(game.attempts_remaining(), 1);
        }
    }

    #[test]
    fn budget_of_wrong_guesses_loses() {
        for (word, attempts) in [("JAZZ", 8), ("RHYTHM", 6), ("XYLOPHONE", 4), ("A", 25)] {
            let mut game = game(word, attempts);
            let misses = game.secret().distinct_letters().complement();
            for letter in misses.iter().take(usize::from(attempts)) {
                assert!(!game.outcome().is_over());
                game.submit_guess(&letter.to_string()).unwrap();
            }
            assert_eq!(game.outcome(), Outcome::Lost, "{word}");
            assert_eq!(game.attempts_remaining(), 0);
            assert_eq!(game.wrong_guesses(), attempts);
        }
    }

    #[test]
    fn masked_length_matches_and_guessed_positions_are_revealed() {
        let mut game = game("MNEMONIC", 6);
        for guess in ["m", "z", "o", "c"] {
            game.submit_guess(guess).unwrap();
            let masked = game.masked();
            assert_eq!(masked.len(), game.secret().len());
            for (slot, &actual) in masked.iter().zip(game.secret().letters()) {
                if game.guessed_letters().contains(actual) {
                    assert_eq!(*slot, Some(actual));
                } else {
                    assert_eq!(*slot, None);
                }
            }
        }
        assert_eq!(game.masked_word(), "M _ _ M O _ _ C");
    }

    #[test]
    fn remaining_alphabet_partitions_with_guessed() {
        let mut game = game("QUARTZ", 6);
        for guess in ["q", "e", "1", "u", "e", "x"] {
            game.submit_guess(guess).unwrap();
            let remaining = game.remaining_alphabet();
            let guessed = game.guessed_letters();
            assert!(remaining.intersection(guessed).is_empty());
            assert_eq!(remaining.union(guessed), LetterSet::alphabet());
        }
        assert_eq!(game.remaining_alphabet().len(), 22);
        assert_eq!(game.wrong_letters().to_string(), "E X");
    }

    #[test]
    fn display_shows_progress() {
        let mut game = game("KAYAK", 8);
        game.submit_guess("a").unwrap();
        game.submit_guess("e").unwrap();
        assert_eq!(game.to_string(), "_ A _ A _ (7/8 attempts left)");
    }
}
