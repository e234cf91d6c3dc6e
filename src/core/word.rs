//! Secret word representation
//!
//! A `SecretWord` stores an uppercase word along with letter position indices
//! for reveal computation.

use super::letter::{Letter, LetterSet};
use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// A validated secret word with letter position tracking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretWord {
    text: String,
    letters: Vec<Letter>,
    distinct: LetterSet,
    positions: FxHashMap<Letter, Vec<usize>>,
}

/// Error type for invalid secret words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must not be empty")]
    Empty,
    #[error("Word must contain only letters A-Z, found {0:?}")]
    InvalidCharacter(char),
}

impl SecretWord {
    /// Create a new secret word from a string
    ///
    /// Surrounding whitespace is trimmed and letters are upper-cased.
    ///
    /// # Errors
    /// Returns `WordError` if the word is empty or contains anything other
    /// than ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::SecretWord;
    ///
    /// let word = SecretWord::new("oxygen").unwrap();
    /// assert_eq!(word.text(), "OXYGEN");
    ///
    /// assert!(SecretWord::new("").is_err());
    /// assert!(SecretWord::new("r2d2").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let trimmed = text.as_ref().trim();
        if trimmed.is_empty() {
            return Err(WordError::Empty);
        }

        let letters = trimmed
            .chars()
            .map(|c| Letter::from_char(c).ok_or(WordError::InvalidCharacter(c)))
            .collect::<Result<Vec<_>, _>>()?;

        let mut positions: FxHashMap<Letter, Vec<usize>> = FxHashMap::default();
        for (i, &letter) in letters.iter().enumerate() {
            positions.entry(letter).or_default().push(i);
        }

        Ok(Self {
            text: letters.iter().map(|l| l.as_char()).collect(),
            distinct: letters.iter().copied().collect(),
            letters,
            positions,
        })
    }

    /// Get the word as an uppercase string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Letters in their original order
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    /// Number of letter positions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Never true for a constructed word
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// The set of distinct letters in the word
    #[inline]
    #[must_use]
    pub const fn distinct_letters(&self) -> LetterSet {
        self.distinct
    }

    #[inline]
    #[must_use]
    pub const fn contains(&self, letter: Letter) -> bool {
        self.distinct.contains(letter)
    }

    /// Get all positions where a letter appears
    ///
    /// Returns an empty slice if the letter doesn't appear.
    #[inline]
    pub fn positions_of(&self, letter: Letter) -> &[usize] {
        self.positions.get(&letter).map_or(&[], Vec::as_slice)
    }
}

impl fmt::Display for SecretWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(c: char) -> Letter {
        Letter::from_char(c).unwrap()
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = SecretWord::new("Kayak").unwrap();
        assert_eq!(word.text(), "KAYAK");
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn word_creation_trims_whitespace() {
        let word = SecretWord::new("  fjord\n").unwrap();
        assert_eq!(word.text(), "FJORD");
    }

    #[test]
    fn word_creation_invalid() {
        assert_eq!(SecretWord::new(""), Err(WordError::Empty));
        assert_eq!(SecretWord::new("   "), Err(WordError::Empty));
        assert_eq!(
            SecretWord::new("ice cream"),
            Err(WordError::InvalidCharacter(' '))
        );
        assert_eq!(
            SecretWord::new("café"),
            Err(WordError::InvalidCharacter('é'))
        );
    }

    #[test]
    fn word_positions_of_duplicates() {
        let word = SecretWord::new("bagpipes").unwrap();
        assert_eq!(word.positions_of(letter('p')), &[3, 5]);
        assert_eq!(word.positions_of(letter('b')), &[0]);
        assert_eq!(word.positions_of(letter('z')), &[] as &[usize]);
    }

    #[test]
    fn word_distinct_letters() {
        let word = SecretWord::new("yummy").unwrap();
        assert_eq!(word.distinct_letters().to_string(), "M U Y");
        assert!(word.contains(letter('m')));
        assert!(!word.contains(letter('a')));
    }

    #[test]
    fn word_display() {
        let word = SecretWord::new("zodiac").unwrap();
        assert_eq!(format!("{word}"), "ZODIAC");
    }
}
