//! Letters of the 26-letter Latin alphabet
//!
//! `Letter` is a validated uppercase ASCII letter and `LetterSet` is a compact
//! set of letters stored as a 26-bit mask, so iteration is always alphabetical.

use std::fmt;

/// A single uppercase letter in `A..=Z`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

impl Letter {
    /// Build a letter from a character, folding lowercase to uppercase
    ///
    /// Returns `None` for anything outside the ASCII alphabet.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Letter;
    ///
    /// assert_eq!(Letter::from_char('q'), Letter::from_char('Q'));
    /// assert!(Letter::from_char('7').is_none());
    /// assert!(Letter::from_char('é').is_none());
    /// ```
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        if c.is_ascii_alphabetic() {
            Some(Self(c.to_ascii_uppercase() as u8))
        } else {
            None
        }
    }

    /// Parse raw player input that must be exactly one letter
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let mut chars = input.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => None,
        }
    }

    /// Zero-based index in the alphabet (A = 0)
    #[inline]
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0 - b'A'
    }

    /// The letter as an uppercase `char`
    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }

    const fn from_index(index: u8) -> Self {
        Self(b'A' + index)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A set of letters, iterated in alphabetical order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    const FULL_MASK: u32 = (1 << 26) - 1;

    /// The empty set
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    /// All 26 letters
    #[must_use]
    pub const fn alphabet() -> Self {
        Self(Self::FULL_MASK)
    }

    /// Add a letter, returning `false` if it was already present
    pub fn insert(&mut self, letter: Letter) -> bool {
        let bit = 1 << letter.index();
        let fresh = self.0 & bit == 0;
        self.0 |= bit;
        fresh
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: Letter) -> bool {
        self.0 & (1 << letter.index()) != 0
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Letters of the alphabet not in this set
    #[must_use]
    pub const fn complement(self) -> Self {
        Self(!self.0 & Self::FULL_MASK)
    }

    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// True if every letter in `self` is also in `other`
    #[must_use]
    pub const fn is_subset(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    /// Iterate letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = Letter> {
        (0..26u8)
            .filter(move |&i| self.0 & (1 << i) != 0)
            .map(Letter::from_index)
    }
}

impl FromIterator<Letter> for LetterSet {
    fn from_iter<I: IntoIterator<Item = Letter>>(iter: I) -> Self {
        let mut set = Self::new();
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

impl fmt::Display for LetterSet {
    /// Letters separated by single spaces, e.g. `A E Z`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, letter) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}
