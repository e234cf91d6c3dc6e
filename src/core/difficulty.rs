//! Difficulty tiers
//!
//! Each tier maps to a fixed attempts budget and a secret-word length range.

use clap::ValueEnum;
use std::fmt;
use std::num::NonZeroU8;
use std::ops::RangeInclusive;

/// Difficulty tier chosen before a round starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

/// Settings a tier resolves to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierProfile {
    pub max_attempts: NonZeroU8,
    pub word_lengths: RangeInclusive<usize>,
}

impl Difficulty {
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    const EASY_ATTEMPTS: NonZeroU8 = NonZeroU8::new(8).unwrap();
    const MEDIUM_ATTEMPTS: NonZeroU8 = NonZeroU8::new(6).unwrap();
    const HARD_ATTEMPTS: NonZeroU8 = NonZeroU8::new(4).unwrap();

    /// Look up the attempts budget and word length range for this tier
    #[must_use]
    pub fn profile(self) -> TierProfile {
        let (max_attempts, word_lengths) = match self {
            Self::Easy => (Self::EASY_ATTEMPTS, 1..=5),
            Self::Medium => (Self::MEDIUM_ATTEMPTS, 6..=7),
            Self::Hard => (Self::HARD_ATTEMPTS, 8..=usize::MAX),
        };
        TierProfile {
            max_attempts,
            word_lengths,
        }
    }

    #[must_use]
    pub fn max_attempts(self) -> NonZeroU8 {
        self.profile().max_attempts
    }

    /// Parse a menu choice: `1`-`3` or a tier name, case-insensitive
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Difficulty;
    ///
    /// assert_eq!(Difficulty::from_name("2"), Some(Difficulty::Medium));
    /// assert_eq!(Difficulty::from_name("HARD"), Some(Difficulty::Hard));
    /// assert_eq!(Difficulty::from_name("extreme"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "1" | "easy" | "e" => Some(Self::Easy),
            "2" | "medium" | "m" => Some(Self::Medium),
            "3" | "hard" | "h" => Some(Self::Hard),
            _ => None,
        }
    }

    /// The next tier, wrapping from hard back to easy
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Easy => Self::Medium,
            Self::Medium => Self::Hard,
            Self::Hard => Self::Easy,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
