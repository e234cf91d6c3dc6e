//! Secret word selection

use super::WordListError;
use crate::core::{Difficulty, SecretWord};
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{debug, warn};

/// Supplies one secret word per round
pub trait WordSource {
    /// Pick a word for the given tier
    ///
    /// # Errors
    /// Returns `WordListError::Empty` if there is nothing to pick from.
    fn next_word(&mut self, difficulty: Difficulty) -> Result<SecretWord, WordListError>;
}

/// Picks uniformly among the words whose length suits the tier
///
/// Falls back to the whole list when no word fits the tier, which can happen
/// with custom lists.
#[derive(Debug, Clone)]
pub struct RandomWordSource<R> {
    words: Vec<SecretWord>,
    rng: R,
}

impl<R: Rng> RandomWordSource<R> {
    #[must_use]
    pub const fn new(words: Vec<SecretWord>, rng: R) -> Self {
        Self { words, rng }
    }
}

impl<R: Rng> WordSource for RandomWordSource<R> {
    fn next_word(&mut self, difficulty: Difficulty) -> Result<SecretWord, WordListError> {
        let lengths = difficulty.profile().word_lengths;
        let tier: Vec<&SecretWord> = self
            .words
            .iter()
            .filter(|w| lengths.contains(&w.len()))
            .collect();

        let picked = if tier.is_empty() {
            warn!(%difficulty, "no words fit this tier, using the whole list");
            self.words.choose(&mut self.rng)
        } else {
            tier.choose(&mut self.rng).copied()
        };

        let word = picked.cloned().ok_or(WordListError::Empty)?;
        debug!(%difficulty, len = word.len(), "picked secret word");
        Ok(word)
    }
}
