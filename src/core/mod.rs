//! Core domain types for hangman
//!
//! The game state machine and the value types it is built from. Nothing here
//! performs I/O; presentation lives in `commands`, `output` and `interactive`.

mod difficulty;
mod game;
mod letter;
mod session;
mod word;

pub use difficulty::{Difficulty, TierProfile};
pub use game::{GameAlreadyOver, Game, GuessFeedback, Outcome, PLACEHOLDER, Rejection};
pub use letter::{Letter, LetterSet};
pub use session::Session;
pub use word::{SecretWord, WordError};
