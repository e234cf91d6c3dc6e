//! Hangman
//!
//! A terminal word-guessing game: a plain-text mode and a full-screen TUI built
//! around a small, pure game state machine.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::{Game, GuessFeedback, Outcome, SecretWord};
//! use std::num::NonZeroU8;
//!
//! let secret = SecretWord::new("oxygen").unwrap();
//! let mut game = Game::new(secret, NonZeroU8::new(6).unwrap());
//!
//! let feedback = game.submit_guess("z").unwrap();
//! assert!(matches!(feedback, GuessFeedback::Miss { .. }));
//! assert_eq!(game.attempts_remaining(), 5);
//! assert_eq!(game.outcome(), Outcome::InProgress);
//! ```

// Core domain types
pub mod core;

// Word lists and secret word selection
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
