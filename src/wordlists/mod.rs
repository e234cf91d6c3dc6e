//! Word lists for hangman
//!
//! Provides the embedded curated list and the word source that picks secret
//! words for a difficulty tier.

mod embedded;
pub mod loader;
mod source;

pub use embedded::{WORDS, WORDS_COUNT};
pub use source::{RandomWordSource, WordSource};

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure modes for loading or drawing from a word list
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("word list is empty")]
    Empty,
    #[error("failed to read word list {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
