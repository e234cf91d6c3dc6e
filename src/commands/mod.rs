//! Command implementations

pub mod simple;

pub use simple::{SimpleConfig, play_session, run_simple};
