//! Terminal output formatting
//!
//! Display utilities for the plain-text game loop and shared ASCII art.

pub mod display;
pub mod formatters;

pub use display::{print_banner, print_feedback, print_outcome, print_session, print_status};
