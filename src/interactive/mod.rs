//! Interactive full-screen TUI

mod app;
mod rendering;

pub use app::{App, InputMode, Message, MessageStyle, run_tui};
