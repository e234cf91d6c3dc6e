//! TUI application state and logic

use crate::core::{Difficulty, Game, GuessFeedback, Outcome, Session};
use crate::wordlists::{WordListError, WordSource};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::num::NonZeroU8;
use tracing::info;

/// Messages kept in the log panel
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<S> {
    pub source: S,
    pub game: Game,
    pub session: Session,
    /// Tier of the round on screen
    pub difficulty: Difficulty,
    /// Tier the next round will use
    pub next_difficulty: Difficulty,
    pub attempts_override: Option<NonZeroU8>,
    pub input_mode: InputMode,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    RoundOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Warning,
    Error,
}

impl<S: WordSource> App<S> {
    /// Create the app and deal the first word
    ///
    /// # Errors
    ///
    /// Returns an error if the word source has nothing to offer.
    pub fn new(
        mut source: S,
        difficulty: Difficulty,
        attempts_override: Option<NonZeroU8>,
    ) -> Result<Self, WordListError> {
        let game = Self::deal(&mut source, difficulty, attempts_override)?;

        Ok(Self {
            source,
            game,
            session: Session::new(),
            difficulty,
            next_difficulty: difficulty,
            attempts_override,
            input_mode: InputMode::Guessing,
            messages: vec![Message {
                text: "Welcome! Type a letter to guess. Esc quits.".to_string(),
                style: MessageStyle::Info,
            }],
            should_quit: false,
        })
    }

    fn deal(
        source: &mut S,
        difficulty: Difficulty,
        attempts_override: Option<NonZeroU8>,
    ) -> Result<Game, WordListError> {
        let secret = source.next_word(difficulty)?;
        let attempts = attempts_override.unwrap_or_else(|| difficulty.max_attempts());
        Ok(Game::new(secret, attempts))
    }

    /// Forward one guess to the game and log the result
    ///
    /// # Errors
    ///
    /// Returns an error if called after the round is over.
    pub fn handle_guess(&mut self, guess: &str) -> Result<()> {
        let feedback = self.game.submit_guess(guess)?;

        match feedback {
            GuessFeedback::Hit {
                letter,
                occurrences,
            } => {
                let text = if occurrences == 1 {
                    format!("Good guess! '{letter}' is in the word.")
                } else {
                    format!("Good guess! '{letter}' appears {occurrences} times.")
                };
                self.add_message(&text, MessageStyle::Success);
            }
            GuessFeedback::Miss { letter } => {
                self.add_message(
                    &format!("Sorry, '{letter}' is not in the word."),
                    MessageStyle::Error,
                );
            }
            GuessFeedback::Rejected(rejection) => {
                self.add_message(&rejection.to_string(), MessageStyle::Warning);
            }
        }

        if self.game.outcome().is_over() {
            self.finish_round();
        }
        Ok(())
    }

    fn finish_round(&mut self) {
        let outcome = self.game.outcome();
        self.session.record(outcome);
        self.input_mode = InputMode::RoundOver;

        let word = self.game.secret().text().to_string();
        match outcome {
            Outcome::Won => self.add_message(
                &format!("🎉 You guessed '{word}'! Press 'n' for a new word or 'q' to quit."),
                MessageStyle::Success,
            ),
            Outcome::Lost => self.add_message(
                &format!("💀 The word was '{word}'. Press 'n' to try again or 'q' to quit."),
                MessageStyle::Error,
            ),
            Outcome::InProgress => {}
        }
    }

    /// Start a fresh round at the selected tier
    ///
    /// # Errors
    ///
    /// Returns an error if the word source has nothing to offer.
    pub fn new_game(&mut self) -> Result<(), WordListError> {
        self.difficulty = self.next_difficulty;
        self.game = Self::deal(&mut self.source, self.difficulty, self.attempts_override)?;
        self.input_mode = InputMode::Guessing;
        self.messages.clear();
        self.add_message(
            &format!(
                "New {} word: {} letters, {} attempts.",
                self.difficulty,
                self.game.secret().len(),
                self.game.max_attempts()
            ),
            MessageStyle::Info,
        );
        info!(difficulty = %self.difficulty, "new round");
        Ok(())
    }

    /// Select the next tier; applies from the next round
    pub fn cycle_difficulty(&mut self) {
        self.next_difficulty = self.next_difficulty.next();
        self.add_message(
            &format!("Next round: {}", self.next_difficulty),
            MessageStyle::Info,
        );
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    ///
    /// # Errors
    ///
    /// Returns an error if a new word cannot be dealt.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return Ok(());
        }

        match self.input_mode {
            InputMode::Guessing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Tab => self.cycle_difficulty(),
                KeyCode::Char(c) => {
                    let mut buf = [0; 4];
                    self.handle_guess(c.encode_utf8(&mut buf))?;
                }
                _ => {}
            },
            InputMode::RoundOver => match key.code {
                KeyCode::Esc | KeyCode::Char('q' | 'Q') => self.should_quit = true,
                KeyCode::Enter | KeyCode::Char('n' | 'N') => self.new_game()?,
                KeyCode::Tab => self.cycle_difficulty(),
                _ => {}
            },
        }
        Ok(())
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: WordSource>(app: App<S>) -> Result<Session> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, S: WordSource>(
    terminal: &mut Terminal<B>,
    mut app: App<S>,
) -> Result<Session> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key)?;
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app.session)
}
