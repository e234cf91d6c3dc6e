//! TUI rendering with ratatui

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Letter, LetterSet, Outcome, PLACEHOLDER};
use crate::output::formatters::{attempts_bar, gallows};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui<S>(f: &mut Frame, app: &App<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(3), // Prompt
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(35), // Gallows
            Constraint::Percentage(65), // Word, alphabet, messages
        ])
        .split(chunks[1]);

    render_gallows(f, app, main_chunks[0]);
    render_board(f, app, main_chunks[1]);
    render_prompt(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("HANGMAN")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_gallows<S>(f: &mut Frame, app: &App<S>, area: Rect) {
    let game = &app.game;
    let color = match game.outcome() {
        Outcome::Won => Color::Green,
        Outcome::Lost => Color::Red,
        Outcome::InProgress => Color::White,
    };

    let mut lines: Vec<Line> = gallows(game.wrong_guesses(), game.max_attempts())
        .lines()
        .map(Line::from)
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(format!(
        "[{}] {}/{}",
        attempts_bar(game.wrong_guesses(), game.max_attempts(), 12),
        game.wrong_guesses(),
        game.max_attempts()
    )));

    let paragraph = Paragraph::new(lines)
        .style(Style::default().fg(color))
        .block(
            Block::default()
                .title(" Gallows ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(paragraph, area);
}

fn render_board<S>(f: &mut Frame, app: &App<S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Word
            Constraint::Length(4), // Alphabet
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_word(f, app, chunks[0]);
    render_alphabet(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_word<S>(f: &mut Frame, app: &App<S>, area: Rect) {
    let game = &app.game;
    let revealed = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let missed = Style::default().fg(Color::Red);

    // Once the round is lost, unrevealed letters are shown in red
    let spans: Vec<Span> = game
        .masked()
        .into_iter()
        .zip(game.secret().letters())
        .flat_map(|(slot, &actual)| {
            let cell = match (slot, game.outcome()) {
                (Some(letter), _) => Span::styled(letter.to_string(), revealed),
                (None, Outcome::Lost) => Span::styled(actual.to_string(), missed),
                (None, _) => Span::raw(PLACEHOLDER.to_string()),
            };
            [cell, Span::raw(" ")]
        })
        .collect();

    let paragraph = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(format!(" Word ({} letters) ", game.secret().len()))
                .borders(Borders::ALL),
        );
    f.render_widget(paragraph, area);
}

fn render_alphabet<S>(f: &mut Frame, app: &App<S>, area: Rect) {
    let game = &app.game;
    let guessed = game.guessed_letters();
    let wrong = game.wrong_letters();

    let mut all = LetterSet::alphabet().iter();
    let first = alphabet_row(all.by_ref().take(13), guessed, wrong);
    let second = alphabet_row(all, guessed, wrong);

    let paragraph = Paragraph::new(vec![first, second])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(format!(" Letters ({} left) ", game.remaining_alphabet().len()))
                .borders(Borders::ALL),
        );
    f.render_widget(paragraph, area);
}

fn alphabet_row(
    letters: impl Iterator<Item = Letter>,
    guessed: LetterSet,
    wrong: LetterSet,
) -> Line<'static> {
    let spans: Vec<Span> = letters
        .flat_map(|letter| {
            let style = letter_style(letter, guessed, wrong);
            [Span::styled(letter.to_string(), style), Span::raw(" ")]
        })
        .collect();
    Line::from(spans)
}

fn letter_style(letter: Letter, guessed: LetterSet, wrong: LetterSet) -> Style {
    if wrong.contains(letter) {
        Style::default()
            .fg(Color::Red)
            .add_modifier(Modifier::CROSSED_OUT)
    } else if guessed.contains(letter) {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    }
}

fn render_messages<S>(f: &mut Frame, app: &App<S>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Warning => Style::default().fg(Color::Yellow),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_prompt<S>(f: &mut Frame, app: &App<S>, area: Rect) {
    let (title, color) = match (app.input_mode, app.game.outcome()) {
        (InputMode::Guessing, _) => (" Type a letter to guess ", Color::Yellow),
        (InputMode::RoundOver, Outcome::Won) => {
            (" 🎉 YOU WON! | n: new word | q: quit ", Color::Green)
        }
        (InputMode::RoundOver, _) => (" GAME OVER | n: new word | q: quit ", Color::Red),
    };

    let prompt = Paragraph::new(format!(
        "Attempts left: {}   Next round: {}",
        app.game.attempts_remaining(),
        app.next_difficulty
    ))
    .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
    .block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(color)),
    );

    f.render_widget(prompt, area);
}

fn render_status<S>(f: &mut Frame, app: &App<S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let mode = Paragraph::new(format!("Difficulty: {}", app.difficulty))
        .alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.session.games_played(),
        app.session.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let streak_text = format!(
        "Streak: {} (best {})",
        app.session.current_streak(),
        app.session.best_streak()
    );
    let streak = Paragraph::new(streak_text).alignment(Alignment::Center);
    f.render_widget(streak, chunks[2]);

    let help_text = match app.input_mode {
        InputMode::Guessing => "A-Z: Guess | Tab: Tier | Esc: Quit",
        InputMode::RoundOver => "n: New | Tab: Tier | q: Quit",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
