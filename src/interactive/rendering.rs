//! TUI rendering with ratatui

use super::app::App;
use crate::core::{KeyStatus, LetterStatus};
use crate::game::{GameState, Row, Snapshot, WordSelector};
use crate::output::formatters::{KEY_ROWS, tile_text};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

const SHORT_ENTRY_TEXT: &str = "Please enter 5 character guess";

/// Main UI rendering function
pub fn ui<S: WordSelector>(f: &mut Frame, app: &App<S>) {
    let snapshot = app.game.snapshot();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(2), // Warnings and timer
            Constraint::Length(8), // Grid
            Constraint::Length(3), // Status bar
            Constraint::Length(5), // Keyboard
            Constraint::Min(1),    // Help
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_notices(f, app, &snapshot, chunks[1]);
    render_grid(f, &snapshot, chunks[2]);
    render_status(f, &snapshot, chunks[3]);
    render_keyboard(f, &snapshot, chunks[4]);
    render_help(f, chunks[5]);
}

fn render_header<S: WordSelector>(f: &mut Frame, app: &App<S>, area: Rect) {
    let flag = |on: bool| if on { "ON" } else { "off" };
    let title = Line::from(vec![
        Span::styled(
            "MINI WORDLE",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled(
            format!("Hard Mode: {}", flag(app.game.hard_mode())),
            Style::default().fg(Color::Yellow),
        ),
        Span::raw("  "),
        Span::styled(
            format!("Timer: {}", flag(app.stopwatch.is_enabled())),
            Style::default().fg(Color::Yellow),
        ),
    ]);

    let header = Paragraph::new(title).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(header, area);
}

fn render_notices<S: WordSelector>(f: &mut Frame, app: &App<S>, snapshot: &Snapshot, area: Rect) {
    let error = Style::default().fg(Color::Red).add_modifier(Modifier::BOLD);
    let mut lines = Vec::new();

    if snapshot.signals.short_entry {
        lines.push(Line::styled(SHORT_ENTRY_TEXT, error));
    }
    if snapshot.signals.hard_mode_violation {
        let text = app.violation.map_or_else(
            || "Please match the letters revealed by the last guess".to_string(),
            |violation| format!("Hard mode: {violation}"),
        );
        lines.push(Line::styled(text, error));
    }
    if app.stopwatch.is_enabled() {
        lines.push(Line::from(format!("Time: {}s", app.stopwatch.elapsed())));
    }

    let notices = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(notices, area);
}

fn tile_style(status: LetterStatus, active: bool) -> Style {
    match status {
        LetterStatus::Correct => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        LetterStatus::Present => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        LetterStatus::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
        LetterStatus::Empty if active => Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::UNDERLINED),
        LetterStatus::Empty => Style::default().fg(Color::White),
    }
}

fn grid_line(row: &Row) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, (letter, status)) in row.tiles().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(tile_text(letter), tile_style(status, row.active)));
    }
    Line::from(spans)
}

fn render_grid(f: &mut Frame, snapshot: &Snapshot, area: Rect) {
    let lines: Vec<Line> = snapshot.rows.iter().map(grid_line).collect();

    let grid = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Guess the 5-letter word ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(grid, area);
}

fn render_status(f: &mut Frame, snapshot: &Snapshot, area: Rect) {
    let answer = snapshot
        .answer
        .as_ref()
        .map_or_else(String::new, |word| word.text().to_string());

    let (text, color) = match snapshot.state {
        GameState::Playing => (
            "Type a word and press Enter.".to_string(),
            Color::White,
        ),
        GameState::Won => (format!("You won! The word was {answer}."), Color::Green),
        GameState::Lost => (format!("You lost. The word was {answer}."), Color::Red),
    };

    let status = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status, area);
}

fn key_style(status: KeyStatus) -> Style {
    match status {
        KeyStatus::Correct => Style::default().fg(Color::Black).bg(Color::Green),
        KeyStatus::Present => Style::default().fg(Color::Black).bg(Color::Yellow),
        KeyStatus::Absent => Style::default().fg(Color::Gray).bg(Color::DarkGray),
        KeyStatus::Unused => Style::default().fg(Color::White),
    }
}

fn render_keyboard(f: &mut Frame, snapshot: &Snapshot, area: Rect) {
    let lines: Vec<Line> = KEY_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .flat_map(|letter| {
                    [
                        Span::styled(
                            format!(" {letter} "),
                            key_style(snapshot.keys.get(letter)),
                        ),
                        Span::raw(" "),
                    ]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL),
    );
    f.render_widget(keyboard, area);
}

fn render_help(f: &mut Frame, area: Rect) {
    let help = Paragraph::new(
        "Enter: Submit | F1: Hard Mode | F2: Timer | F3: Reset Timer | F5: New Game | Esc: Quit",
    )
    .alignment(Alignment::Center)
    .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}
