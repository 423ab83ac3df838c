//! TUI application state and logic

use super::timers::{SignalTimers, Stopwatch};
use crate::config::Config;
use crate::game::{Game, Input, Outcome, Rejection, Signal, Violation, WordSelector};
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
use std::time::{Duration, Instant};
use tracing::debug;

/// Longest wait for a key before redrawing
const MAX_POLL: Duration = Duration::from_millis(250);

/// Stopwatch resolution
const TIMER_INTERVAL: Duration = Duration::from_secs(1);

/// What a key press asks the application to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Input(Input),
    ToggleHardMode,
    ToggleTimer,
    RestartTimer,
    NewGame,
    Quit,
}

/// Translate a key press into an action
///
/// Letters are uppercased; keys with no meaning map to `None`.
#[must_use]
pub fn map_key(key: KeyEvent) -> Option<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if ctrl => Some(Action::Quit),
        KeyCode::Char('n') if ctrl => Some(Action::NewGame),
        KeyCode::Char(c) if !ctrl && c.is_ascii_alphabetic() => {
            Some(Action::Input(Input::Letter(c.to_ascii_uppercase())))
        }
        KeyCode::Enter => Some(Action::Input(Input::Enter)),
        KeyCode::Backspace => Some(Action::Input(Input::Backspace)),
        KeyCode::F(1) => Some(Action::ToggleHardMode),
        KeyCode::F(2) => Some(Action::ToggleTimer),
        KeyCode::F(3) => Some(Action::RestartTimer),
        KeyCode::F(5) => Some(Action::NewGame),
        KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

/// Application state
pub struct App<S: WordSelector> {
    pub game: Game<S>,
    pub timers: SignalTimers,
    pub stopwatch: Stopwatch,
    /// Reason shown while the hard mode signal is up
    pub violation: Option<Violation>,
    pub should_quit: bool,
}

impl<S: WordSelector> App<S> {
    #[must_use]
    pub fn new(game: Game<S>, config: &Config, now: Instant) -> Self {
        let mut stopwatch = Stopwatch::new(TIMER_INTERVAL);
        stopwatch.set_enabled(config.timer_mode, now);

        Self {
            game,
            timers: SignalTimers::new(config.short_entry_duration(), config.hard_mode_duration()),
            stopwatch,
            violation: None,
            should_quit: false,
        }
    }

    /// Apply one action at time `now`
    ///
    /// # Errors
    ///
    /// Returns an error if a new game cannot pick a target.
    pub fn handle_action(&mut self, action: Action, now: Instant) -> Result<()> {
        match action {
            Action::Input(input) => {
                if let Outcome::Rejected(rejection) = self.game.handle_input(input) {
                    if let Rejection::HardModeViolation(violation) = rejection {
                        self.violation = Some(violation);
                    }
                    self.timers.schedule(rejection.signal(), now);
                }
            }
            Action::ToggleHardMode => {
                let enabled = !self.game.hard_mode();
                self.game.set_hard_mode(enabled);
            }
            Action::ToggleTimer => {
                let enabled = !self.stopwatch.is_enabled();
                self.stopwatch.set_enabled(enabled, now);
                debug!(enabled, "timer toggled");
            }
            Action::RestartTimer => self.stopwatch.restart(now),
            Action::NewGame => {
                self.game.reset()?;
                self.stopwatch.restart(now);
            }
            Action::Quit => self.should_quit = true,
        }
        Ok(())
    }

    /// Lower expired signals and advance the stopwatch
    pub fn tick(&mut self, now: Instant) {
        for signal in self.timers.expire(now) {
            self.game.clear_signal(signal);
            if signal == Signal::HardModeViolation {
                self.violation = None;
            }
        }
        self.stopwatch.tick(now);
    }

    /// How long the event loop may block before something needs redrawing
    #[must_use]
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        [
            Some(MAX_POLL),
            self.timers.next_deadline(now),
            self.stopwatch.until_next_tick(now),
        ]
        .into_iter()
        .flatten()
        .min()
        .unwrap_or(MAX_POLL)
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: WordSelector>(app: App<S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

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

fn run_app<B, S>(terminal: &mut Terminal<B>, mut app: App<S>) -> Result<()>
where
    B: ratatui::backend::Backend,
    S: WordSelector,
{
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(app.poll_timeout(Instant::now()))?
            && let Event::Key(key) = event::read()?
            // Only process key press events (fixes Windows double-input bug)
            && key.kind == KeyEventKind::Press
            && let Some(action) = map_key(key)
        {
            app.handle_action(action, Instant::now())?;
        }

        app.tick(Instant::now());

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
