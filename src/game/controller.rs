//! The game state machine
//!
//! All mutation goes through the input methods; every call completes
//! synchronously and returns what happened as an [`Outcome`].

use super::hard_mode::HardModeConstraint;
use super::selector::WordSelector;
use super::snapshot::Snapshot;
use super::state::{GameState, Input, Outcome, Rejection, Signal, Signals};
use crate::core::{KeyStatuses, MAX_ATTEMPTS, WORD_LENGTH, Word, evaluate};
use crate::error::GameError;
use tracing::{debug, info};

/// One game of Wordle plus the selector that provides its targets
pub struct Game<S: WordSelector> {
    selector: S,
    target: Word,
    history: Vec<Word>,
    entry: String,
    state: GameState,
    hard_mode: bool,
    signals: Signals,
}

impl<S: WordSelector> Game<S> {
    /// Start a new game with a target from `selector`
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidPool`] if the selector has no words.
    pub fn new(mut selector: S, hard_mode: bool) -> Result<Self, GameError> {
        let target = selector.select()?;
        info!(hard_mode, "new game started");

        Ok(Self {
            selector,
            target,
            history: Vec::with_capacity(MAX_ATTEMPTS),
            entry: String::with_capacity(WORD_LENGTH),
            state: GameState::Playing,
            hard_mode,
            signals: Signals::default(),
        })
    }

    /// Feed one input event to the game
    pub fn handle_input(&mut self, input: Input) -> Outcome {
        match input {
            Input::Letter(ch) => self.submit_letter(ch),
            Input::Backspace => self.submit_backspace(),
            Input::Enter => self.submit_enter(),
        }
    }

    /// Append an `A`-`Z` letter to the entry buffer
    ///
    /// Ignored once the game is over, when the buffer is full, or for any
    /// other character.
    pub fn submit_letter(&mut self, ch: char) -> Outcome {
        if self.state != GameState::Playing
            || !ch.is_ascii_uppercase()
            || self.entry.len() >= WORD_LENGTH
        {
            return Outcome::Ignored;
        }
        self.entry.push(ch);
        Outcome::Edited
    }

    /// Delete the last letter of the entry buffer
    pub fn submit_backspace(&mut self) -> Outcome {
        if self.state != GameState::Playing {
            return Outcome::Ignored;
        }
        match self.entry.pop() {
            Some(_) => Outcome::Edited,
            None => Outcome::Ignored,
        }
    }

    /// Submit the entry buffer as a guess
    ///
    /// An empty buffer is ignored without raising a signal; a partial one is
    /// rejected as a short entry. In hard mode a full buffer must also satisfy
    /// the constraint derived from the previous guess.
    pub fn submit_enter(&mut self) -> Outcome {
        if self.state != GameState::Playing || self.entry.is_empty() {
            return Outcome::Ignored;
        }

        if self.entry.len() < WORD_LENGTH {
            return self.reject(Rejection::ShortEntry);
        }

        // The buffer only ever holds A-Z, so a full buffer is always a word
        let Ok(guess) = Word::new(self.entry.as_str()) else {
            return Outcome::Ignored;
        };

        if self.hard_mode
            && let Some(constraint) = self.hard_mode_constraint()
            && let Err(violation) = constraint.check(&guess)
        {
            return self.reject(Rejection::HardModeViolation(violation));
        }

        let feedback = evaluate(&guess, &self.target);
        let won = guess == self.target;
        self.history.push(guess);
        self.entry.clear();

        if won {
            self.state = GameState::Won;
            info!(guesses = self.history.len(), "game won");
        } else if self.history.len() >= MAX_ATTEMPTS {
            self.state = GameState::Lost;
            info!(answer = %self.target, "game lost");
        }

        debug!(
            attempt = self.history.len(),
            feedback = %feedback,
            state = %self.state,
            "guess accepted"
        );
        Outcome::Accepted {
            feedback,
            state: self.state,
        }
    }

    fn reject(&mut self, rejection: Rejection) -> Outcome {
        debug!(entry = %self.entry, reason = %rejection, "guess rejected");
        self.signals.set(rejection.signal(), true);
        Outcome::Rejected(rejection)
    }

    /// Start over with a fresh target, whatever the current state
    ///
    /// # Errors
    ///
    /// Returns the selector's error; the current game is left untouched.
    pub fn reset(&mut self) -> Result<(), GameError> {
        self.target = self.selector.select()?;
        self.history.clear();
        self.entry.clear();
        self.state = GameState::Playing;
        info!(hard_mode = self.hard_mode, "game reset");
        Ok(())
    }

    /// Constraint the next guess must satisfy in hard mode
    ///
    /// `None` before the first guess.
    #[must_use]
    pub fn hard_mode_constraint(&self) -> Option<HardModeConstraint> {
        HardModeConstraint::derive(&self.history, &self.target)
    }

    /// Turn hard mode on or off; applies from the next submission
    pub fn set_hard_mode(&mut self, enabled: bool) {
        self.hard_mode = enabled;
        debug!(enabled, "hard mode toggled");
    }

    #[must_use]
    pub const fn hard_mode(&self) -> bool {
        self.hard_mode
    }

    /// Lower a signal once the host is done showing it
    pub fn clear_signal(&mut self, signal: Signal) {
        self.signals.set(signal, false);
    }

    #[must_use]
    pub const fn signals(&self) -> Signals {
        self.signals
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Submitted guesses, oldest first
    #[must_use]
    pub fn history(&self) -> &[Word] {
        &self.history
    }

    /// Letters typed for the guess in progress
    #[must_use]
    pub fn entry(&self) -> &str {
        &self.entry
    }

    /// The hidden word
    ///
    /// Hosts should only reveal it once [`GameState::is_over`] holds.
    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    /// Best status per keyboard letter across all guesses
    #[must_use]
    pub fn key_statuses(&self) -> KeyStatuses {
        KeyStatuses::from_history(&self.history, &self.target)
    }

    /// Read-only view for rendering
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(self)
    }
}
