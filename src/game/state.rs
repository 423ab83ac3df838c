//! Events, outcomes and states of the game state machine

use super::hard_mode::Violation;
use crate::core::Feedback;
use std::fmt;

/// Progress of the current game
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum GameState {
    #[default]
    Playing,
    Won,
    Lost,
}

impl GameState {
    /// Check if the game has ended
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Playing => "playing",
            Self::Won => "won",
            Self::Lost => "lost",
        };
        f.write_str(label)
    }
}

/// A discrete input event from the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Append one letter to the entry buffer
    Letter(char),
    /// Delete the last letter of the entry buffer
    Backspace,
    /// Submit the entry buffer as a guess
    Enter,
}

impl Input {
    /// Parse a key token: `"ENTER"`, `"BACKSPACE"` or a single `A`-`Z` letter
    ///
    /// # Examples
    /// ```
    /// use mini_wordle::game::Input;
    ///
    /// assert_eq!(Input::from_token("ENTER"), Some(Input::Enter));
    /// assert_eq!(Input::from_token("Q"), Some(Input::Letter('Q')));
    /// assert_eq!(Input::from_token("q"), None);
    /// ```
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "ENTER" => Some(Self::Enter),
            "BACKSPACE" => Some(Self::Backspace),
            _ => {
                let mut chars = token.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) if ch.is_ascii_uppercase() => Some(Self::Letter(ch)),
                    _ => None,
                }
            }
        }
    }
}

/// Advisory flags the host shows and clears after a while
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signal {
    /// A guess with fewer than five letters was submitted
    ShortEntry,
    /// A guess broke the hard mode rules
    HardModeViolation,
}

impl Signal {
    pub const ALL: [Self; 2] = [Self::ShortEntry, Self::HardModeViolation];
}

/// Which signals are currently raised
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Signals {
    pub short_entry: bool,
    pub hard_mode_violation: bool,
}

impl Signals {
    #[must_use]
    pub const fn is_raised(self, signal: Signal) -> bool {
        match signal {
            Signal::ShortEntry => self.short_entry,
            Signal::HardModeViolation => self.hard_mode_violation,
        }
    }

    pub(crate) fn set(&mut self, signal: Signal, raised: bool) {
        match signal {
            Signal::ShortEntry => self.short_entry = raised,
            Signal::HardModeViolation => self.hard_mode_violation = raised,
        }
    }
}

/// Why a submission was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Entry buffer had between one and four letters
    ShortEntry,
    /// Entry broke the constraint from the previous guess
    HardModeViolation(Violation),
}

impl Rejection {
    /// The signal raised for this rejection
    #[must_use]
    pub const fn signal(self) -> Signal {
        match self {
            Self::ShortEntry => Signal::ShortEntry,
            Self::HardModeViolation(_) => Signal::HardModeViolation,
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShortEntry => write!(f, "Please enter a 5 letter guess"),
            Self::HardModeViolation(violation) => {
                write!(f, "Hard mode: {violation}")
            }
        }
    }
}

/// Result of feeding one input event to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing changed
    Ignored,
    /// The entry buffer changed
    Edited,
    /// The submission was refused; only the matching signal changed
    Rejected(Rejection),
    /// The guess was recorded
    Accepted { feedback: Feedback, state: GameState },
}
