//! Core domain types for Wordle
//!
//! This module contains the fundamental domain types with no I/O.
//! Everything here is pure: the same guess and target always produce the same feedback.

mod feedback;
mod keys;
mod status;
mod word;

pub use feedback::{Feedback, evaluate};
pub use keys::KeyStatuses;
pub use status::{KeyStatus, LetterStatus};
pub use word::{Word, WordError};

/// Number of letters in every word
pub const WORD_LENGTH: usize = 5;

/// Number of guesses a player gets before the game is lost
pub const MAX_ATTEMPTS: usize = 6;
