//! Error types for the game core

use crate::core::WordError;
use thiserror::Error;

/// Errors the game core can surface to its host
///
/// Rejected or ignored input is not an error; see [`crate::game::Outcome`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// The word selector was given no candidate words
    #[error("the candidate word pool is empty")]
    InvalidPool,

    #[error("invalid word: {0}")]
    InvalidWord(#[from] WordError),
}
