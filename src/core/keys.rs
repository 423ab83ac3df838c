//! Keyboard feedback aggregated across guesses

use super::{KeyStatus, Word, evaluate};
use rustc_hash::FxHashMap;

/// Best status per letter over every submitted guess
///
/// A letter only ever moves up the rank order, so a key that turned green
/// stays green even if a later guess shows the same letter as yellow or gray.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyStatuses {
    statuses: FxHashMap<u8, KeyStatus>,
}

impl KeyStatuses {
    /// Create an empty map where every key is unused
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold the feedback of every guess in `history` against `target`
    #[must_use]
    pub fn from_history(history: &[Word], target: &Word) -> Self {
        let mut keys = Self::new();
        for guess in history {
            keys.record(guess, target);
        }
        keys
    }

    /// Merge the feedback of one more guess
    pub fn record(&mut self, guess: &Word, target: &Word) {
        let feedback = evaluate(guess, target);
        for (&letter, &status) in guess.chars().iter().zip(feedback.statuses()) {
            self.upgrade(letter, KeyStatus::from(status));
        }
    }

    fn upgrade(&mut self, letter: u8, next: KeyStatus) {
        let current = self.statuses.entry(letter).or_default();
        if next.rank() > current.rank() {
            *current = next;
        }
    }

    /// Status of a letter key; letters never guessed are unused
    ///
    /// Lowercase letters are looked up as their uppercase key.
    #[must_use]
    pub fn get(&self, letter: char) -> KeyStatus {
        u8::try_from(letter.to_ascii_uppercase())
            .ok()
            .and_then(|byte| self.statuses.get(&byte).copied())
            .unwrap_or_default()
    }
}
