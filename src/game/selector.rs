//! Target word selection
//!
//! The selector runs once when a game starts and once per reset.

use crate::core::Word;
use crate::error::GameError;
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;

/// Source of target words for new games
pub trait WordSelector {
    /// Pick the target for the next game
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidPool`] if there is nothing to pick from.
    fn select(&mut self) -> Result<Word, GameError>;
}

/// Uniform random choice over a candidate pool
pub struct RandomSelector {
    pool: Vec<Word>,
    rng: StdRng,
}

impl RandomSelector {
    /// Create a selector over `pool`
    ///
    /// With a seed the sequence of targets is reproducible; without one the
    /// generator is seeded from the OS.
    #[must_use]
    pub fn new(pool: Vec<Word>, seed: Option<u64>) -> Self {
        let rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        Self { pool, rng }
    }

    /// Number of candidate words
    #[must_use]
    pub fn pool_size(&self) -> usize {
        self.pool.len()
    }
}

impl WordSelector for RandomSelector {
    fn select(&mut self) -> Result<Word, GameError> {
        self.pool
            .choose(&mut self.rng)
            .cloned()
            .ok_or(GameError::InvalidPool)
    }
}

/// Hands out a fixed sequence of targets, starting over at the end
///
/// Lets a caller decide the target up front, e.g. to replay a known game.
pub struct ScriptedSelector {
    targets: Vec<Word>,
    next: usize,
}

impl ScriptedSelector {
    #[must_use]
    pub const fn new(targets: Vec<Word>) -> Self {
        Self { targets, next: 0 }
    }
}

impl WordSelector for ScriptedSelector {
    fn select(&mut self) -> Result<Word, GameError> {
        let word = self
            .targets
            .get(self.next)
            .cloned()
            .ok_or(GameError::InvalidPool)?;
        self.next = (self.next + 1) % self.targets.len();
        Ok(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::{ANSWERS, loader::words_from_slice};

    fn words(texts: &[&str]) -> Vec<Word> {
        words_from_slice(texts)
    }

    #[test]
    fn random_selector_picks_from_pool() {
        let pool = words(&["crane", "slate", "trace"]);
        let mut selector = RandomSelector::new(pool.clone(), Some(7));

        for _ in 0..20 {
            let word = selector.select().unwrap();
            assert!(pool.contains(&word));
        }
    }

    #[test]
    fn random_selector_empty_pool_fails() {
        let mut selector = RandomSelector::new(Vec::new(), Some(1));
        assert_eq!(selector.select(), Err(GameError::InvalidPool));
    }

    #[test]
    fn random_selector_same_seed_same_sequence() {
        let pool = words_from_slice(ANSWERS);
        let mut first = RandomSelector::new(pool.clone(), Some(42));
        let mut second = RandomSelector::new(pool, Some(42));

        for _ in 0..10 {
            assert_eq!(first.select().unwrap(), second.select().unwrap());
        }
    }

    #[test]
    fn random_selector_covers_pool() {
        let pool = words(&["crane", "slate"]);
        let mut selector = RandomSelector::new(pool.clone(), Some(3));
        let picked: Vec<Word> = (0..64).map(|_| selector.select().unwrap()).collect();

        assert!(pool.iter().all(|w| picked.contains(w)));
        assert_eq!(selector.pool_size(), 2);
    }

    #[test]
    fn scripted_selector_cycles() {
        let mut selector = ScriptedSelector::new(words(&["crane", "slate"]));

        assert_eq!(selector.select().unwrap().text(), "CRANE");
        assert_eq!(selector.select().unwrap().text(), "SLATE");
        assert_eq!(selector.select().unwrap().text(), "CRANE");
    }

    #[test]
    fn scripted_selector_empty_fails() {
        let mut selector = ScriptedSelector::new(Vec::new());
        assert_eq!(selector.select(), Err(GameError::InvalidPool));
    }
}
