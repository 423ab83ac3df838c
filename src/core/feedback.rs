//! Guess evaluation
//!
//! Scores a guess against the target one tile at a time:
//! - Correct (green): right letter, right position
//! - Present (yellow): letter occurs elsewhere in the target
//! - Absent (gray): no unclaimed occurrence of the letter is left

use super::{LetterStatus, WORD_LENGTH, Word};
use rustc_hash::FxHashMap;
use std::fmt;
use std::ops::Index;

/// Feedback for one submitted guess
///
/// Holds exactly one status per position. Evaluation never produces
/// [`LetterStatus::Empty`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterStatus; WORD_LENGTH]);

impl Feedback {
    /// Feedback for a guess that equals the target
    pub const PERFECT: Self = Self([LetterStatus::Correct; WORD_LENGTH]);

    /// Calculate the feedback when `guess` is played against `target`
    ///
    /// Duplicate letters are handled the way Wordle does it.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and pool every unmatched target letter
    /// 2. Second pass: claim pooled letters for the remaining positions, left to right
    ///
    /// Exact matches must be reserved before any position claims a pooled letter,
    /// otherwise an early misplaced copy could steal the occurrence a later exact
    /// match needs.
    ///
    /// # Examples
    /// ```
    /// use mini_wordle::core::{Feedback, LetterStatus::*, Word};
    ///
    /// let guess = Word::new("speed").unwrap();
    /// let target = Word::new("erase").unwrap();
    /// let feedback = Feedback::calculate(&guess, &target);
    ///
    /// assert_eq!(feedback.statuses(), &[Present, Absent, Present, Present, Absent]);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, target: &Word) -> Self {
        let mut result = [LetterStatus::Absent; WORD_LENGTH];
        let mut remaining: FxHashMap<u8, u8> = FxHashMap::default();

        // First pass: greens, everything else goes into the pool
        for (i, (&g, &t)) in guess.chars().iter().zip(target.chars()).enumerate() {
            if g == t {
                result[i] = LetterStatus::Correct;
            } else {
                *remaining.entry(t).or_insert(0) += 1;
            }
        }

        // Second pass: yellows from whatever is left in the pool
        for (i, &g) in guess.chars().iter().enumerate() {
            if result[i] == LetterStatus::Correct {
                continue;
            }
            if let Some(count) = remaining.get_mut(&g)
                && *count > 0
            {
                result[i] = LetterStatus::Present;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// All statuses in position order
    #[inline]
    #[must_use]
    pub const fn statuses(&self) -> &[LetterStatus; WORD_LENGTH] {
        &self.0
    }

    /// Check if every position is correct
    #[inline]
    #[must_use]
    pub fn is_perfect(self) -> bool {
        self == Self::PERFECT
    }

    /// Count the number of green tiles
    #[must_use]
    pub fn count_correct(self) -> usize {
        self.count(LetterStatus::Correct)
    }

    /// Count the number of yellow tiles
    #[must_use]
    pub fn count_present(self) -> usize {
        self.count(LetterStatus::Present)
    }

    fn count(self, status: LetterStatus) -> usize {
        self.0.iter().filter(|&&s| s == status).count()
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩🟨"
    ///
    /// # Examples
    /// ```
    /// use mini_wordle::core::{Feedback, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let target = Word::new("trace").unwrap();
    /// assert_eq!(Feedback::calculate(&guess, &target).to_emoji(), "🟨🟩🟩⬜🟩");
    /// ```
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.0
            .iter()
            .map(|status| match status {
                LetterStatus::Correct => '🟩',
                LetterStatus::Present => '🟨',
                LetterStatus::Absent | LetterStatus::Empty => '⬜',
            })
            .collect()
    }
}

impl Index<usize> for Feedback {
    type Output = LetterStatus;

    fn index(&self, position: usize) -> &Self::Output {
        &self.0[position]
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_emoji())
    }
}

/// Evaluate `guess` against `target`
///
/// Shorthand for [`Feedback::calculate`].
#[inline]
#[must_use]
pub fn evaluate(guess: &Word, target: &Word) -> Feedback {
    Feedback::calculate(guess, target)
}
