//! Per-tile and per-key feedback statuses

/// Feedback for a single tile of the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterStatus {
    /// Right letter in the right position
    Correct,
    /// Letter is in the target but somewhere else
    Present,
    /// Letter is not in the target (or all its occurrences are used up)
    Absent,
    /// Unfilled tile in the active or a future row
    Empty,
}

/// Best feedback seen so far for one keyboard letter
///
/// Variants are declared in rank order so the derived `Ord` matches
/// `Unused < Absent < Present < Correct`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum KeyStatus {
    #[default]
    Unused,
    Absent,
    Present,
    Correct,
}

impl KeyStatus {
    /// Numeric rank used when merging feedback across guesses
    #[inline]
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Unused => 0,
            Self::Absent => 1,
            Self::Present => 2,
            Self::Correct => 3,
        }
    }
}

impl From<LetterStatus> for KeyStatus {
    fn from(status: LetterStatus) -> Self {
        match status {
            LetterStatus::Correct => Self::Correct,
            LetterStatus::Present => Self::Present,
            LetterStatus::Absent => Self::Absent,
            LetterStatus::Empty => Self::Unused,
        }
    }
}
