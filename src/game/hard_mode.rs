//! Hard mode rules
//!
//! In hard mode every guess must reuse what the previous guess revealed:
//! greens stay in place and yellows must appear somewhere in the new guess.
//! Only the most recent guess matters; hints from earlier guesses are not
//! accumulated.

use crate::core::{Feedback, LetterStatus, Word, evaluate};
use std::fmt;

/// Constraint derived from the last submitted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HardModeConstraint {
    last_guess: Word,
    feedback: Feedback,
}

/// First rule a candidate guess broke
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// A green letter from the last guess was moved or replaced
    MissingCorrect { position: usize, letter: char },
    /// A yellow letter from the last guess was not reused
    MissingPresent { letter: char },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingCorrect { position, letter } => {
                write!(f, "letter {} must be {letter}", position + 1)
            }
            Self::MissingPresent { letter } => write!(f, "guess must contain {letter}"),
        }
    }
}

impl HardModeConstraint {
    /// Derive the constraint from the guess history
    ///
    /// Returns `None` for an empty history: the first guess is unconstrained.
    #[must_use]
    pub fn derive(history: &[Word], target: &Word) -> Option<Self> {
        history.last().map(|last_guess| Self {
            feedback: evaluate(last_guess, target),
            last_guess: last_guess.clone(),
        })
    }

    /// The guess this constraint was derived from
    #[must_use]
    pub const fn last_guess(&self) -> &Word {
        &self.last_guess
    }

    /// Check a candidate guess against the constraint
    ///
    /// Positions are scanned left to right. Each candidate letter consumes at
    /// most one matching yellow from the last guess; after the scan every
    /// yellow must have been consumed.
    ///
    /// # Errors
    ///
    /// Returns the first [`Violation`] found.
    pub fn check(&self, candidate: &Word) -> Result<(), Violation> {
        let mut required: Vec<u8> = self
            .last_guess
            .chars()
            .iter()
            .zip(self.feedback.statuses())
            .filter(|&(_, &status)| status == LetterStatus::Present)
            .map(|(&letter, _)| letter)
            .collect();

        for (position, &letter) in candidate.chars().iter().enumerate() {
            if let Some(idx) = required.iter().position(|&r| r == letter) {
                required.swap_remove(idx);
            }

            let expected = self.last_guess.char_at(position);
            if self.feedback[position] == LetterStatus::Correct && expected != letter {
                return Err(Violation::MissingCorrect {
                    position,
                    letter: char::from(expected),
                });
            }
        }

        match required.first() {
            Some(&letter) => Err(Violation::MissingPresent {
                letter: char::from(letter),
            }),
            None => Ok(()),
        }
    }

    /// Check if a candidate guess satisfies the constraint
    #[must_use]
    pub fn is_satisfied_by(&self, candidate: &Word) -> bool {
        self.check(candidate).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn crane_vs_trace() -> HardModeConstraint {
        // C present, R/A/E correct, N absent
        HardModeConstraint::derive(&[word("crane")], &word("trace")).unwrap()
    }

    #[test]
    fn empty_history_has_no_constraint() {
        assert!(HardModeConstraint::derive(&[], &word("trace")).is_none());
    }

    #[test]
    fn uses_only_last_guess() {
        let history = [word("robot"), word("crane")];
        let constraint = HardModeConstraint::derive(&history, &word("trace")).unwrap();
        assert_eq!(constraint.last_guess().text(), "CRANE");
    }

    #[test]
    fn accepts_guess_keeping_greens_and_yellows() {
        let constraint = crane_vs_trace();
        assert_eq!(constraint.check(&word("crate")), Ok(()));
        assert!(constraint.is_satisfied_by(&word("trace")));
    }

    #[test]
    fn rejects_moved_green() {
        let constraint = crane_vs_trace();
        assert_eq!(
            constraint.check(&word("clave")),
            Err(Violation::MissingCorrect {
                position: 1,
                letter: 'R'
            })
        );
    }

    #[test]
    fn rejects_missing_yellow() {
        let constraint = crane_vs_trace();
        assert_eq!(
            constraint.check(&word("brave")),
            Err(Violation::MissingPresent { letter: 'C' })
        );
    }

    #[test]
    fn absent_letters_may_be_reused() {
        // N was gray; hard mode does not forbid it
        let constraint = crane_vs_trace();
        assert!(constraint.is_satisfied_by(&word("crane")));
    }

    #[test]
    fn repeated_yellows_need_repeated_letters() {
        // SPEED vs ERASE: S, E, E are yellow
        let constraint = HardModeConstraint::derive(&[word("speed")], &word("erase")).unwrap();

        assert!(constraint.is_satisfied_by(&word("erase")));
        assert!(constraint.is_satisfied_by(&word("geese")));
        assert_eq!(
            constraint.check(&word("sense")),
            Ok(()),
            "S and two E's are all present"
        );
        assert_eq!(
            constraint.check(&word("slate")),
            Err(Violation::MissingPresent { letter: 'E' })
        );
    }

    #[test]
    fn green_letter_also_consumes_a_yellow() {
        // ROBOT vs FLOOR: R, O yellow, second O green
        let constraint = HardModeConstraint::derive(&[word("robot")], &word("floor")).unwrap();
        assert!(constraint.is_satisfied_by(&word("floor")));
        // The single O sits on the green position and still counts for the yellow
        assert!(constraint.is_satisfied_by(&word("rumor")));
        assert_eq!(
            constraint.check(&word("flood")),
            Err(Violation::MissingPresent { letter: 'R' })
        );
    }

    #[test]
    fn violation_messages() {
        let moved = Violation::MissingCorrect {
            position: 1,
            letter: 'R',
        };
        assert_eq!(moved.to_string(), "letter 2 must be R");
        assert_eq!(
            Violation::MissingPresent { letter: 'C' }.to_string(),
            "guess must contain C"
        );
    }
}
