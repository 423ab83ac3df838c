//! Single guess evaluation command
//!
//! Scores one guess against a given target without playing a game.

use crate::core::{Feedback, Word, evaluate};
use crate::error::GameError;

/// Result of evaluating one guess
pub struct EvaluationResult {
    pub guess: Word,
    pub target: Word,
    pub feedback: Feedback,
}

/// Evaluate `guess` against `target`
///
/// # Errors
///
/// Returns an error if either word is not a valid 5-letter word.
pub fn evaluate_guess(guess: &str, target: &str) -> Result<EvaluationResult, GameError> {
    let guess = Word::new(guess)?;
    let target = Word::new(target)?;
    let feedback = evaluate(&guess, &target);

    Ok(EvaluationResult {
        guess,
        target,
        feedback,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterStatus::{Absent, Correct, Present};
    use crate::core::WordError;

    #[test]
    fn evaluates_case_insensitively() {
        let result = evaluate_guess("crane", "TRACE").unwrap();
        assert_eq!(result.guess.text(), "CRANE");
        assert_eq!(result.target.text(), "TRACE");
        assert_eq!(
            result.feedback.statuses(),
            &[Present, Correct, Correct, Absent, Correct]
        );
    }

    #[test]
    fn rejects_invalid_words() {
        assert!(matches!(
            evaluate_guess("cran", "trace"),
            Err(GameError::InvalidWord(WordError::InvalidLength(4)))
        ));
        assert!(evaluate_guess("crane", "tr4ce").is_err());
    }
}
