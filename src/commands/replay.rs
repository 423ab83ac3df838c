//! Replay command
//!
//! Plays a fixed list of guesses against a known target through the normal
//! game controller, as if each guess were typed and submitted.

use crate::core::{Feedback, KeyStatuses, Word};
use crate::error::GameError;
use crate::game::{Game, GameState, Input, Outcome, Rejection, ScriptedSelector, Signal};
use tracing::debug;

/// Configuration for a replay
pub struct ReplayConfig {
    pub target: String,
    pub guesses: Vec<String>,
    pub hard_mode: bool,
}

/// What happened to one submitted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplayStep {
    Accepted { guess: Word, feedback: Feedback },
    Rejected { entry: String, rejection: Rejection },
    /// Nothing usable was typed
    Ignored { input: String },
}

/// Result of replaying a game
pub struct ReplayResult {
    pub target: Word,
    pub steps: Vec<ReplayStep>,
    pub state: GameState,
    pub keys: KeyStatuses,
    /// Guesses left over after the game ended
    pub unplayed: usize,
}

impl ReplayResult {
    /// Number of guesses that made it into the history
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.steps
            .iter()
            .filter(|step| matches!(step, ReplayStep::Accepted { .. }))
            .count()
    }
}

/// Replay `config.guesses` against `config.target`
///
/// Each guess is typed letter by letter, so characters outside `A`-`Z` and
/// letters past the fifth are dropped just like keystrokes would be. A
/// rejected guess is erased before the next one is typed.
///
/// # Errors
///
/// Returns an error if the target is not a valid 5-letter word.
pub fn replay(config: ReplayConfig) -> Result<ReplayResult, GameError> {
    let target = Word::new(config.target)?;
    let mut game = Game::new(ScriptedSelector::new(vec![target.clone()]), config.hard_mode)?;
    let mut steps = Vec::with_capacity(config.guesses.len());
    let mut played = 0;

    for input in &config.guesses {
        if game.state().is_over() {
            break;
        }
        played += 1;

        for ch in input.chars() {
            game.handle_input(Input::Letter(ch.to_ascii_uppercase()));
        }
        let entry = game.entry().to_string();

        let step = match game.handle_input(Input::Enter) {
            Outcome::Accepted { feedback, .. } => {
                let guess = Word::new(entry)?;
                ReplayStep::Accepted { guess, feedback }
            }
            Outcome::Rejected(rejection) => {
                clear_entry(&mut game);
                for signal in Signal::ALL {
                    game.clear_signal(signal);
                }
                ReplayStep::Rejected { entry, rejection }
            }
            Outcome::Ignored | Outcome::Edited => ReplayStep::Ignored {
                input: input.clone(),
            },
        };
        debug!(?step, "replayed guess");
        steps.push(step);
    }

    Ok(ReplayResult {
        target,
        steps,
        state: game.state(),
        keys: game.key_statuses(),
        unplayed: config.guesses.len() - played,
    })
}

fn clear_entry(game: &mut Game<ScriptedSelector>) {
    while game.handle_input(Input::Backspace) == Outcome::Edited {}
}
