//! Read-only views of a game for hosts to render

use super::controller::Game;
use super::selector::WordSelector;
use super::state::{GameState, Signals};
use crate::core::{KeyStatuses, LetterStatus, MAX_ATTEMPTS, WORD_LENGTH, Word, evaluate};

/// One row of the guess grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Letters shown in the row; fewer than five for the active row
    pub letters: String,
    pub statuses: [LetterStatus; WORD_LENGTH],
    /// Row currently receiving typed letters
    pub active: bool,
}

impl Row {
    fn submitted(guess: &Word, target: &Word) -> Self {
        Self {
            letters: guess.text().to_string(),
            statuses: *evaluate(guess, target).statuses(),
            active: false,
        }
    }

    fn pending(letters: &str, active: bool) -> Self {
        Self {
            letters: letters.to_string(),
            statuses: [LetterStatus::Empty; WORD_LENGTH],
            active,
        }
    }

    /// Each tile as (letter, status); unfilled tiles have no letter
    pub fn tiles(&self) -> impl Iterator<Item = (Option<char>, LetterStatus)> + '_ {
        let mut letters = self.letters.chars();
        self.statuses
            .iter()
            .map(move |&status| (letters.next(), status))
    }
}

/// Everything a host needs to draw the game
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub state: GameState,
    pub history: Vec<Word>,
    pub entry: String,
    pub hard_mode: bool,
    pub signals: Signals,
    /// Always `MAX_ATTEMPTS` rows: submitted, then active, then future
    pub rows: Vec<Row>,
    pub keys: KeyStatuses,
    /// The target, revealed only once the game is over
    pub answer: Option<Word>,
}

impl Snapshot {
    pub(crate) fn capture<S: WordSelector>(game: &Game<S>) -> Self {
        let target = game.target();
        let history = game.history();
        let playing = game.state() == GameState::Playing;

        let rows = (0..MAX_ATTEMPTS)
            .map(|index| match history.get(index) {
                Some(guess) => Row::submitted(guess, target),
                None if index == history.len() && playing => Row::pending(game.entry(), true),
                None => Row::pending("", false),
            })
            .collect();

        Self {
            state: game.state(),
            history: history.to_vec(),
            entry: game.entry().to_string(),
            hard_mode: game.hard_mode(),
            signals: game.signals(),
            rows,
            keys: game.key_statuses(),
            answer: game.state().is_over().then(|| target.clone()),
        }
    }

    /// The row receiving typed letters, if the game is still running
    #[must_use]
    pub fn active_row(&self) -> Option<&Row> {
        self.rows.iter().find(|row| row.active)
    }
}
