//! Game controller
//!
//! The state machine that turns input events into guesses, plus the hard
//! mode rules, target selection and render snapshots it relies on.

mod controller;
mod hard_mode;
pub mod selector;
mod snapshot;
mod state;

pub use controller::Game;
pub use hard_mode::{HardModeConstraint, Violation};
pub use selector::{RandomSelector, ScriptedSelector, WordSelector};
pub use snapshot::{Row, Snapshot};
pub use state::{GameState, Input, Outcome, Rejection, Signal, Signals};
