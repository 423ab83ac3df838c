//! Command implementations

pub mod evaluate;
pub mod replay;
pub mod simple;

pub use evaluate::{EvaluationResult, evaluate_guess};
pub use replay::{ReplayConfig, ReplayResult, ReplayStep, replay};
pub use simple::run_simple;
