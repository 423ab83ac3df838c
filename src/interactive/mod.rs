//! Full-screen terminal interface
//!
//! Hosts the game: maps keys to input events, owns the timers that lower
//! warning signals, and draws the grid and keyboard with ratatui.

mod app;
mod rendering;
pub mod timers;

pub use app::{Action, App, map_key, run_tui};
pub use rendering::ui;
