//! Mini Wordle
//!
//! A single-player word-guessing game: six tries to find a hidden 5-letter
//! word, with per-letter feedback after every guess and an optional hard mode.
//!
//! # Quick Start
//!
//! ```rust
//! use mini_wordle::core::{LetterStatus, Word, evaluate};
//!
//! let guess = Word::new("crane").unwrap();
//! let target = Word::new("trace").unwrap();
//!
//! let feedback = evaluate(&guess, &target);
//! assert_eq!(feedback[1], LetterStatus::Correct);
//! assert_eq!(feedback.to_emoji(), "🟨🟩🟩⬜🟩");
//! ```

// Core domain types
pub mod core;

// Game state machine and hard mode rules
pub mod game;

pub mod error;

// Layered settings and log setup
pub mod config;
pub mod logging;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
