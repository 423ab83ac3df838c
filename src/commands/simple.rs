//! Simple interactive CLI mode
//!
//! Line-based game without the TUI: each line typed is one guess.

use crate::game::{Game, GameState, Input, Outcome, Signal, WordSelector};
use crate::output::display::write_board;
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{BufRead, Write};

/// Run the line-based game loop until `:quit` or end of input
///
/// Each line is typed into the game letter by letter and submitted, so it
/// goes through exactly the same rules as the full-screen mode.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails, or if a new
/// game cannot pick a target.
pub fn run_simple<S, R, W>(game: &mut Game<S>, input: R, out: &mut W) -> Result<()>
where
    S: WordSelector,
    R: BufRead,
    W: Write,
{
    writeln!(out, "\n╔══════════════════════════════════════════╗")?;
    writeln!(out, "║        Mini Wordle - Simple Mode         ║")?;
    writeln!(out, "╚══════════════════════════════════════════╝\n")?;
    writeln!(out, "Guess the 5-letter word. Six tries.")?;
    writeln!(
        out,
        "Commands: ':new' for a new game, ':hard' to toggle hard mode, ':quit' to exit\n"
    )?;

    let mut lines = input.lines();

    loop {
        write!(out, "{}: ", prompt(game))?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            return Ok(());
        };
        let line = line.context("failed to read input")?;

        match line.trim().to_lowercase().as_str() {
            "" => {}
            ":quit" | ":q" | ":exit" => {
                writeln!(out, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            }
            ":new" | ":n" => {
                game.reset()?;
                writeln!(out, "\n🔄 New game started!\n")?;
            }
            ":hard" => {
                game.set_hard_mode(!game.hard_mode());
                let label = if game.hard_mode() { "on" } else { "off" };
                writeln!(out, "Hard mode {label}")?;
            }
            guess => play_line(game, guess, out)?,
        }
    }
}

fn prompt<S: WordSelector>(game: &Game<S>) -> String {
    match game.state() {
        GameState::Playing => format!(
            "Guess {}/{}",
            game.history().len() + 1,
            crate::core::MAX_ATTEMPTS
        ),
        GameState::Won | GameState::Lost => "Command".to_string(),
    }
}

fn play_line<S: WordSelector, W: Write>(game: &mut Game<S>, guess: &str, out: &mut W) -> Result<()> {
    if game.state().is_over() {
        writeln!(out, "The game is over. Type ':new' to play again.")?;
        return Ok(());
    }

    for ch in guess.chars() {
        game.handle_input(Input::Letter(ch.to_ascii_uppercase()));
    }

    match game.handle_input(Input::Enter) {
        Outcome::Accepted { state, .. } => {
            writeln!(out)?;
            write_board(out, &game.snapshot())?;
            writeln!(out)?;
            match state {
                GameState::Won => {
                    let attempts = game.history().len();
                    writeln!(
                        out,
                        "{}",
                        format!(
                            "🎉 You won in {attempts} {}! The word was {}.",
                            if attempts == 1 { "guess" } else { "guesses" },
                            game.target()
                        )
                        .green()
                        .bold()
                    )?;
                }
                GameState::Lost => {
                    writeln!(
                        out,
                        "{}",
                        format!("❌ You lost. The word was {}.", game.target())
                            .red()
                            .bold()
                    )?;
                }
                GameState::Playing => {}
            }
        }
        Outcome::Rejected(rejection) => {
            writeln!(out, "{}", format!("❌ {rejection}").red())?;
            // Nothing lingers on screen in line mode, so lower it right away
            game.clear_signal(Signal::ShortEntry);
            game.clear_signal(Signal::HardModeViolation);
        }
        Outcome::Ignored | Outcome::Edited => {
            writeln!(out, "Type letters A-Z, or a ':' command.")?;
        }
    }

    // Each line is a whole guess; drop whatever a rejected line left behind
    while game.handle_input(Input::Backspace) == Outcome::Edited {}
    Ok(())
}
