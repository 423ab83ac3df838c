//! Display functions for command results

use super::formatters::{empty_row, feedback_code, format_feedback, format_keyboard, format_row};
use crate::commands::{EvaluationResult, ReplayResult, ReplayStep};
use crate::game::{GameState, Snapshot};
use colored::Colorize;
use std::io::{self, Write};

/// Write the guess grid followed by the keyboard
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_board<W: Write>(out: &mut W, snapshot: &Snapshot) -> io::Result<()> {
    for row in &snapshot.rows {
        let line = if row.letters.is_empty() && !row.active {
            empty_row()
        } else {
            format_row(row)
        };
        writeln!(out, "  {line}")?;
    }

    writeln!(out)?;
    for line in format_keyboard(&snapshot.keys) {
        writeln!(out, "  {line}")?;
    }
    Ok(())
}

/// Print the result of evaluating one guess
pub fn print_evaluation(result: &EvaluationResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Guess {} against {}",
        result.guess.text().bright_white().bold(),
        result.target.text().bright_yellow().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    println!("\n  {}", format_feedback(&result.guess, result.feedback));
    println!(
        "\n  {}  {}",
        result.feedback.to_emoji(),
        feedback_code(result.feedback).bright_black()
    );
    println!(
        "  Correct: {}  Present: {}",
        result.feedback.count_correct().to_string().green(),
        result.feedback.count_present().to_string().yellow()
    );
}

/// Print every step of a replayed game and how it ended
pub fn print_replay_result(result: &ReplayResult) {
    println!("\n{}", "═".repeat(50).cyan());
    println!(
        " {} {} ",
        "REPLAY:".bright_cyan().bold(),
        result.target.text().bright_yellow().bold()
    );
    println!("{}", "═".repeat(50).cyan());

    let mut attempt = 0;
    for step in &result.steps {
        match step {
            ReplayStep::Accepted { guess, feedback } => {
                attempt += 1;
                println!(
                    "\nTurn {attempt}: {} {}",
                    format_feedback(guess, *feedback),
                    feedback.to_emoji()
                );
            }
            ReplayStep::Rejected { entry, rejection } => {
                println!(
                    "\n{} {}",
                    format!("Rejected {entry}:").red(),
                    rejection.to_string().red()
                );
            }
            ReplayStep::Ignored { input } => {
                println!("\n{}", format!("Ignored {input:?}: no letters").bright_black());
            }
        }
    }

    println!();
    for line in format_keyboard(&result.keys) {
        println!("  {line}");
    }

    println!();
    match result.state {
        GameState::Won => println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.attempts())
                .green()
                .bold()
        ),
        GameState::Lost => println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.attempts())
                .red()
                .bold()
        ),
        GameState::Playing => println!(
            "{}",
            format!("… Still playing after {} guesses", result.attempts()).yellow()
        ),
    }

    if result.unplayed > 0 {
        println!(
            "{}",
            format!("{} guesses not played: the game was already over", result.unplayed)
                .bright_black()
        );
    }
}
