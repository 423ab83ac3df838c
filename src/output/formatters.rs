//! Formatting utilities for terminal output

use crate::core::{Feedback, KeyStatus, KeyStatuses, LetterStatus, WORD_LENGTH, Word};
use crate::game::Row;
use colored::{ColoredString, Colorize};

/// Letter keys as laid out on a QWERTY keyboard
pub const KEY_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Feedback as a compact code: G = green, Y = yellow, - = gray
#[must_use]
pub fn feedback_code(feedback: Feedback) -> String {
    feedback
        .statuses()
        .iter()
        .map(|status| match status {
            LetterStatus::Correct => 'G',
            LetterStatus::Present => 'Y',
            LetterStatus::Absent => '-',
            LetterStatus::Empty => ' ',
        })
        .collect()
}

/// Text inside one tile: the letter padded to three columns
#[must_use]
pub fn tile_text(letter: Option<char>) -> String {
    format!(" {} ", letter.unwrap_or(' '))
}

/// A single colored tile
#[must_use]
pub fn colored_tile(letter: Option<char>, status: LetterStatus) -> ColoredString {
    let text = tile_text(letter);
    match status {
        LetterStatus::Correct => text.black().on_green().bold(),
        LetterStatus::Present => text.black().on_yellow().bold(),
        LetterStatus::Absent => text.white().on_bright_black(),
        LetterStatus::Empty => text.white().on_black(),
    }
}

/// A guess with its feedback as a line of colored tiles
#[must_use]
pub fn format_feedback(guess: &Word, feedback: Feedback) -> String {
    guess
        .text()
        .chars()
        .zip(feedback.statuses())
        .map(|(letter, &status)| colored_tile(Some(letter), status).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// A grid row as a line of colored tiles
#[must_use]
pub fn format_row(row: &Row) -> String {
    row.tiles()
        .map(|(letter, status)| colored_tile(letter, status).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn colored_key(letter: char, status: KeyStatus) -> ColoredString {
    let text = letter.to_string();
    match status {
        KeyStatus::Correct => text.green().bold(),
        KeyStatus::Present => text.yellow().bold(),
        KeyStatus::Absent => text.bright_black(),
        KeyStatus::Unused => text.white(),
    }
}

/// The keyboard, one line per key row, each key colored by its best status
#[must_use]
pub fn format_keyboard(keys: &KeyStatuses) -> Vec<String> {
    KEY_ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let keys_line = row
                .chars()
                .map(|letter| colored_key(letter, keys.get(letter)).to_string())
                .collect::<Vec<_>>()
                .join(" ");
            format!("{}{keys_line}", " ".repeat(indent))
        })
        .collect()
}

/// Blank row used for guesses not made yet
#[must_use]
pub fn empty_row() -> String {
    vec![tile_text(None); WORD_LENGTH].join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::evaluate;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn feedback_code_marks_each_status() {
        let feedback = evaluate(&word("crane"), &word("trace"));
        assert_eq!(feedback_code(feedback), "YGG-G");

        let feedback = evaluate(&word("speed"), &word("erase"));
        assert_eq!(feedback_code(feedback), "Y-YY-");
    }

    #[test]
    fn tile_text_pads_letter() {
        assert_eq!(tile_text(Some('A')), " A ");
        assert_eq!(tile_text(None), "   ");
    }

    #[test]
    fn keyboard_has_every_letter_once() {
        let letters: String = KEY_ROWS.concat();
        assert_eq!(letters.len(), 26);
        assert!(('A'..='Z').all(|c| letters.contains(c)));
    }

    #[test]
    fn keyboard_lines_match_rows() {
        let lines = format_keyboard(&KeyStatuses::new());
        assert_eq!(lines.len(), KEY_ROWS.len());
        assert!(lines[0].contains('Q'));
        assert!(lines[2].contains('M'));
    }

    #[test]
    fn empty_row_width() {
        assert_eq!(empty_row().len(), WORD_LENGTH * 3 + WORD_LENGTH - 1);
    }
}
