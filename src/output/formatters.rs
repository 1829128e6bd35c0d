//! Formatting utilities for terminal output

use crate::core::{KEYBOARD_ROWS, KeyState, Tag, Verdict, Word};
use colored::{ColoredString, Colorize};

/// A single letter tile colored by its tag
#[must_use]
pub fn tile(letter: u8, tag: Option<Tag>) -> ColoredString {
    let text = format!(" {} ", char::from(letter.to_ascii_uppercase()));
    match tag {
        Some(Tag::Correct) => text.black().on_green().bold(),
        Some(Tag::Present) => text.black().on_yellow().bold(),
        Some(Tag::Absent) => text.white().on_bright_black(),
        None => text.normal(),
    }
}

/// A guess rendered as five colored tiles
#[must_use]
pub fn verdict_row(guess: &Word, verdict: &Verdict) -> String {
    guess
        .chars()
        .iter()
        .zip(verdict.tags())
        .map(|(&letter, &tag)| tile(letter, Some(tag)).to_string())
        .collect()
}

/// The on-screen keyboard, one line per row, indented like a real keyboard
#[must_use]
pub fn keyboard_lines(keys: &KeyState) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let keys: String = row
                .bytes()
                .map(|letter| tile(letter, keys.get(letter)).to_string())
                .collect();
            format!("{}{keys}", " ".repeat(indent * 2))
        })
        .collect()
}

/// Tag counts for a verdict, e.g. "3 correct, 1 present, 1 absent"
#[must_use]
pub fn verdict_summary(verdict: &Verdict) -> String {
    format!(
        "{} correct, {} present, {} absent",
        verdict.count(Tag::Correct),
        verdict.count(Tag::Present),
        verdict.count(Tag::Absent)
    )
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
