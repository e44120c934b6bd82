//! Formatting utilities for terminal output

use crate::core::{Feedback, Mark, Word};
use colored::Colorize;

/// Render a guess as colored tiles, one uppercase letter per mark
#[must_use]
pub fn colored_guess(word: &Word, feedback: &Feedback) -> String {
    word.text()
        .to_uppercase()
        .chars()
        .zip(feedback.marks())
        .map(|(letter, mark)| {
            let tile = format!(" {letter} ");
            match mark {
                Mark::Exact => tile.black().on_green().bold().to_string(),
                Mark::Present => tile.black().on_yellow().bold().to_string(),
                Mark::Absent => tile.white().on_bright_black().to_string(),
            }
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max).max(0.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a probability in `[0, 1]` as a bar
#[must_use]
pub fn probability_bar(probability: f64, width: usize) -> String {
    create_progress_bar(probability, 1.0, width)
}
