//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterFeedback, Word};
use colored::{ColoredString, Colorize};

/// Color a single letter tile by its feedback
#[must_use]
pub fn colored_tile(letter: u8, feedback: LetterFeedback) -> ColoredString {
    let text = format!(" {} ", char::from(letter.to_ascii_uppercase()));
    match feedback {
        LetterFeedback::Correct => text.black().on_green().bold(),
        LetterFeedback::Present => text.black().on_yellow().bold(),
        LetterFeedback::Absent => text.white().on_bright_black().bold(),
    }
}

/// Format a guess as a row of colored tiles
#[must_use]
pub fn colored_row(word: &Word, feedback: &Feedback) -> String {
    word.chars()
        .iter()
        .zip(feedback.letters())
        .map(|(&letter, &kind)| colored_tile(letter, kind).to_string())
        .collect()
}

/// Feedback as G/Y/- markers, e.g. "G--GG"
#[must_use]
pub fn marker_row(feedback: &Feedback) -> String {
    feedback
        .letters()
        .iter()
        .map(|kind| match kind {
            LetterFeedback::Correct => 'G',
            LetterFeedback::Present => 'Y',
            LetterFeedback::Absent => '-',
        })
        .collect()
}
