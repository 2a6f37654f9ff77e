//! On-screen keyboard: layout, hit testing and per-letter colouring

use crate::core::{Feedback, LetterFeedback, Word};
use ratatui::layout::Rect;

/// Letter rows, top to bottom
pub const ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

const LETTER_WIDTH: u16 = 3;
const ENTER_WIDTH: u16 = 7;
const DELETE_WIDTH: u16 = 5;
const GAP: u16 = 1;
/// Terminal lines per keyboard row (key line plus spacer)
pub const ROW_HEIGHT: u16 = 2;

/// The three input events the engine understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Letter(char),
    Enter,
    Delete,
}

impl KeyAction {
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::Letter(c) => format!(" {} ", c.to_ascii_uppercase()),
            Self::Enter => " ENTER ".to_string(),
            Self::Delete => " DEL ".to_string(),
        }
    }

    const fn width(self) -> u16 {
        match self {
            Self::Letter(_) => LETTER_WIDTH,
            Self::Enter => ENTER_WIDTH,
            Self::Delete => DELETE_WIDTH,
        }
    }
}

/// Keys of one row in display order; the bottom row is framed by Enter and Delete
#[must_use]
pub fn row_keys(row: usize) -> Vec<KeyAction> {
    let mut keys: Vec<KeyAction> = ROWS[row].chars().map(KeyAction::Letter).collect();
    if row == ROWS.len() - 1 {
        keys.insert(0, KeyAction::Enter);
        keys.push(KeyAction::Delete);
    }
    keys
}

/// Screen rectangles of every key in `row`, centred in `area`
#[must_use]
pub fn row_layout(area: Rect, row: usize) -> Vec<(KeyAction, Rect)> {
    let keys = row_keys(row);
    let total: u16 = keys.iter().map(|k| k.width()).sum::<u16>()
        + GAP * (keys.len() as u16).saturating_sub(1);

    let y = area.y + row as u16 * ROW_HEIGHT;
    let mut x = area.x + area.width.saturating_sub(total) / 2;

    keys.into_iter()
        .map(|key| {
            let rect = Rect::new(x, y, key.width(), 1);
            x += key.width() + GAP;
            (key, rect)
        })
        .collect()
}

/// Find the key drawn at terminal cell (`column`, `line`)
#[must_use]
pub fn key_at(area: Rect, column: u16, line: u16) -> Option<KeyAction> {
    (0..ROWS.len())
        .flat_map(|row| row_layout(area, row))
        .find(|(_, rect)| {
            column >= rect.x && column < rect.x + rect.width && line == rect.y
        })
        .map(|(key, _)| key)
}

/// Best feedback seen for each letter this game
///
/// A key's colour only ever improves: Correct beats Present beats Absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardState {
    letters: [Option<LetterFeedback>; 26],
}

impl KeyboardState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record feedback for a single letter, keeping the best seen
    pub fn record(&mut self, letter: u8, feedback: LetterFeedback) {
        if let Some(slot) = Self::index(letter).and_then(|i| self.letters.get_mut(i)) {
            *slot = Some(slot.map_or(feedback, |seen| seen.max(feedback)));
        }
    }

    /// Record the letter at `position` of a revealed guess
    pub fn record_tile(&mut self, word: &Word, feedback: &Feedback, position: usize) {
        self.record(word.char_at(position), feedback.letters()[position]);
    }

    #[must_use]
    pub fn get(&self, letter: char) -> Option<LetterFeedback> {
        u8::try_from(letter)
            .ok()
            .and_then(Self::index)
            .and_then(|i| self.letters[i])
    }

    pub fn reset(&mut self) {
        self.letters = [None; 26];
    }

    fn index(letter: u8) -> Option<usize> {
        letter
            .is_ascii_alphabetic()
            .then(|| usize::from(letter.to_ascii_lowercase() - b'a'))
    }
}
