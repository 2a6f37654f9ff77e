//! In-progress guess buffer

use crate::core::WORD_LENGTH;

/// Letters typed for the current row, not yet submitted
///
/// Never holds more than `WORD_LENGTH` letters; all letters are lowercase ASCII.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessBuffer {
    letters: Vec<char>,
}

impl GuessBuffer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            letters: Vec::with_capacity(WORD_LENGTH),
        }
    }

    /// Append a letter, lowercased
    ///
    /// Returns `false` without changing anything when the buffer is full or the
    /// input is not an ASCII letter.
    pub fn push(&mut self, letter: char) -> bool {
        if self.is_full() || !letter.is_ascii_alphabetic() {
            return false;
        }
        self.letters.push(letter.to_ascii_lowercase());
        true
    }

    /// Remove the last letter, if any
    pub fn pop(&mut self) -> Option<char> {
        self.letters.pop()
    }

    pub fn clear(&mut self) {
        self.letters.clear();
    }

    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.letters.len() >= WORD_LENGTH
    }

    #[must_use]
    pub fn as_string(&self) -> String {
        self.letters.iter().collect()
    }
}
