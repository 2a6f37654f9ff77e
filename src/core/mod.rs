//! Core domain types for the word game
//!
//! This module contains the fundamental domain types with no I/O.
//! All types here are pure and testable.

mod feedback;
mod word;

pub use feedback::{Feedback, LetterFeedback};
pub use word::{Word, WordError};

/// Number of letters in every word
pub const WORD_LENGTH: usize = 5;

/// Number of guesses allowed per game
pub const MAX_ATTEMPTS: usize = 6;

/// Largest number of guesses a game can be configured with
pub const ATTEMPTS_LIMIT: usize = 20;
