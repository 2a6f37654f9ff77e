//! Error types for the game engine

use crate::core::{WORD_LENGTH, WordError};
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Reasons a submission is turned down
///
/// None of these change game state. The first two are shown to the player;
/// `InputSuppressed` is returned while a reveal is running or the game is over
/// and should be ignored silently.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("Not enough letters")]
    IncompleteGuess { len: usize },
    #[error("Word is not in the dictionary")]
    NotInDictionary(String),
    #[error("Input is not accepted right now")]
    InputSuppressed,
}

impl GuessError {
    /// Whether the player should see an alert (and the row shake) for this rejection
    #[must_use]
    pub const fn is_user_facing(&self) -> bool {
        !matches!(self, Self::InputSuppressed)
    }
}

/// Errors building a dictionary or starting a game
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("dictionary contains no {len}-letter words", len = WORD_LENGTH)]
    Empty,
    #[error("failed to read word list {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid target word")]
    InvalidTarget(#[from] WordError),
    #[error("target word '{0}' is not in the dictionary")]
    TargetNotInDictionary(String),
}
