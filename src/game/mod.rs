//! Game engine
//!
//! Owns all mutable game state. Presentation code forwards input events here and
//! renders what comes back; it never holds game state of its own.

mod buffer;
mod dictionary;
mod error;
mod session;

pub use buffer::GuessBuffer;
pub use dictionary::Dictionary;
pub use error::{DictionaryError, GuessError};
pub use session::{Evaluation, Game, GameOutcome, GameState, GuessRecord, InputPhase};
