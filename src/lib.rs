//! Wordle Game
//!
//! A terminal word-guessing game: find the hidden word in six tries with
//! per-letter feedback after every guess.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::MAX_ATTEMPTS;
//! use wordle_game::game::{Dictionary, Game, GameOutcome};
//!
//! let dictionary = Dictionary::embedded().unwrap();
//! let mut game = Game::with_target(&dictionary, "apple", MAX_ATTEMPTS).unwrap();
//!
//! for letter in "angle".chars() {
//!     game.on_letter_key(letter);
//! }
//! let evaluation = game.on_submit().unwrap();
//! println!("{}", evaluation.feedback.to_emoji());
//!
//! // The presentation layer signals when its reveal animation is done
//! assert_eq!(game.reveal_complete(), GameOutcome::Continuing);
//! ```

// Core domain types
pub mod core;

// Game engine
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Command-line configuration
pub mod config;

// Log setup
pub mod logging;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
