//! Word lists for the game dictionary
//!
//! Provides the embedded dictionary compiled into the binary for zero-cost access.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
