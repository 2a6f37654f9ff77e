//! Interactive terminal UI
//!
//! Presentation layer: turns terminal events into engine input and draws the
//! result with tile and keyboard animations.

mod animation;
mod app;
mod keyboard;
mod rendering;

pub use animation::{Alert, Dance, RevealTimeline, Shake};
pub use app::{App, run_tui};
pub use keyboard::{KeyAction, KeyboardState};
