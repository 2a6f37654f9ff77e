//! Terminal output formatting
//!
//! Display utilities for the line-based modes.

pub mod display;
pub mod formatters;

pub use display::{print_history, print_outcome};
