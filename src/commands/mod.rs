//! Command implementations

pub mod check;
pub mod simple;

pub use check::{CheckResult, check_guess, print_check_result};
pub use simple::{LineCommand, play_line, run_simple};
