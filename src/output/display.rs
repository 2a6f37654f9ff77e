//! Display functions for command results

use super::formatters::colored_row;
use crate::game::{Game, GameOutcome, GuessRecord};
use colored::Colorize;

/// Print the board so far, one colored row per submitted guess
pub fn print_history(history: &[GuessRecord]) {
    for (i, record) in history.iter().enumerate() {
        println!(
            "  {} {}  {}",
            (i + 1).to_string().bright_black(),
            colored_row(&record.word, &record.feedback),
            record.feedback.to_emoji()
        );
    }
}

/// Print the end-of-game banner
pub fn print_outcome(game: &Game, outcome: &GameOutcome) {
    match outcome {
        GameOutcome::Continuing => {
            println!(
                "  {} guesses left\n",
                game.attempts_remaining().to_string().bright_cyan()
            );
        }
        GameOutcome::Won => {
            println!("\n{}", "═".repeat(40).bright_cyan());
            println!("{}", "    🎉  CONGRATS! You won!  🎉".bright_green().bold());
            println!("{}", "═".repeat(40).bright_cyan());
            let turns = game.history().len();
            println!(
                "\n  Solved in {} {}\n",
                turns.to_string().bright_cyan().bold(),
                if turns == 1 { "guess" } else { "guesses" }
            );
        }
        GameOutcome::Lost(target) => {
            println!(
                "\n  {} {}\n",
                "You lost! Word was:".red().bold(),
                target.text().to_uppercase().bright_yellow().bold()
            );
        }
    }
}
