//! Simple interactive CLI mode
//!
//! Line-based game without TUI: each line is a whole guess, revealed at once.

use crate::game::{Game, GameOutcome, GuessError};
use crate::output::{print_history, print_outcome};
use anyhow::{Context, Result};
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// What a line of input asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineCommand {
    Quit,
    New,
    Guess(String),
}

impl LineCommand {
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        match line.to_lowercase().as_str() {
            "quit" | "exit" | ":q" => Self::Quit,
            "new" | ":n" => Self::New,
            _ => Self::Guess(line.to_string()),
        }
    }
}

/// Submit a whole word and finish its reveal immediately
///
/// # Errors
///
/// Returns the engine's rejection unchanged.
pub fn play_line(game: &mut Game, word: &str) -> Result<GameOutcome, GuessError> {
    game.guess(word)?;
    Ok(game.reveal_complete())
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<R: Rng + ?Sized>(game: &mut Game, rng: &mut R) -> Result<()> {
    let stdin = io::stdin();
    run_simple_with(game, rng, &mut stdin.lock())
}

/// Game loop over any line source
///
/// # Errors
///
/// Returns an error if reading input or flushing output fails.
pub fn run_simple_with<R: Rng + ?Sized, B: BufRead>(
    game: &mut Game,
    rng: &mut R,
    input: &mut B,
) -> Result<()> {
    println!("\n╔══════════════════════════════════════════╗");
    println!("║          Wordle - Simple Mode            ║");
    println!("╚══════════════════════════════════════════╝\n");
    println!(
        "Guess the hidden word in {} tries. Commands: 'new', 'quit'\n",
        game.max_attempts()
    );

    loop {
        let over = game.state().is_terminal();
        let prompt = if over {
            "Play again? (new/quit)".to_string()
        } else {
            format!("Guess {}/{}", game.history().len() + 1, game.max_attempts())
        };

        print!("{prompt}: ");
        io::stdout().flush().context("failed to flush stdout")?;

        let mut line = String::new();
        if input.read_line(&mut line).context("failed to read input")? == 0 {
            println!();
            return Ok(());
        }

        match LineCommand::parse(&line) {
            LineCommand::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            LineCommand::New => {
                game.restart(rng);
                println!("\n🔄 New game started!\n");
            }
            LineCommand::Guess(_) if over => {}
            LineCommand::Guess(word) => match play_line(game, &word) {
                Ok(outcome) => {
                    println!();
                    print_history(game.history());
                    print_outcome(game, &outcome);
                }
                Err(err) if err.is_user_facing() => {
                    println!("{}\n", format!("❌ {err}").red());
                }
                Err(_) => {}
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MAX_ATTEMPTS;
    use crate::game::{Dictionary, GameState};
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;

    fn dictionary() -> Dictionary {
        Dictionary::new(words_from_slice(&["apple", "angle", "crane"])).unwrap()
    }

    #[test]
    fn parse_commands() {
        assert_eq!(LineCommand::parse(" QUIT \n"), LineCommand::Quit);
        assert_eq!(LineCommand::parse("new"), LineCommand::New);
        assert_eq!(
            LineCommand::parse("Angle\n"),
            LineCommand::Guess("Angle".into())
        );
    }

    #[test]
    fn play_line_reveals_immediately() {
        let dict = dictionary();
        let mut game = Game::with_target(&dict, "apple", MAX_ATTEMPTS).unwrap();

        assert_eq!(play_line(&mut game, "angle"), Ok(GameOutcome::Continuing));
        assert!(game.current_letters().is_empty());
        assert_eq!(play_line(&mut game, "apple"), Ok(GameOutcome::Won));
        assert_eq!(
            play_line(&mut game, "crane"),
            Err(GuessError::InputSuppressed)
        );
    }

    #[test]
    fn play_line_rejections() {
        let dict = dictionary();
        let mut game = Game::with_target(&dict, "apple", MAX_ATTEMPTS).unwrap();

        assert_eq!(
            play_line(&mut game, "ang"),
            Err(GuessError::IncompleteGuess { len: 3 })
        );
        assert_eq!(
            play_line(&mut game, "zzzzz"),
            Err(GuessError::NotInDictionary("zzzzz".into()))
        );
        assert!(game.history().is_empty());
    }

    #[test]
    fn scripted_session_wins_then_quits() {
        let dict = dictionary();
        let mut game = Game::with_target(&dict, "apple", MAX_ATTEMPTS).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        let mut input = Cursor::new("ang\nangle\napple\ncrane\nquit\n");

        run_simple_with(&mut game, &mut rng, &mut input).unwrap();

        assert_eq!(game.state(), GameState::Won);
        assert_eq!(game.history().len(), 2);
    }

    #[test]
    fn scripted_session_ends_on_eof() {
        let dict = dictionary();
        let mut game = Game::with_target(&dict, "apple", MAX_ATTEMPTS).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        let mut input = Cursor::new("angle\nnew\n");

        run_simple_with(&mut game, &mut rng, &mut input).unwrap();
        assert!(game.history().is_empty());
    }
}
