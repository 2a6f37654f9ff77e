//! Wordle Game - CLI
//!
//! Word-guessing game with TUI and line-based modes.

use anyhow::{Context, Result};
use clap::Parser;
use wordle_game::{
    commands::{check_guess, print_check_result, run_simple},
    config::{Cli, Command, GameConfig},
    game::{Dictionary, Game},
    logging,
};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _log_guard = logging::init(cli.log_file.as_deref(), cli.log_level)?;

    let config = GameConfig::from(&cli);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Command::Play);

    match command {
        Command::Check { guess, target } => run_check_command(&guess, &target),
        Command::Play => {
            let dictionary = load_dictionary(&config)?;
            run_play_command(&dictionary, config)
        }
        Command::Simple => {
            let dictionary = load_dictionary(&config)?;
            run_simple_command(&dictionary, &config)
        }
    }
}

fn load_dictionary(config: &GameConfig) -> Result<Dictionary> {
    config
        .wordlist
        .load()
        .with_context(|| format!("failed to load dictionary from {:?}", config.wordlist))
}

/// Start a game honouring `--target`
fn start_game<'a>(
    dictionary: &'a Dictionary,
    config: &GameConfig,
    rng: &mut rand::rngs::StdRng,
) -> Result<Game<'a>> {
    match &config.target {
        Some(target) => Game::with_target(dictionary, target, config.max_attempts)
            .context("invalid --target"),
        None => Ok(Game::new(dictionary, config.max_attempts, rng)),
    }
}

fn run_check_command(guess: &str, target: &str) -> Result<()> {
    let result = check_guess(guess, target).context("cannot check guess")?;
    print_check_result(&result);
    Ok(())
}

fn run_simple_command(dictionary: &Dictionary, config: &GameConfig) -> Result<()> {
    let mut rng = config.rng();
    let mut game = start_game(dictionary, config, &mut rng)?;
    run_simple(&mut game, &mut rng)
}

fn run_play_command(dictionary: &Dictionary, config: GameConfig) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let mut rng = config.rng();
    let game = start_game(dictionary, &config, &mut rng)?;
    let app = App::new(game, config, rng);
    run_tui(app)
}
