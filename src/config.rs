//! Command-line configuration

use crate::core::{ATTEMPTS_LIMIT, MAX_ATTEMPTS};
use crate::game::{Dictionary, DictionaryError};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use std::time::Duration;
use tracing::level_filters::LevelFilter;

#[derive(Debug, Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the hidden five-letter word in six tries",
    version,
    author
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Wordlist: 'all' (default, embedded dictionary) or path to file
    #[arg(short = 'w', long, global = true, default_value = "all")]
    pub wordlist: String,

    /// Number of guesses allowed
    #[arg(
        short = 'm',
        long,
        global = true,
        default_value_t = MAX_ATTEMPTS,
        value_parser = parse_max_attempts
    )]
    pub max_attempts: usize,

    /// Play against this word instead of a random one
    #[arg(short, long, global = true)]
    pub target: Option<String>,

    /// Seed for choosing the target word
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Duration of a single tile flip, in milliseconds
    #[arg(long, global = true, default_value_t = 500)]
    pub flip_ms: u64,

    /// Duration of the victory dance, in milliseconds
    #[arg(long, global = true, default_value_t = 500)]
    pub dance_ms: u64,

    /// Write logs to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Log level: off, error, warn, info, debug, trace
    #[arg(long, global = true, default_value = "info")]
    pub log_level: LevelFilter,
}

fn parse_max_attempts(arg: &str) -> Result<usize, String> {
    let value: usize = arg.parse().map_err(|e| format!("{e}"))?;
    if (1..=ATTEMPTS_LIMIT).contains(&value) {
        Ok(value)
    } else {
        Err(format!("must be between 1 and {ATTEMPTS_LIMIT}"))
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based mode without TUI
    Simple,

    /// Print the feedback a guess would get against a target
    Check {
        /// The guessed word
        guess: String,

        /// The target word
        target: String,
    },
}

/// Where the dictionary comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordlistSource {
    Embedded,
    File(PathBuf),
}

impl WordlistSource {
    #[must_use]
    pub fn from_arg(arg: &str) -> Self {
        match arg {
            "all" => Self::Embedded,
            path => Self::File(PathBuf::from(path)),
        }
    }

    /// Load the dictionary this source points at
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or yields no valid words.
    pub fn load(&self) -> Result<Dictionary, DictionaryError> {
        match self {
            Self::Embedded => Dictionary::embedded(),
            Self::File(path) => Dictionary::from_file(path),
        }
    }
}

/// Settings for a game session
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub wordlist: WordlistSource,
    pub max_attempts: usize,
    pub target: Option<String>,
    pub seed: Option<u64>,
    pub flip_duration: Duration,
    pub dance_duration: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            wordlist: WordlistSource::Embedded,
            max_attempts: MAX_ATTEMPTS,
            target: None,
            seed: None,
            flip_duration: Duration::from_millis(500),
            dance_duration: Duration::from_millis(500),
        }
    }
}

impl GameConfig {
    /// Random source for target selection, seeded when requested
    #[must_use]
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        }
    }
}

impl From<&Cli> for GameConfig {
    fn from(cli: &Cli) -> Self {
        Self {
            wordlist: WordlistSource::from_arg(&cli.wordlist),
            max_attempts: cli.max_attempts,
            target: cli.target.clone(),
            seed: cli.seed,
            flip_duration: Duration::from_millis(cli.flip_ms),
            dance_duration: Duration::from_millis(cli.dance_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn defaults_match_classic_rules() {
        let cli = Cli::try_parse_from(["wordle_game"]).unwrap();
        let config = GameConfig::from(&cli);

        assert!(cli.command.is_none());
        assert_eq!(config.wordlist, WordlistSource::Embedded);
        assert_eq!(config.max_attempts, 6);
        assert_eq!(config.flip_duration, Duration::from_millis(500));
        assert_eq!(cli.log_level, LevelFilter::INFO);
    }

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "wordle_game",
            "simple",
            "--target",
            "apple",
            "--seed",
            "9",
            "-w",
            "words.txt",
            "--log-level",
            "debug",
        ])
        .unwrap();
        let config = GameConfig::from(&cli);

        assert!(matches!(cli.command, Some(Command::Simple)));
        assert_eq!(config.target.as_deref(), Some("apple"));
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.wordlist, WordlistSource::File("words.txt".into()));
        assert_eq!(cli.log_level, LevelFilter::DEBUG);
    }

    #[test]
    fn parses_check_command() {
        let cli = Cli::try_parse_from(["wordle_game", "check", "angle", "apple"]).unwrap();
        match cli.command {
            Some(Command::Check { guess, target }) => {
                assert_eq!(guess, "angle");
                assert_eq!(target, "apple");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn max_attempts_is_bounded() {
        let cli = Cli::try_parse_from(["wordle_game", "--max-attempts", "20"]).unwrap();
        assert_eq!(cli.max_attempts, ATTEMPTS_LIMIT);

        for bad in ["0", "21", "30000", "-1", "six"] {
            assert!(
                Cli::try_parse_from(["wordle_game", "-m", bad]).is_err(),
                "accepted {bad}"
            );
        }
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let config = GameConfig {
            seed: Some(3),
            ..GameConfig::default()
        };
        let a: u64 = config.rng().random();
        let b: u64 = config.rng().random();
        assert_eq!(a, b);
    }
}
