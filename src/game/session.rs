//! Game session: the engine's state machine
//!
//! A `Game` owns the target word, the guess buffer and the submitted history.
//! Input flows through three events (`on_letter_key`, `on_delete`, `on_submit`)
//! and one signal from the presentation layer (`reveal_complete`).
//!
//! ```text
//! AwaitingInput -> Submitting -> RevealingFeedback -> AwaitingInput
//!                      |                          \-> Terminal
//!                      \-> AwaitingInput (rejected)
//! ```

use super::buffer::GuessBuffer;
use super::dictionary::Dictionary;
use super::error::{DictionaryError, GuessError};
use crate::core::{ATTEMPTS_LIMIT, Feedback, WORD_LENGTH, Word};
use rand::Rng;
use tracing::{debug, info};

/// Win/loss state of the game; only moves forward
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    InProgress,
    Won,
    Lost,
}

impl GameState {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Where the engine is in handling input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputPhase {
    AwaitingInput,
    Submitting,
    RevealingFeedback,
    Terminal,
}

/// Result reported to the presentation layer after a guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameOutcome {
    Continuing,
    Won,
    Lost(Word),
}

/// An accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub word: Word,
    pub feedback: Feedback,
    pub outcome: GameOutcome,
}

/// A submitted guess and its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    pub word: Word,
    pub feedback: Feedback,
}

/// One game session
#[derive(Debug)]
pub struct Game<'a> {
    dictionary: &'a Dictionary,
    target: Word,
    max_attempts: usize,
    buffer: GuessBuffer,
    history: Vec<GuessRecord>,
    state: GameState,
    phase: InputPhase,
}

impl<'a> Game<'a> {
    /// Start a game with a random target from the dictionary
    pub fn new<R: Rng + ?Sized>(
        dictionary: &'a Dictionary,
        max_attempts: usize,
        rng: &mut R,
    ) -> Self {
        let target = dictionary.random_word(rng).clone();
        Self::start(dictionary, target, max_attempts)
    }

    /// Start a game with a fixed target
    ///
    /// # Errors
    /// Returns an error if `target` is not a valid word or not in the dictionary.
    pub fn with_target(
        dictionary: &'a Dictionary,
        target: &str,
        max_attempts: usize,
    ) -> Result<Self, DictionaryError> {
        let word = Word::new(target)?;
        let target = dictionary
            .get(word.text())
            .cloned()
            .ok_or_else(|| DictionaryError::TargetNotInDictionary(word.text().to_string()))?;
        Ok(Self::start(dictionary, target, max_attempts))
    }

    fn start(dictionary: &'a Dictionary, target: Word, max_attempts: usize) -> Self {
        let max_attempts = max_attempts.clamp(1, ATTEMPTS_LIMIT);
        info!(max_attempts, dictionary_size = dictionary.len(), "game started");
        Self {
            dictionary,
            target,
            max_attempts,
            buffer: GuessBuffer::new(),
            history: Vec::with_capacity(max_attempts),
            state: GameState::InProgress,
            phase: InputPhase::AwaitingInput,
        }
    }

    /// Throw away the current game and start over with a new random target
    pub fn restart<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        *self = Self::new(self.dictionary, self.max_attempts, rng);
    }

    /// Type a letter into the current row
    ///
    /// Returns `true` if the buffer changed. Ignored while input is suppressed,
    /// when the row is full, or for anything other than `[a-zA-Z]`.
    pub fn on_letter_key(&mut self, letter: char) -> bool {
        self.accepting_input() && self.buffer.push(letter)
    }

    /// Erase the last typed letter
    ///
    /// Returns `true` if a letter was removed.
    pub fn on_delete(&mut self) -> bool {
        self.accepting_input() && self.buffer.pop().is_some()
    }

    /// Submit the current row
    ///
    /// On success the guess is recorded, the game state is updated and the
    /// engine waits for [`Game::reveal_complete`] before accepting more input.
    /// On rejection nothing changes and the buffer is kept for editing.
    ///
    /// # Errors
    /// - `IncompleteGuess` if the row is not full
    /// - `NotInDictionary` if the word is unknown
    /// - `InputSuppressed` during a reveal or after the game ended
    pub fn on_submit(&mut self) -> Result<Evaluation, GuessError> {
        if !self.accepting_input() {
            return Err(GuessError::InputSuppressed);
        }

        self.phase = InputPhase::Submitting;
        let result = self.submit_buffer();
        self.phase = match result {
            Ok(_) => InputPhase::RevealingFeedback,
            Err(_) => InputPhase::AwaitingInput,
        };

        match &result {
            Ok(evaluation) => debug!(
                guess = evaluation.word.text(),
                feedback = %evaluation.feedback.to_emoji(),
                attempt = self.history.len(),
                "guess accepted"
            ),
            Err(err) => debug!(buffer = %self.buffer.as_string(), %err, "guess rejected"),
        }

        result
    }

    /// Replace the current row with `word` and submit it
    ///
    /// # Errors
    /// Same as [`Game::on_submit`]. A word that is not `WORD_LENGTH` ASCII
    /// letters is rejected as `IncompleteGuess` without touching the buffer;
    /// `len` counts its letters.
    pub fn guess(&mut self, word: &str) -> Result<Evaluation, GuessError> {
        if !self.accepting_input() {
            return Err(GuessError::InputSuppressed);
        }

        let len = word.chars().filter(char::is_ascii_alphabetic).count();
        if len != WORD_LENGTH || word.chars().count() != WORD_LENGTH {
            return Err(GuessError::IncompleteGuess { len });
        }

        self.buffer.clear();
        for letter in word.chars() {
            self.buffer.push(letter);
        }
        self.on_submit()
    }

    fn submit_buffer(&mut self) -> Result<Evaluation, GuessError> {
        if self.buffer.len() != WORD_LENGTH {
            return Err(GuessError::IncompleteGuess {
                len: self.buffer.len(),
            });
        }

        let text = self.buffer.as_string();
        let word = self
            .dictionary
            .get(&text)
            .cloned()
            .ok_or(GuessError::NotInDictionary(text))?;

        let feedback = Feedback::evaluate(&word, &self.target);
        self.history.push(GuessRecord {
            word: word.clone(),
            feedback,
        });

        // Exact match wins even on the last attempt
        if feedback.is_perfect() {
            self.state = GameState::Won;
            info!(attempts = self.history.len(), "game won");
        } else if self.history.len() >= self.max_attempts {
            self.state = GameState::Lost;
            info!(target = self.target.text(), "game lost");
        }

        Ok(Evaluation {
            word,
            feedback,
            outcome: self.outcome(),
        })
    }

    /// Signal that the presentation layer finished revealing the last guess
    ///
    /// Clears the row and re-enables input, or locks input for good if the game
    /// is over. Outside a reveal this only reports the current outcome.
    pub fn reveal_complete(&mut self) -> GameOutcome {
        if self.phase == InputPhase::RevealingFeedback {
            self.buffer.clear();
            self.phase = if self.state.is_terminal() {
                InputPhase::Terminal
            } else {
                InputPhase::AwaitingInput
            };
        }
        self.outcome()
    }

    #[must_use]
    pub fn outcome(&self) -> GameOutcome {
        match self.state {
            GameState::InProgress => GameOutcome::Continuing,
            GameState::Won => GameOutcome::Won,
            GameState::Lost => GameOutcome::Lost(self.target.clone()),
        }
    }

    fn accepting_input(&self) -> bool {
        self.phase == InputPhase::AwaitingInput
    }

    #[must_use]
    pub fn current_letters(&self) -> &[char] {
        self.buffer.letters()
    }

    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub const fn phase(&self) -> InputPhase {
        self.phase
    }

    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        self.max_attempts.saturating_sub(self.history.len())
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }
}
