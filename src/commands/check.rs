//! Feedback check command
//!
//! Scores one guess against a chosen target without playing a game.

use crate::core::{Feedback, Word, WordError};
use crate::output::formatters::{colored_row, marker_row};

/// Result of checking a guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub guess: Word,
    pub target: Word,
    pub feedback: Feedback,
}

/// Evaluate `guess` against `target`
///
/// Neither word has to be in the dictionary.
///
/// # Errors
///
/// Returns an error if either word is not a valid word.
pub fn check_guess(guess: &str, target: &str) -> Result<CheckResult, WordError> {
    let guess = Word::new(guess)?;
    let target = Word::new(target)?;
    let feedback = Feedback::evaluate(&guess, &target);

    Ok(CheckResult {
        guess,
        target,
        feedback,
    })
}

/// Print a check result as colored tiles, emoji and markers
pub fn print_check_result(result: &CheckResult) {
    println!(
        "{}  {}  {}",
        colored_row(&result.guess, &result.feedback),
        result.feedback.to_emoji(),
        marker_row(&result.feedback)
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterFeedback::{Absent, Correct, Present};

    #[test]
    fn check_reports_feedback() {
        let result = check_guess("EPPAA", "apple").unwrap();
        assert_eq!(result.guess.text(), "eppaa");
        assert_eq!(
            result.feedback.letters(),
            &[Present, Correct, Correct, Present, Present]
        );
    }

    #[test]
    fn check_exact_is_perfect() {
        assert!(check_guess("apple", "apple").unwrap().feedback.is_perfect());
        assert_eq!(
            check_guess("angle", "apple").unwrap().feedback.letters(),
            &[Correct, Absent, Absent, Correct, Correct]
        );
    }

    #[test]
    fn check_rejects_invalid_words() {
        assert_eq!(
            check_guess("app", "apple"),
            Err(WordError::InvalidLength(3))
        );
        assert!(check_guess("apple", "appl!").is_err());
    }
}
